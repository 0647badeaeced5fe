//! Comma-delimited scouting report.
//!
//! Every field is quoted and followed by a comma, including the last one,
//! so each line ends with `,\n`. Double quotes inside values are removed
//! rather than escaped. Empty values are written as `""`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::Team;
use crate::utils::{format_stat, strip_quotes};

/// One report column: a header and how to pull the value out of a row.
pub struct Column<T> {
    header: String,
    extract: Box<dyn Fn(&T) -> String>,
}

impl<T> Column<T> {
    pub fn new(header: impl Into<String>, extract: impl Fn(&T) -> String + 'static) -> Self {
        Self {
            header: header.into(),
            extract: Box::new(extract),
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }
}

pub struct ReportExporter<T> {
    columns: Vec<Column<T>>,
}

impl<T> ReportExporter<T> {
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self { columns }
    }

    /// Write the report to `path`, replacing any existing file.
    pub fn export<'r, I>(&self, path: &Path, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = &'r T>,
        T: 'r,
    {
        let file = File::create(path)
            .with_context(|| format!("Failed to create report file: {}", path.display()))?;
        let mut out = BufWriter::new(file);
        let written = self.write(&mut out, rows)?;
        out.flush()?;

        info!(path = %path.display(), rows = written, "Wrote report");
        Ok(())
    }

    /// Write header and rows; returns the number of rows written.
    pub fn write<'r, W, I>(&self, out: &mut W, rows: I) -> Result<usize>
    where
        W: Write,
        I: IntoIterator<Item = &'r T>,
        T: 'r,
    {
        let headers: Vec<&str> = self.columns.iter().map(Column::header).collect();
        writeln!(out, "{},", headers.join(","))?;

        let mut written = 0;
        for row in rows {
            for column in &self.columns {
                let value = (column.extract)(row);
                write!(out, "\"{}\",", strip_quotes(&value))?;
            }
            writeln!(out)?;
            written += 1;
        }
        Ok(written)
    }
}

/// Standard scouting columns. `year` is the researched season and
/// `competition_year` the season the attended events belong to.
pub fn team_columns(year: i32, competition_year: i32) -> Vec<Column<Team>> {
    vec![
        Column::new("Team Number", |t: &Team| t.number.to_string()),
        Column::new("Name", |t: &Team| t.name.clone().unwrap_or_default()),
        Column::new(format!("{} Elimination Average", year), |t: &Team| {
            format_stat(t.elimination_average())
        }),
        Column::new(format!("{} Quals Average", year), |t: &Team| {
            format_stat(t.qualification_average())
        }),
        Column::new(format!("{} Total Average", year), |t: &Team| {
            format_stat(t.overall_average())
        }),
        Column::new("Website", |t: &Team| t.website.clone().unwrap_or_default()),
        Column::new("Location", |t: &Team| t.location.clone().unwrap_or_default()),
        Column::new(format!("Regionals in {}", competition_year), |t: &Team| {
            t.events.join(",")
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PhaseStats;
    use tempfile::TempDir;

    fn team(number: u32, name: &str) -> Team {
        Team {
            number,
            name: Some(name.to_string()),
            website: None,
            location: Some("San Jose, CA".to_string()),
            events: vec!["Silicon Valley Regional".to_string(), "Championship".to_string()],
            quals: PhaseStats::default(),
            elims: PhaseStats::default(),
        }
    }

    fn render(exporter: &ReportExporter<Team>, teams: &[Team]) -> String {
        let mut out = Vec::new();
        exporter.write(&mut out, teams).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_header_and_row_layout() {
        let exporter = ReportExporter::new(vec![
            Column::new("Team Number", |t: &Team| t.number.to_string()),
            Column::new("Name", |t: &Team| t.name.clone().unwrap_or_default()),
        ]);

        let output = render(&exporter, &[team(254, "The \"Cheesy\" Poofs"), team(971, "")]);
        assert_eq!(
            output,
            "Team Number,Name,\n\"254\",\"The Cheesy Poofs\",\n\"971\",\"\",\n"
        );
    }

    #[test]
    fn test_team_columns() {
        let mut poofs = team(254, "The Cheesy Poofs");
        poofs.quals = PhaseStats { total: 120, count: 2 };
        let exporter = ReportExporter::new(team_columns(2014, 2015));

        let output = render(&exporter, &[poofs]);
        let mut lines = output.lines();
        assert_eq!(
            lines.next(),
            Some(
                "Team Number,Name,2014 Elimination Average,2014 Quals Average,\
                 2014 Total Average,Website,Location,Regionals in 2015,"
            )
        );
        assert_eq!(
            lines.next(),
            Some(
                "\"254\",\"The Cheesy Poofs\",\"\",\"60.0\",\"60.0\",\"\",\
                 \"San Jose, CA\",\"Silicon Valley Regional,Championship\","
            )
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_export_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.csv");
        let exporter = ReportExporter::new(team_columns(2014, 2015));

        exporter.export(&path, &[team(1, "One"), team(2, "Two")]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 3);
        assert!(contents.ends_with(",\n"));
    }

    #[test]
    fn test_no_rows_writes_only_header() {
        let exporter = ReportExporter::new(team_columns(2014, 2015));
        let output = render(&exporter, &[]);
        assert_eq!(output.lines().count(), 1);
    }
}
