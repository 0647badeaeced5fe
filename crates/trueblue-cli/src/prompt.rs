//! Line-based prompts for the interactive run.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

use trueblue_core::Event;

/// Marker printed in front of every answer
const INPUT_MARKER: &str = "\t--> ";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_answer(&mut self) -> Result<String> {
        write!(self.output, "{}", INPUT_MARKER)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            bail!("Input closed before an answer was given");
        }
        Ok(line.trim_end().to_string())
    }

    /// Ask until the answer is empty or passes `valid`. An empty answer
    /// takes `default` when there is one.
    pub fn ask<F>(&mut self, prompt: &str, valid: F, default: Option<&str>) -> Result<String>
    where
        F: Fn(&str) -> bool,
    {
        match default {
            Some(default) => writeln!(self.output, "{} [{}]:", prompt, default)?,
            None => writeln!(self.output, "{}:", prompt)?,
        }

        let mut answer = self.read_answer()?;
        while !answer.is_empty() && !valid(&answer) {
            answer = self.read_answer()?;
        }

        match default {
            Some(default) if answer.is_empty() => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }

    pub fn ask_year(&mut self) -> Result<i32> {
        loop {
            let answer = self.ask("Enter research year", is_integer, None)?;
            if let Ok(year) = answer.parse() {
                return Ok(year);
            }
        }
    }

    /// Search `events` by name and let the user pick one of the hits
    pub fn choose_event<'e>(&mut self, events: &'e [Event], prompt: &str) -> Result<&'e Event> {
        loop {
            let query = self.ask(prompt, |_| true, None)?;
            let hits: Vec<&Event> = events.iter().filter(|e| e.matches_search(&query)).collect();

            if hits.is_empty() {
                writeln!(self.output, "\nNo events matched \"{}\".", query)?;
                continue;
            }

            writeln!(self.output, "\nResults:")?;
            for (i, event) in hits.iter().enumerate() {
                writeln!(
                    self.output,
                    "\t{}. {} on {}",
                    i + 1,
                    event.display_name(),
                    event.formatted_date()
                )?;
            }

            loop {
                let pick = self.ask("\nEnter regional number", is_integer, Some("1"))?;
                match pick.parse::<usize>() {
                    Ok(n) if (1..=hits.len()).contains(&n) => return Ok(hits[n - 1]),
                    _ => writeln!(self.output, "Pick a number from 1 to {}.", hits.len())?,
                }
            }
        }
    }

    pub fn ask_more(&mut self) -> Result<bool> {
        let answer = self.ask(
            "Type y if you would like to enter another regional, n if not",
            |s| s == "y" || s == "n",
            Some("n"),
        )?;
        Ok(answer == "y")
    }

    pub fn ask_output(&mut self, default: &str) -> Result<String> {
        self.ask("Enter output filename", |s| s.contains('.'), Some(default))
    }

    /// Keys of the events the scouting team is attending
    pub fn collect_attended(&mut self, events: &[Event]) -> Result<Vec<String>> {
        let first = self.choose_event(events, "Enter first regional (search)")?;
        let mut keys = vec![first.key.clone()];

        while self.ask_more()? {
            let next = self.choose_event(events, "Enter additional regional (search)")?;
            keys.push(next.key.clone());
        }
        Ok(keys)
    }
}

fn is_integer(s: &str) -> bool {
    s.parse::<i64>().is_ok()
}
