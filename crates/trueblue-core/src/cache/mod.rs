//! Local caching module for remote resources.
//!
//! This module provides the `ResourceCache`, which memoizes every remote
//! fetch as a JSON file named after the resource (`regionals2014`,
//! `regional2014casj`, `teams2014casj`, `match2014casj_qm1`). Cached
//! entries are never refreshed automatically.

pub mod manager;

pub use manager::ResourceCache;
