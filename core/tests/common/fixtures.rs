// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests: event source files and
//! configurations pointing at them.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use mocal_core::Config;

/// Returns sample event source content with three valid records.
#[must_use]
pub fn sample_events_json() -> String {
    r#"[
  { "date": "2020-03-15", "title": "Spring cleanup" },
  { "date": "2021-12-24", "title": "Family dinner" },
  { "date": "2019-07-01", "title": "Street market" }
]"#
    .to_string()
}

/// Returns event source content mixing valid and malformed dates.
#[must_use]
pub fn sample_events_with_bad_dates_json() -> String {
    r#"[
  { "date": "2020-03-15", "title": "Kept" },
  { "date": "someday", "title": "Dropped" },
  { "date": "2021-02-30", "title": "Dropped too" }
]"#
    .to_string()
}

/// Returns content that is not valid JSON at all.
#[must_use]
pub fn sample_corrupt_source() -> String {
    "{ this is not json".to_string()
}

/// Returns an event source record for the given date and title.
#[must_use]
pub fn event_record_json(date: &str, title: &str) -> String {
    format!(r#"[{{ "date": "{date}", "title": "{title}" }}]"#)
}

/// Writes an event source file into a fresh temporary directory.
///
/// The returned [`TempDir`] must be kept alive for as long as the path
/// is used.
#[must_use]
pub fn write_events_file(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let path = dir.path().join("events.json");
    fs::write(&path, content).expect("failed to write event source");
    (dir, path)
}

/// Creates a configuration pointing at the given event source path.
#[must_use]
pub fn test_config(events_path: PathBuf) -> Config {
    Config {
        events_path: Some(events_path),
    }
}
