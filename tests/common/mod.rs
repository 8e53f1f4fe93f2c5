//! Common test utilities for integration tests
#![allow(dead_code)]

use sch::{JaDate, ScheduleRecord};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Reference date used throughout the tests (a Sunday)
pub fn today() -> JaDate {
    date(2014, 8, 3)
}

pub fn date(year: i32, month: u32, day: u32) -> JaDate {
    JaDate::new(year, month, day).unwrap()
}

pub fn record(line: &str) -> ScheduleRecord {
    ScheduleRecord::from_record(line, today()).unwrap()
}

pub const SAMPLE_LINES: [&str; 4] = [
    "0 20140801 0 アニメ上映会",
    "1 20140804 -10 CodeIQ提出期限",
    "0 20140807 -18 アルゴリズム 課題提出",
    "0 20140820 10 散髪",
];

/// Create a temporary directory holding a schedule file with `lines`
pub fn schedule_file(lines: &[&str]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schedule-list");
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(&path, content).unwrap();
    (dir, path)
}

pub fn read_lines(path: &PathBuf) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
