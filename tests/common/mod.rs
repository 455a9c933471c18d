#![allow(dead_code)]

use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use assert_cmd::Command;
use evplan_domain::EventParameters;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Fresh application directory for one test.
pub fn app_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// `evplan_cli` pointed at an isolated home, without colors.
pub fn cli(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("evplan_cli").expect("evplan_cli binary");
    cmd.env("EVPLAN_HOME", home)
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "off")
        .env_remove("EVPLAN_CLI_SCRIPT");
    cmd
}

pub fn scenario_a() -> EventParameters {
    EventParameters::default()
        .with_city("hyderabad")
        .with_venue_type("conference-center")
        .with_catering_type("buffet")
        .with_event_type("corporate")
        .with_audience_size(50)
        .with_hours(4.0, 2.0, 1.0)
}

pub const SCENARIO_A_ARGS: &[&str] = &[
    "--city",
    "hyderabad",
    "--event",
    "corporate",
    "--venue",
    "conference-center",
    "--catering",
    "buffet",
    "--guests",
    "50",
    "--duration",
    "4",
    "--setup",
    "2",
    "--cleanup",
    "1",
];
