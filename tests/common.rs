#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn lgs() -> Command {
    cargo_bin_cmd!("logscope")
}

/// Create a unique preference-file path inside the system temp dir and
/// remove any existing file
pub fn temp_prefs(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_logscope_prefs.json"));
    let prefs_path = path.to_string_lossy().to_string();
    fs::remove_file(&prefs_path).ok();
    prefs_path
}
