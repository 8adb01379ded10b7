/*!
 * Common test utilities for the dengon test suite
 */

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Writes a config file with the given JSON content and returns its path
pub fn create_config_file(dir: &TempDir, content: &str) -> Result<PathBuf> {
    let path = dir.path().join("conf.json");
    fs::write(&path, content)?;
    Ok(path)
}

/// Builds an owned intermediate-language list from string literals
pub fn chain_spec(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|c| c.to_string()).collect()
}
