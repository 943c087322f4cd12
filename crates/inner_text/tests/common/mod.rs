#![allow(dead_code, reason = "Each test binary uses a different subset of helpers")]
use anyhow::{Context as _, Result, anyhow};
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the directory containing HTML fixtures for integration tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Every `.html` fixture paired with the `.txt` holding its expected inner text, sorted by path.
pub fn fixture_pairs() -> Result<Vec<(PathBuf, PathBuf)>> {
    let dir = fixtures_dir();
    let entries =
        fs::read_dir(&dir).with_context(|| format!("failed to read {}", dir.display()))?;
    let mut pairs = Vec::new();
    for entry in entries {
        let html = entry?.path();
        if !html
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
        {
            continue;
        }
        let expected = html.with_extension("txt");
        if !expected.exists() {
            return Err(anyhow!("{} has no expected .txt", html.display()));
        }
        pairs.push((html, expected));
    }
    pairs.sort();
    Ok(pairs)
}

pub fn read_expected(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
