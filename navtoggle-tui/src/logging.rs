//! File logging with one log per run.
//!
//! The current run writes `latest.log`. On startup the previous
//! `latest.log` is archived as `navtoggle-<timestamp>.log` and only the
//! newest [`KEPT_LOGS`] archives survive.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use simplelog::{Config, LevelFilter, WriteLogger};

pub const KEPT_LOGS: usize = 25;

const LATEST: &str = "latest.log";
const ARCHIVE_PREFIX: &str = "navtoggle-";

/// Archive the previous run's log, prune old archives, and route `log`
/// output into a fresh `latest.log` in `dir`.
pub fn init(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    archive_latest(dir)?;
    let removed = prune_archives(dir, KEPT_LOGS)?;

    let file = File::create(dir.join(LATEST))?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), file).map_err(io::Error::other)?;
    log::debug!("logging to {} ({removed} old log(s) removed)", dir.display());
    Ok(())
}

/// Rename `latest.log` to a timestamped archive. Returns the archive path,
/// or `None` when there was no previous log.
fn archive_latest(dir: &Path) -> io::Result<Option<PathBuf>> {
    let latest = dir.join(LATEST);
    if !latest.exists() {
        return Ok(None);
    }
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S%.3f");
    let archived = dir.join(format!("{ARCHIVE_PREFIX}{stamp}.log"));
    fs::rename(&latest, &archived)?;
    Ok(Some(archived))
}

/// Delete all but the `keep` newest archives and return how many went.
///
/// Archive names embed their timestamp, so name order is age order.
fn prune_archives(dir: &Path, keep: usize) -> io::Result<usize> {
    let mut archives = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_archive = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(ARCHIVE_PREFIX) && n.ends_with(".log"));
        if is_archive {
            archives.push(path);
        }
    }
    archives.sort();

    let excess = archives.len().saturating_sub(keep);
    for path in &archives[..excess] {
        fs::remove_file(path)?;
    }
    Ok(excess)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn archive_name(day: usize) -> String {
        format!("{ARCHIVE_PREFIX}202601{day:02}_120000.000.log")
    }

    #[test]
    fn archive_moves_latest_aside() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(archive_latest(dir.path()).unwrap(), None);

        fs::write(dir.path().join(LATEST), "previous run").unwrap();
        let archived = archive_latest(dir.path()).unwrap().unwrap();

        assert!(!dir.path().join(LATEST).exists());
        assert_eq!(fs::read_to_string(archived).unwrap(), "previous run");
    }

    #[test]
    fn prune_keeps_newest_archives_only() {
        let dir = tempfile::tempdir().unwrap();
        for day in 1..=(KEPT_LOGS + 5) {
            fs::write(dir.path().join(archive_name(day)), "").unwrap();
        }
        fs::write(dir.path().join(LATEST), "").unwrap();
        fs::write(dir.path().join("notes.log"), "").unwrap();

        assert_eq!(prune_archives(dir.path(), KEPT_LOGS).unwrap(), 5);

        for day in 1..=5 {
            assert!(!dir.path().join(archive_name(day)).exists(), "day {day}");
        }
        for day in 6..=(KEPT_LOGS + 5) {
            assert!(dir.path().join(archive_name(day)).exists(), "day {day}");
        }
        assert!(dir.path().join(LATEST).exists());
        assert!(dir.path().join("notes.log").exists());
    }

    #[test]
    fn prune_under_limit_removes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        for day in 1..=3 {
            fs::write(dir.path().join(archive_name(day)), "").unwrap();
        }
        assert_eq!(prune_archives(dir.path(), KEPT_LOGS).unwrap(), 0);
    }
}
