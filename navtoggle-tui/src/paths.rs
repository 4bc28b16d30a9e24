//! Where the app keeps its config and logs.

use std::path::PathBuf;

use directories::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "navtoggle", "navtoggle")
}

/// `config.json` under the platform config dir, e.g.
/// `~/.config/navtoggle/config.json` on Linux.
pub fn config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
}

/// Log directory under the platform cache dir, e.g. `~/.cache/navtoggle`.
pub fn log_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}
