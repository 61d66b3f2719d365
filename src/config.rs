use std::env;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".bookshelf-manager";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "bookshelf.sqlite";
/// Log file written next to the database while the TUI owns the terminal.
const LOG_FILE_NAME: &str = "bookshelf.log";
/// Environment variable that relocates the data directory.
pub const DATA_DIR_ENV: &str = "BOOKSHELF_DATA_DIR";

/// Resolved on-disk locations used by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub log_path: PathBuf,
}

impl AppPaths {
    /// Resolve paths from `BOOKSHELF_DATA_DIR`, falling back to
    /// `~/.bookshelf-manager`.
    pub fn resolve() -> Result<Self> {
        match env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Ok(Self::in_dir(dir)),
            _ => {
                let base_dirs =
                    BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
                Ok(Self::in_dir(base_dirs.home_dir().join(DATA_DIR_NAME)))
            }
        }
    }

    /// Lay out the application files inside an explicit directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let data_dir = dir.into();
        Self {
            db_path: data_dir.join(DB_FILE_NAME),
            log_path: data_dir.join(LOG_FILE_NAME),
            data_dir,
        }
    }

    /// Create the data directory if it is missing.
    pub fn ensure_data_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir).with_context(|| {
            format!(
                "failed to create data directory {}",
                self.data_dir.display()
            )
        })
    }
}

/// Route `log` output into the log file. `RUST_LOG` picks the level and
/// defaults to `info`.
pub fn init_logging(log_path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to initialize logger")?;
    Ok(())
}
