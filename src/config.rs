use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::ledger::Ledger;

const EXPORT_DIR_ENV: &str = "FINVIZ_EXPORT_DIR";
const EXPORT_FILE_NAME: &str = "finviz-export.csv";
const LOG_FILE_NAME: &str = "finviz.log";

/// Where the ledger's starting state comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LedgerSource {
    Sample,
    Empty,
    Snapshot(PathBuf),
}

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) source: LedgerSource,
    pub(crate) export_dir: PathBuf,
}

impl Settings {
    /// Split global flags (`--from <file>`, `--empty`) out of `args` and read
    /// the environment. Returns the settings and the remaining command words.
    pub(crate) fn from_args(args: &[String]) -> Result<(Self, Vec<String>)> {
        let export_dir = std::env::var_os(EXPORT_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_export_dir);
        Self::parse(args, export_dir)
    }

    fn parse(args: &[String], export_dir: PathBuf) -> Result<(Self, Vec<String>)> {
        let mut source = LedgerSource::Sample;
        let mut rest = Vec::new();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--from" => {
                    let path = iter
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--from requires a snapshot path"))?;
                    source = LedgerSource::Snapshot(PathBuf::from(shellexpand(path)));
                }
                "--empty" => source = LedgerSource::Empty,
                _ => rest.push(arg.clone()),
            }
        }

        Ok((Self { source, export_dir }, rest))
    }

    pub(crate) fn load_ledger(&self) -> Result<Ledger> {
        match &self.source {
            LedgerSource::Sample => {
                crate::seed::sample_ledger().context("Failed to build sample data")
            }
            LedgerSource::Empty => Ok(Ledger::new()),
            LedgerSource::Snapshot(path) => crate::snapshot::load(path)
                .with_context(|| format!("Failed to load snapshot: {}", path.display())),
        }
    }

    pub(crate) fn default_export_path(&self) -> PathBuf {
        self.export_dir.join(EXPORT_FILE_NAME)
    }

    /// Resolve a user-supplied export path, falling back to the default.
    pub(crate) fn export_path(&self, arg: Option<&str>) -> PathBuf {
        match arg.map(str::trim).filter(|a| !a.is_empty()) {
            Some(path) => PathBuf::from(shellexpand(path)),
            None => self.default_export_path(),
        }
    }
}

fn default_export_dir() -> PathBuf {
    directories::UserDirs::new()
        .map(|d| d.home_dir().to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Log file location for the interactive UI, inside the platform data directory.
pub(crate) fn log_file_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "finviz", "finviz")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    ensure_dir(data_dir)?;
    Ok(data_dir.join(LOG_FILE_NAME))
}

fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create data directory: {}", dir.display()))
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_defaults_to_sample_data() {
        let (settings, rest) = Settings::parse(&args(&["summary"]), PathBuf::from("/tmp")).unwrap();
        assert_eq!(settings.source, LedgerSource::Sample);
        assert_eq!(rest, args(&["summary"]));
    }

    #[test]
    fn test_global_flags_are_removed() {
        let (settings, rest) = Settings::parse(
            &args(&["--from", "snap.csv", "budgets"]),
            PathBuf::from("/tmp"),
        )
        .unwrap();
        assert_eq!(settings.source, LedgerSource::Snapshot(PathBuf::from("snap.csv")));
        assert_eq!(rest, args(&["budgets"]));

        let (settings, rest) = Settings::parse(&args(&["--empty"]), PathBuf::from("/tmp")).unwrap();
        assert_eq!(settings.source, LedgerSource::Empty);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_from_without_path_fails() {
        assert!(Settings::parse(&args(&["--from"]), PathBuf::from("/tmp")).is_err());
    }

    #[test]
    fn test_export_path() {
        let (settings, _) = Settings::parse(&[], PathBuf::from("/data")).unwrap();
        assert_eq!(settings.export_path(None), PathBuf::from("/data/finviz-export.csv"));
        assert_eq!(settings.export_path(Some("  ")), PathBuf::from("/data/finviz-export.csv"));
        assert_eq!(settings.export_path(Some("out.csv")), PathBuf::from("out.csv"));
    }

    #[test]
    fn test_load_empty_and_sample() {
        let (settings, _) = Settings::parse(&args(&["--empty"]), PathBuf::from("/tmp")).unwrap();
        assert_eq!(settings.load_ledger().unwrap().transaction_count(), 0);

        let (settings, _) = Settings::parse(&[], PathBuf::from("/tmp")).unwrap();
        assert_eq!(settings.load_ledger().unwrap().transaction_count(), 6);
    }

    #[test]
    fn test_shellexpand_passthrough() {
        assert_eq!(shellexpand("/abs/path.csv"), "/abs/path.csv");
        assert_eq!(shellexpand("relative.csv"), "relative.csv");
    }
}
