use std::any::Any;
use std::env::vars;
use std::path::{Path, PathBuf};

use log::info;
use roster_states::State;
use serde::Deserialize;

const DEFAULT_WINDOW_TITLE: &str = "Roster";

#[derive(Debug, Deserialize)]
struct RawConfig {
    roster_directory: Option<String>,
    roster_window_title: Option<String>,
    roster_filters_open: Option<bool>,
}

/// Runtime configuration, read from `ROSTER_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    directory: Option<PathBuf>,
    window_title: String,
    filters_open: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            directory: None,
            window_title: DEFAULT_WINDOW_TITLE.to_owned(),
            filters_open: false,
        }
    }
}

impl State for RosterConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl RosterConfig {
    /// Initializes configuration from the process environment.
    pub fn init() -> anyhow::Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_vars(vars())
    }

    pub fn from_vars<I, S>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig = serde_env::from_iter(vars)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            roster_directory,
            roster_window_title,
            roster_filters_open,
        } = raw;

        let directory = roster_directory
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        match &directory {
            Some(path) => info!("Using directory file {}", path.display()),
            None => info!("ROSTER_DIRECTORY not set, using the built-in sample directory"),
        }

        let window_title = match roster_window_title {
            Some(title) if title.trim().is_empty() => {
                anyhow::bail!("ROSTER_WINDOW_TITLE must not be empty when set")
            }
            Some(title) => title,
            None => DEFAULT_WINDOW_TITLE.to_owned(),
        };

        Ok(Self {
            directory,
            window_title,
            filters_open: roster_filters_open.unwrap_or(false),
        })
    }

    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    /// Whether the filter panel starts open.
    pub fn filters_open(&self) -> bool {
        self.filters_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_variables() {
        let config = RosterConfig::from_vars(Vec::<(&str, &str)>::new()).unwrap();

        assert_eq!(config, RosterConfig::default());
        assert_eq!(config.window_title(), "Roster");
        assert!(config.directory().is_none());
        assert!(!config.filters_open());
    }

    #[test]
    fn reads_roster_variables() {
        let config = RosterConfig::from_vars(vec![
            ("ROSTER_DIRECTORY", "/srv/roster/users.json"),
            ("ROSTER_WINDOW_TITLE", "Users"),
            ("ROSTER_FILTERS_OPEN", "true"),
            ("UNRELATED", "ignored"),
        ])
        .unwrap();

        assert_eq!(
            config.directory(),
            Some(Path::new("/srv/roster/users.json"))
        );
        assert_eq!(config.window_title(), "Users");
        assert!(config.filters_open());
    }

    #[test]
    fn blank_directory_is_ignored() {
        let config = RosterConfig::from_vars(vec![("ROSTER_DIRECTORY", "  ")]).unwrap();

        assert!(config.directory().is_none());
    }

    #[test]
    fn empty_window_title_is_rejected() {
        let result = RosterConfig::from_vars(vec![("ROSTER_WINDOW_TITLE", " ")]);

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("ROSTER_WINDOW_TITLE")
        );
    }
}
