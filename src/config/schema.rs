use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Contents of `config.yaml`.
///
/// Example YAML:
/// ```yaml
/// user: alice
/// history_path: /home/alice/.config/prakriti/history.json
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// User id assessments are saved under when `--user` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// History file location (default: ~/.config/prakriti/history.json)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_path: Option<PathBuf>,
}

impl Config {
    /// History file to use, falling back to the default location
    pub fn history_path(&self) -> PathBuf {
        self.history_path
            .clone()
            .unwrap_or_else(crate::history::get_history_path)
    }
}
