use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::rules::{ConfigurationError, RuleTable};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MoveConfig {
    pub symbol: String,
    pub name: String,
    pub beaten_by: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RuleConfig {
    pub title: String,
    pub moves: Vec<MoveConfig>,
}

impl RuleConfig {
    pub fn classic() -> Self {
        let entry = |symbol: &str, name: &str, counter: &str| MoveConfig {
            symbol: symbol.to_owned(),
            name: name.to_owned(),
            beaten_by: vec![counter.to_owned()],
        };
        RuleConfig {
            title: "Rock Paper Scissors".to_owned(),
            moves: vec![
                entry("R", "rock", "P"),
                entry("P", "paper", "S"),
                entry("S", "scissors", "R"),
            ],
        }
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        debug!("Loading rules from {:?}", path);
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn build(&self) -> Result<RuleTable, ConfigurationError> {
        RuleTable::new(self)
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules_path(file: &str) -> String {
        env!("CARGO_MANIFEST_DIR").to_string() + "/../../rules/" + file
    }

    #[test]
    fn classic_file_matches_builtin() {
        let loaded = RuleConfig::load(rules_path("classic.json")).expect("Could not load rules");
        assert_eq!(loaded, RuleConfig::classic());
    }

    #[test]
    fn missing_file_is_read_error() {
        let result = RuleConfig::load(rules_path("does_not_exist.json"));
        assert!(matches!(result, Err(ConfigurationError::Read(_))));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let result = RuleConfig::from_json(r#"{ "title": "x", "moves": [ { "symbol": 1 } ] }"#);
        assert!(matches!(result, Err(ConfigurationError::Parse(_))));
    }

    #[test]
    fn invalid_relation_fails_to_build() {
        let config = RuleConfig::from_json(
            r#"{
                "title": "Broken",
                "moves": [
                    { "symbol": "R", "name": "rock", "beaten_by": ["R"] },
                    { "symbol": "P", "name": "paper", "beaten_by": ["S"] },
                    { "symbol": "S", "name": "scissors", "beaten_by": ["P"] }
                ]
            }"#,
        )
        .expect("Could not parse rules");
        assert!(matches!(
            config.build(),
            Err(ConfigurationError::SelfBeating { .. })
        ));
    }
}
