use crate::pin::PIN_LEN;
use crate::scenario::Scenario;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const DEFAULT_CODES_DATA: &str = include_str!("../../cofre-web/static/assets/data/codes.json");

/// Scenario-to-code table injected into the state machine at construction.
///
/// Codes are plaintext fixtures shipped with the app, not secrets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultConfig {
    codes: BTreeMap<Scenario, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing code for scenario '{0}'")]
    MissingScenario(Scenario),
    #[error("code for scenario '{scenario}' must be exactly {expected} ASCII digits, got '{code}'")]
    MalformedCode {
        scenario: Scenario,
        code: String,
        expected: usize,
    },
}

impl VaultConfig {
    /// Build a validated config from an explicit code table.
    ///
    /// # Errors
    ///
    /// Returns an error when a scenario has no code or a code is not exactly
    /// [`PIN_LEN`] ASCII digits.
    pub fn new(codes: BTreeMap<Scenario, String>) -> Result<Self, ConfigError> {
        for scenario in Scenario::ALL {
            let code = codes
                .get(&scenario)
                .ok_or(ConfigError::MissingScenario(scenario))?;
            if code.len() != PIN_LEN || !code.chars().all(|c| c.is_ascii_digit()) {
                return Err(ConfigError::MalformedCode {
                    scenario,
                    code: code.clone(),
                    expected: PIN_LEN,
                });
            }
        }
        Ok(Self { codes })
    }

    /// Default table embedded from the static data asset.
    #[must_use]
    pub fn default_config() -> Self {
        serde_json::from_str(DEFAULT_CODES_DATA).unwrap_or_else(|err| {
            log::error!("embedded code table failed to parse: {err}");
            Self::builtin()
        })
    }

    fn builtin() -> Self {
        let codes = Scenario::ALL
            .iter()
            .map(|&scenario| (scenario, builtin_code(scenario).to_string()))
            .collect();
        Self { codes }
    }

    /// Expected code for `scenario`, when the table has one.
    #[must_use]
    pub fn expected(&self, scenario: Scenario) -> Option<&str> {
        self.codes.get(&scenario).map(String::as_str)
    }
}

const fn builtin_code(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::Cidade => "13400",
        Scenario::Floresta => "97521",
        Scenario::Mar => "14386",
    }
}
