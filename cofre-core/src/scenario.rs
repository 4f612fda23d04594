use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three mutually exclusive picks gating which vault code is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Cidade,
    Floresta,
    Mar,
}

impl Scenario {
    /// Every scenario, in presentation order.
    pub const ALL: [Self; 3] = [Self::Cidade, Self::Floresta, Self::Mar];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cidade => "cidade",
            Self::Floresta => "floresta",
            Self::Mar => "mar",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cidade" => Ok(Self::Cidade),
            "floresta" => Ok(Self::Floresta),
            "mar" => Ok(Self::Mar),
            _ => Err(()),
        }
    }
}

impl From<Scenario> for String {
    fn from(value: Scenario) -> Self {
        value.as_str().to_string()
    }
}
