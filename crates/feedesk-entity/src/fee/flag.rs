//! Credit card brand groups.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Card brand group a fee applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardFlag {
    /// Mastercard and Visa.
    MasterVisa,
    /// Amex, Elo and Hipercard.
    AmexEloHiper,
}

impl CardFlag {
    /// All brand groups.
    pub const ALL: [CardFlag; 2] = [Self::MasterVisa, Self::AmexEloHiper];

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MasterVisa => "MASTER_VISA",
            Self::AmexEloHiper => "AMEX_ELO_HIPER",
        }
    }
}

impl fmt::Display for CardFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "MASTER_VISA" => Ok(Self::MasterVisa),
            "AMEX_ELO_HIPER" => Ok(Self::AmexEloHiper),
            _ => Err(format!("Invalid card flag: {s}")),
        }
    }
}
