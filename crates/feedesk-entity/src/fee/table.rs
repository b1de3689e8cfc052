//! Fee table numbers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which fee table a rate or a loan is priced against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableNumber {
    /// Table one.
    One,
    /// Table two.
    Two,
    /// Table three.
    Three,
    /// Table four.
    Four,
}

impl TableNumber {
    /// All tables, in order.
    pub const ALL: [TableNumber; 4] = [Self::One, Self::Two, Self::Three, Self::Four];

    /// Wire representation, as used in query strings and path segments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::One => "ONE",
            Self::Two => "TWO",
            Self::Three => "THREE",
            Self::Four => "FOUR",
        }
    }
}

impl fmt::Display for TableNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableNumber {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ONE" | "1" => Ok(Self::One),
            "TWO" | "2" => Ok(Self::Two),
            "THREE" | "3" => Ok(Self::Three),
            "FOUR" | "4" => Ok(Self::Four),
            _ => Err(format!("Invalid table number: {s}")),
        }
    }
}
