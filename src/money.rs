// src/money.rs
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A monetary amount in euro, the only currency the auction house trades in.
/// Values are exact decimals; callers are expected to stay within two
/// fractional digits, which [`Amount::fraction_digits`] lets them check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount {
    value: Decimal,
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer {
        serializer.serialize_str(&self.to_string())
    }
}
impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Amount::from_str(&text)
            .map_err(serde::de::Error::custom)
    }
}

impl Amount {
    pub fn new(value: Decimal) -> Self {
        Amount { value }
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Number of significant fractional digits of the value, independent of
    /// how it was written: `15000.00` counts 0, `0.125` counts 3.
    pub fn fraction_digits(&self) -> u32 {
        self.value.normalize().scale()
    }

    pub fn is_positive(&self) -> bool {
        self.value > Decimal::ZERO
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}€", self.value)
    }
}

impl FromStr for Amount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_suffix('€').unwrap_or(s);
        let value = digits.parse::<Decimal>()
            .map_err(|_| format!("Invalid amount value: {}", s))?;

        Ok(Amount { value })
    }
}
