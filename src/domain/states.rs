// src/domain/states.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle stage of a vehicle's auction. Only ever advances forward:
/// NotStarted -> Active -> Closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuctionState {
    NotStarted,
    Active,
    Closed,
}

impl fmt::Display for AuctionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuctionState::NotStarted => write!(f, "NotStarted"),
            AuctionState::Active => write!(f, "Active"),
            AuctionState::Closed => write!(f, "Closed"),
        }
    }
}

impl FromStr for AuctionState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NotStarted" => Ok(AuctionState::NotStarted),
            "Active" => Ok(AuctionState::Active),
            "Closed" => Ok(AuctionState::Closed),
            _ => Err(format!("Unknown auction state: {}", s)),
        }
    }
}

impl Serialize for AuctionState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer {
        serializer.serialize_str(&self.to_string())
    }
}
impl<'de> Deserialize<'de> for AuctionState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        AuctionState::from_str(&text).map_err(serde::de::Error::custom)
    }
}
