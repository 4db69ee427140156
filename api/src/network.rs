//! The Ergo network a wallet is connected to.

use serde::Deserialize;
use serde::Serialize;

/// Which Ergo network pricing requests are made against.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIs,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Network {
    Mainnet,
    #[default]
    Testnet,
}

impl Network {
    /// Maps the `isMainnet` flag used by the pricing API back to a network.
    pub fn from_mainnet_flag(is_mainnet: bool) -> Self {
        if is_mainnet {
            Self::Mainnet
        } else {
            Self::Testnet
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Network::from_str("MAINNET"), Ok(Network::Mainnet));
        assert_eq!(Network::from_str("testnet"), Ok(Network::Testnet));
        assert!(Network::from_str("devnet").is_err());
    }

    #[test]
    fn mainnet_flag() {
        assert!(Network::Mainnet.is_mainnet());
        assert!(!Network::default().is_mainnet());
        assert_eq!(Network::from_mainnet_flag(true), Network::Mainnet);
        assert_eq!(Network::Mainnet.to_string(), "mainnet");
    }
}
