use std::env;

use serde::Deserialize;
use serde::Serialize;

use super::var_or;
use crate::network::Network;

/// Label shown for the payment currency when none is configured.
pub const DEFAULT_BASE_CURRENCY: &str = "USDT";

/// Settings the purchase screens are rendered with.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PurchasePrefs {
    /// The network pricing requests are made against.
    pub network: Network,

    /// The label of the currency purchases are paid in.
    pub base_currency: String,

    /// The maximum purchasable amount. Stands in for the connected wallet's
    /// balance until a wallet is attached.
    pub wallet_balance: f64,
}

impl PurchasePrefs {
    /// Creates a PurchasePrefs instance from environment variables,
    /// with conservative in-code defaults.
    ///
    /// # Environment Variables:
    /// - `ERGO_NETWORK`: "mainnet" or "testnet". defaults to testnet.
    /// - `BASE_CURRENCY`: payment currency label. defaults to USDT.
    /// - `WALLET_BALANCE`: maximum purchasable amount. defaults to 0.
    pub fn from_env() -> Self {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let network = var_or(&lookup, "ERGO_NETWORK", Network::default());

        let base_currency = lookup("BASE_CURRENCY")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_CURRENCY.to_string());

        let mut wallet_balance = var_or(&lookup, "WALLET_BALANCE", 0.0_f64);
        if !wallet_balance.is_finite() {
            dioxus_logger::tracing::warn!("WALLET_BALANCE is not finite, using 0");
            wallet_balance = 0.0;
        }

        Self {
            network,
            base_currency,
            wallet_balance,
        }
    }
}

impl Default for PurchasePrefs {
    fn default() -> Self {
        Self::from_env()
    }
}
