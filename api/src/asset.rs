//! Priced assets as returned by the pricing API.

use serde::Deserialize;
use serde::Serialize;

/// A single asset with its price for the pending purchase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub price: f64,
}

impl Asset {
    pub fn new(asset_name: &str, id: &str) -> Self {
        Self {
            asset_name: Some(asset_name.to_string()),
            id: Some(id.to_string()),
            price: 0.0,
        }
    }

    /// The name to show next to the price. Empty when the API omitted it.
    pub fn display_name(&self) -> &str {
        self.asset_name.as_deref().unwrap_or_default()
    }
}

/// The payload every pricing function responds with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceResponse {
    pub data: Vec<Asset>,
}

const NEUTRON_ID: &str = "b444f19bf3ce453d50efebb1c6689d60823ffb11311f3aa11f7a9e0ff1e2bd05";
const PROTON_ID: &str = "0365bbb9b9f21ebb7ea0d3b0cf2b1c2745739e86199e72d4bb0c2d0438b36510";

/// The assets shown before the first price arrives, all priced at zero.
pub fn seed_assets() -> Vec<Asset> {
    vec![
        Asset::new("NEUTRON", NEUTRON_ID),
        Asset::new("PROTON", PROTON_ID),
    ]
}
