//! This crate contains the shared pricing types and all fullstack server functions.

pub mod asset;
pub mod erg_units;
pub mod network;
pub mod prefs;
pub mod price_providers;
pub mod price_query;

use asset::PriceResponse;
use dioxus::prelude::*;
use network::Network;
use prefs::user_prefs::UserPrefs;

pub type ApiError = anyhow::Error;

/// Retrieves the user's preferences.
///
/// In the future this may read from a settings file.  For now it just
/// returns the default settings, which read from env vars.
#[post("/api/get_user_prefs")]
pub async fn get_user_prefs() -> Result<UserPrefs, ApiError> {
    Ok(UserPrefs::default())
}

#[post("/api/fission_price")]
pub async fn fission_price(
    network: Network,
    nano_ergs: Option<u64>,
) -> Result<PriceResponse, ApiError> {
    use price_providers::PricingApi;
    pricing::shared_api()
        .await
        .fission_price(network, nano_ergs)
        .await
}

#[post("/api/mint_gold_rate")]
pub async fn mint_gold_rate(network: Network, nano_ergs: u64) -> Result<PriceResponse, ApiError> {
    use price_providers::PricingApi;
    pricing::shared_api()
        .await
        .mint_gold_rate(network, nano_ergs)
        .await
}

#[post("/api/mint_rsv_rate")]
pub async fn mint_rsv_rate(network: Network, nano_ergs: u64) -> Result<PriceResponse, ApiError> {
    use price_providers::PricingApi;
    pricing::shared_api()
        .await
        .mint_rsv_rate(network, nano_ergs)
        .await
}

#[post("/api/transmute_gold_to_rsv_rate")]
pub async fn transmute_gold_to_rsv_rate(
    network: Network,
    amount: f64,
) -> Result<PriceResponse, ApiError> {
    use price_providers::PricingApi;
    pricing::shared_api()
        .await
        .transmute_gold_to_rsv_rate(network, amount)
        .await
}

#[cfg(not(target_arch = "wasm32"))]
mod pricing {
    use tokio::sync::OnceCell;

    use crate::prefs::pricing_api_config::PricingApiConfig;
    use crate::price_providers::ergo_api::ErgoPricingApi;

    /// The pricing client shared by all server functions.
    ///
    /// Built on first use so the `reqwest` connection pool is reused across requests.
    pub async fn shared_api() -> &'static ErgoPricingApi {
        static API: OnceCell<ErgoPricingApi> = OnceCell::const_new();

        API.get_or_init(|| async {
            let config = PricingApiConfig::from_env();
            dioxus_logger::tracing::info!("pricing api: {}", config.base_url());
            ErgoPricingApi::new(&config)
        })
        .await
    }
}
