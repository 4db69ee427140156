//! The pricing API as seen from the client: every call goes through the
//! fullstack server functions exported by the `api` crate.

use api::asset::PriceResponse;
use api::network::Network;
use api::price_providers::PricingApi;
use api::ApiError;

#[derive(Clone, Copy, Debug, Default)]
pub struct ServerPricingApi;

impl PricingApi for ServerPricingApi {
    async fn fission_price(
        &self,
        network: Network,
        nano_ergs: Option<u64>,
    ) -> Result<PriceResponse, ApiError> {
        api::fission_price(network, nano_ergs).await
    }

    async fn mint_gold_rate(
        &self,
        network: Network,
        nano_ergs: u64,
    ) -> Result<PriceResponse, ApiError> {
        api::mint_gold_rate(network, nano_ergs).await
    }

    async fn mint_rsv_rate(
        &self,
        network: Network,
        nano_ergs: u64,
    ) -> Result<PriceResponse, ApiError> {
        api::mint_rsv_rate(network, nano_ergs).await
    }

    async fn transmute_gold_to_rsv_rate(
        &self,
        network: Network,
        amount: f64,
    ) -> Result<PriceResponse, ApiError> {
        api::transmute_gold_to_rsv_rate(network, amount).await
    }
}
