//! Defines the pricing API contract and its HTTP implementation.

use crate::asset::PriceResponse;
use crate::network::Network;
use crate::ApiError;

/// A service that prices the tokens a purchase form can buy.
#[allow(async_fn_in_trait)]
pub trait PricingApi {
    /// Price of a fission for `nano_ergs`, or the spot price when `None`.
    async fn fission_price(
        &self,
        network: Network,
        nano_ergs: Option<u64>,
    ) -> Result<PriceResponse, ApiError>;

    /// GLD received when minting with `nano_ergs`.
    async fn mint_gold_rate(
        &self,
        network: Network,
        nano_ergs: u64,
    ) -> Result<PriceResponse, ApiError>;

    /// RSV received when minting with `nano_ergs`.
    async fn mint_rsv_rate(&self, network: Network, nano_ergs: u64)
        -> Result<PriceResponse, ApiError>;

    /// RSV received when transmuting `amount` GLD.
    async fn transmute_gold_to_rsv_rate(
        &self,
        network: Network,
        amount: f64,
    ) -> Result<PriceResponse, ApiError>;
}

/// Provides price data from the Ergo pricing REST service.
pub mod ergo_api {
    use super::*;
    use crate::prefs::pricing_api_config::PricingApiConfig;

    const FISSION_PRICE: &str = "fission/price";
    const MINT_GOLD_RATE: &str = "mint/gold/rate";
    const MINT_RSV_RATE: &str = "mint/rsv/rate";
    const TRANSMUTE_GOLD_TO_RSV_RATE: &str = "transmute/gold-to-rsv/rate";

    /// An implementation of the `PricingApi` trait over HTTP.
    #[derive(Debug, Clone)]
    pub struct ErgoPricingApi {
        client: reqwest::Client,
        base_url: String,
    }

    impl ErgoPricingApi {
        pub fn new(config: &PricingApiConfig) -> Self {
            Self {
                client: reqwest::Client::new(),
                base_url: config.base_url().trim_end_matches('/').to_string(),
            }
        }

        pub fn endpoint(&self, path: &str) -> String {
            format!("{}/{}", self.base_url, path)
        }

        /// Query parameters for a request. `input` is omitted when absent.
        pub fn query_params(network: Network, input: Option<String>) -> Vec<(&'static str, String)> {
            let mut params = vec![("isMainnet", network.is_mainnet().to_string())];
            if let Some(input) = input {
                params.push(("input", input));
            }
            params
        }

        async fn get(
            &self,
            path: &str,
            network: Network,
            input: Option<String>,
        ) -> Result<PriceResponse, ApiError> {
            let resp = self
                .client
                .get(self.endpoint(path))
                .query(&Self::query_params(network, input))
                .send()
                .await?
                .error_for_status()?
                .json::<PriceResponse>()
                .await?;

            Ok(resp)
        }
    }

    impl PricingApi for ErgoPricingApi {
        async fn fission_price(
            &self,
            network: Network,
            nano_ergs: Option<u64>,
        ) -> Result<PriceResponse, ApiError> {
            self.get(FISSION_PRICE, network, nano_ergs.map(|n| n.to_string()))
                .await
        }

        async fn mint_gold_rate(
            &self,
            network: Network,
            nano_ergs: u64,
        ) -> Result<PriceResponse, ApiError> {
            self.get(MINT_GOLD_RATE, network, Some(nano_ergs.to_string()))
                .await
        }

        async fn mint_rsv_rate(
            &self,
            network: Network,
            nano_ergs: u64,
        ) -> Result<PriceResponse, ApiError> {
            self.get(MINT_RSV_RATE, network, Some(nano_ergs.to_string()))
                .await
        }

        async fn transmute_gold_to_rsv_rate(
            &self,
            network: Network,
            amount: f64,
        ) -> Result<PriceResponse, ApiError> {
            self.get(TRANSMUTE_GOLD_TO_RSV_RATE, network, Some(amount.to_string()))
                .await
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn endpoint_joins_without_double_slash() {
            let config = PricingApiConfig::new("https://prices.example.org/api/v1/");
            let api = ErgoPricingApi::new(&config);
            assert_eq!(
                api.endpoint(MINT_GOLD_RATE),
                "https://prices.example.org/api/v1/mint/gold/rate"
            );
        }

        #[test]
        fn input_is_optional() {
            assert_eq!(
                ErgoPricingApi::query_params(Network::Testnet, None),
                vec![("isMainnet", "false".to_string())]
            );
            assert_eq!(
                ErgoPricingApi::query_params(Network::Mainnet, Some("2000000000".into())),
                vec![
                    ("isMainnet", "true".to_string()),
                    ("input", "2000000000".to_string())
                ]
            );
        }
    }
}
