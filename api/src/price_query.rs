//! Maps the page a purchase form lives on to the pricing call it needs.

use serde::Deserialize;
use serde::Serialize;

use crate::asset::PriceResponse;
use crate::erg_units::ergs_to_nano_ergs;
use crate::network::Network;
use crate::price_providers::PricingApi;
use crate::ApiError;

/// The page context a purchase form is rendered on.
///
/// Parsed from the page tags used by the front-end routes, e.g. `"MintGold"`.
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
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
pub enum PageContext {
    /// Unrecognized tags resolve here: fission price with no input amount.
    #[default]
    TransmuteRsvToGold,
    #[strum(serialize = "TransmuteGLDToRSV")]
    TransmuteGldToRsv,
    Fission,
    MintGold,
    MintRsv,
}

impl PageContext {
    /// Resolves a page tag, falling back to the default context for
    /// missing or unknown tags.
    pub fn from_tag(tag: Option<&str>) -> Self {
        tag.and_then(|t| t.parse().ok()).unwrap_or_default()
    }

    /// The tag this context is known by.
    pub fn tag(&self) -> &'static str {
        self.into()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::TransmuteRsvToGold => "Transmute RSV to GLD",
            Self::TransmuteGldToRsv => "Transmute GLD to RSV",
            Self::Fission => "Fission",
            Self::MintGold => "Mint GLD",
            Self::MintRsv => "Mint RSV",
        }
    }

    /// Selects the pricing function for this page and transforms `amount`
    /// into the input it expects.
    pub fn price_query(&self, amount: f64) -> PriceQuery {
        match self {
            Self::TransmuteRsvToGold => PriceQuery::Fission { nano_ergs: None },
            Self::TransmuteGldToRsv => PriceQuery::TransmuteGoldToRsv { amount },
            Self::Fission => PriceQuery::Fission {
                nano_ergs: Some(ergs_to_nano_ergs(amount)),
            },
            Self::MintGold => PriceQuery::MintGold {
                nano_ergs: ergs_to_nano_ergs(amount),
            },
            Self::MintRsv => PriceQuery::MintRsv {
                nano_ergs: ergs_to_nano_ergs(amount),
            },
        }
    }
}

/// A pricing call together with its already-transformed input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceQuery {
    Fission { nano_ergs: Option<u64> },
    MintGold { nano_ergs: u64 },
    MintRsv { nano_ergs: u64 },
    TransmuteGoldToRsv { amount: f64 },
}

impl PriceQuery {
    /// Name of the pricing function, for logs.
    pub fn function_name(&self) -> &'static str {
        match self {
            Self::Fission { .. } => "fission_price",
            Self::MintGold { .. } => "mint_gold_rate",
            Self::MintRsv { .. } => "mint_rsv_rate",
            Self::TransmuteGoldToRsv { .. } => "transmute_gold_to_rsv_rate",
        }
    }

    /// Invokes the selected pricing function on `api`.
    pub async fn fetch<A: PricingApi>(
        &self,
        api: &A,
        network: Network,
    ) -> Result<PriceResponse, ApiError> {
        match *self {
            Self::Fission { nano_ergs } => api.fission_price(network, nano_ergs).await,
            Self::MintGold { nano_ergs } => api.mint_gold_rate(network, nano_ergs).await,
            Self::MintRsv { nano_ergs } => api.mint_rsv_rate(network, nano_ergs).await,
            Self::TransmuteGoldToRsv { amount } => {
                api.transmute_gold_to_rsv_rate(network, amount).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::Asset;
    use std::sync::Mutex;
    use strum::IntoEnumIterator;

    #[test]
    fn known_tags_round_trip() {
        for page in PageContext::iter() {
            assert_eq!(PageContext::from_tag(Some(page.tag())), page);
        }
        assert_eq!(PageContext::TransmuteGldToRsv.tag(), "TransmuteGLDToRSV");
    }

    #[test]
    fn unknown_tags_use_fission_without_input() {
        for tag in [None, Some(""), Some("Swap"), Some("mintgold")] {
            let page = PageContext::from_tag(tag);
            assert_eq!(page, PageContext::TransmuteRsvToGold);
            assert_eq!(page.price_query(5.0), PriceQuery::Fission { nano_ergs: None });
        }
    }

    #[test]
    fn routes_pick_function_and_input() {
        assert_eq!(
            PageContext::TransmuteGldToRsv.price_query(2.5),
            PriceQuery::TransmuteGoldToRsv { amount: 2.5 }
        );
        assert_eq!(
            PageContext::Fission.price_query(2.0),
            PriceQuery::Fission {
                nano_ergs: Some(2_000_000_000)
            }
        );
        assert_eq!(
            PageContext::MintGold.price_query(2.0),
            PriceQuery::MintGold {
                nano_ergs: 2_000_000_000
            }
        );
        assert_eq!(
            PageContext::MintRsv.price_query(0.5),
            PriceQuery::MintRsv {
                nano_ergs: 500_000_000
            }
        );
    }

    #[derive(Default)]
    struct RecordingApi {
        calls: Mutex<Vec<String>>,
    }

    impl RecordingApi {
        fn record(&self, call: String) -> Result<PriceResponse, ApiError> {
            self.calls.lock().unwrap().push(call);
            Ok(PriceResponse {
                data: vec![Asset::default()],
            })
        }
    }

    impl PricingApi for RecordingApi {
        async fn fission_price(
            &self,
            network: Network,
            nano_ergs: Option<u64>,
        ) -> Result<PriceResponse, ApiError> {
            self.record(format!("fission {network} {nano_ergs:?}"))
        }

        async fn mint_gold_rate(
            &self,
            network: Network,
            nano_ergs: u64,
        ) -> Result<PriceResponse, ApiError> {
            self.record(format!("mint_gold {network} {nano_ergs}"))
        }

        async fn mint_rsv_rate(
            &self,
            network: Network,
            nano_ergs: u64,
        ) -> Result<PriceResponse, ApiError> {
            self.record(format!("mint_rsv {network} {nano_ergs}"))
        }

        async fn transmute_gold_to_rsv_rate(
            &self,
            network: Network,
            amount: f64,
        ) -> Result<PriceResponse, ApiError> {
            self.record(format!("transmute {network} {amount}"))
        }
    }

    #[tokio::test]
    async fn fetch_dispatches_to_selected_function() {
        let api = RecordingApi::default();

        for (page, amount) in [
            (PageContext::MintGold, 2.0),
            (PageContext::MintRsv, 1.0),
            (PageContext::TransmuteGldToRsv, 3.5),
            (PageContext::Fission, 0.25),
            (PageContext::TransmuteRsvToGold, 9.0),
        ] {
            let resp = page
                .price_query(amount)
                .fetch(&api, Network::Mainnet)
                .await
                .unwrap();
            assert_eq!(resp.data.len(), 1);
        }

        assert_eq!(
            *api.calls.lock().unwrap(),
            vec![
                "mint_gold mainnet 2000000000",
                "mint_rsv mainnet 1000000000",
                "transmute mainnet 3.5",
                "fission mainnet Some(250000000)",
                "fission mainnet None",
            ]
        );
    }
}
