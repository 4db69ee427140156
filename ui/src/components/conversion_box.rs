//! Shows what a pending purchase would receive, refreshed from the pricing API.

use api::network::Network;
use api::price_query::PageContext;
use dioxus::prelude::*;

use crate::hooks::use_conversion_rates::use_conversion_rates;

/// Lists each priced asset as "{price} {name}" in the order the API returned them.
#[component]
pub fn ConversionBox(
    input_value: ReadSignal<f64>,
    network: ReadSignal<Network>,
    base_currency: ReadSignal<String>,
    current_page: ReadSignal<PageContext>,
) -> Element {
    let assets = use_conversion_rates(input_value, network, base_currency, current_page);

    rsx! {
        div {
            class: "conversion-box",
            for (index, asset) in assets().into_iter().enumerate() {
                div {
                    key: "{index}",
                    p { "{asset.price} {asset.display_name()}" }
                }
            }
        }
    }
}
