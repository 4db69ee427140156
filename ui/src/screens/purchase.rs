//=============================================================================
// File: src/screens/purchase.rs
//=============================================================================
use api::price_query::PageContext;
use dioxus::prelude::*;

use crate::components::pico::Card;
use crate::components::token_purchase_form::TokenPurchaseForm;
use crate::AppState;

#[component]
pub fn PurchaseScreen(page: PageContext) -> Element {
    let app_state = use_context::<AppState>();
    let prefs = &app_state.purchase_prefs;
    let mut last_request = use_signal::<Option<String>>(|| None);

    let network = prefs.network;
    let currency = prefs.base_currency.clone();

    rsx! {
        Card {
            h3 { "{page.title()}" }
            TokenPurchaseForm {
                on_purchase: move |amount: f64| {
                    // Transaction building happens in the wallet; this screen only records the request.
                    dioxus_logger::tracing::info!(
                        "purchase requested: {amount} {currency} on {} ({network})",
                        page.tag()
                    );
                    last_request.set(Some(format!("Requested purchase of {amount} {currency}.")));
                },
                base_currency: prefs.base_currency.clone(),
                max_amount: prefs.wallet_balance,
                network,
                current_page: page,
            }
            if let Some(message) = last_request() {
                small { "{message}" }
            }
        }
    }
}
