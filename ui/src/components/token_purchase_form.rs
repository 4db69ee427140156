//! The purchase form shared by the fission, mint and transmute pages.

use api::network::Network;
use api::prefs::purchase_prefs::DEFAULT_BASE_CURRENCY;
use api::price_query::PageContext;
use dioxus::prelude::*;

use crate::components::conversion_box::ConversionBox;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::purchase_form::PurchaseForm;

#[component]
pub fn TokenPurchaseForm(
    on_purchase: EventHandler<f64>,
    #[props(optional)] base_currency: Option<String>,
    #[props(default)] max_amount: f64,
    #[props(default)] network: Network,
    #[props(default)] current_page: PageContext,
) -> Element {
    let mut form = use_signal(|| PurchaseForm::new(max_amount));

    // Follow balance updates from the parent.
    use_effect(use_reactive!(|(max_amount,)| {
        form.write().set_max_amount(max_amount);
    }));

    let currency_shown = base_currency.unwrap_or_else(|| DEFAULT_BASE_CURRENCY.to_string());

    let (amount, text, is_error, error_message) = {
        let form = form.read();
        (
            form.amount(),
            form.text().to_string(),
            form.is_error(),
            form.error().map(|e| e.to_string()),
        )
    };

    rsx! {
        form {
            class: "token-purchase-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                let submission = form.read().submission();
                if let Some(amount) = submission {
                    on_purchase.call(amount);
                }
            },
            fieldset {
                role: "group",
                class: "input-group",
                label {
                    r#for: "payment-amount",
                    "Payment In"
                }
                select {
                    id: "payment-amount",
                    option { value: "Ergo", "{currency_shown}" }
                }
                input {
                    r#type: "number",
                    inputmode: "decimal",
                    value: "{text}",
                    placeholder: "Enter amount",
                    oninput: move |evt| form.write().set_amount_text(&evt.value()),
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| form.write().fill_max(),
                    "MAX"
                }
            }
            if let Some(message) = error_message {
                p { style: "color: red;", "{message}" }
            }
            div {
                class: "conversion-info",
                p { "Wallet Balance: {max_amount} {currency_shown}" }
                div {
                    "Expected receive: "
                    ConversionBox {
                        input_value: amount,
                        network,
                        base_currency: currency_shown.clone(),
                        current_page,
                    }
                }
            }
            Button {
                submit: true,
                disabled: is_error,
                "Buy Now"
            }
        }
    }
}
