use api::asset::Asset;
use api::network::Network;
use api::price_query::PageContext;
use dioxus::prelude::*;

use crate::price_poller::poll_prices;
use crate::price_poller::AssetBoard;
use crate::price_poller::POLL_INTERVAL;
use crate::server_pricing::ServerPricingApi;

/// Keeps a list of priced assets fresh for the given purchase inputs.
///
/// Polling restarts whenever any input changes: the runtime drops the running
/// task, and with it the task's timer and any in-flight request, before the
/// new one starts. Results from a superseded task are discarded by the board.
pub fn use_conversion_rates(
    input_value: ReadSignal<f64>,
    network: ReadSignal<Network>,
    base_currency: ReadSignal<String>,
    current_page: ReadSignal<PageContext>,
) -> Memo<Vec<Asset>> {
    let mut board = use_signal(AssetBoard::seeded);

    // never resolves; it lives until unmount or the next restart.
    let _poller = use_resource(move || async move {
        let query = current_page().price_query(input_value());
        let network = network();
        // the currency label is not sent anywhere but still restarts polling.
        let _ = base_currency.read();

        let ticket = board.write().next_ticket();
        poll_prices(&ServerPricingApi, network, query, POLL_INTERVAL, |outcome| {
            board.write().apply(ticket, outcome);
        })
        .await
    });

    use_memo(move || board.read().assets().to_vec())
}
