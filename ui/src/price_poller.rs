//! Periodic polling of a pricing function and the asset list it feeds.

use std::time::Duration;

use api::asset::seed_assets;
use api::asset::Asset;
use api::network::Network;
use api::price_providers::PricingApi;
use api::price_query::PriceQuery;
use api::ApiError;
use dioxus_logger::tracing;

use crate::compat::interval::Interval;

/// How often prices are refreshed while a form is shown.
pub const POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Identifies the polling task a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollTicket(u64);

/// What happened to a polling result handed to [`AssetBoard::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIs)]
pub enum ApplyOutcome {
    /// The asset list was replaced.
    Replaced,
    /// The fetch failed; the previous list was kept.
    Failed,
    /// A newer polling task exists; the result was dropped.
    Stale,
}

/// The assets a conversion box displays.
///
/// Every polling task takes a ticket; only results carrying the most recently
/// issued ticket may replace the list.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetBoard {
    assets: Vec<Asset>,
    latest_ticket: u64,
}

impl Default for AssetBoard {
    fn default() -> Self {
        Self::seeded()
    }
}

impl AssetBoard {
    /// A board showing the zero-priced seed catalog.
    pub fn seeded() -> Self {
        Self {
            assets: seed_assets(),
            latest_ticket: 0,
        }
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Issues the ticket for a new polling task, superseding all earlier ones.
    pub fn next_ticket(&mut self) -> PollTicket {
        self.latest_ticket += 1;
        PollTicket(self.latest_ticket)
    }

    pub fn apply(
        &mut self,
        ticket: PollTicket,
        outcome: Result<Vec<Asset>, ApiError>,
    ) -> ApplyOutcome {
        if ticket.0 != self.latest_ticket {
            tracing::debug!(
                "discarding prices for superseded poll {} (latest {})",
                ticket.0,
                self.latest_ticket
            );
            return ApplyOutcome::Stale;
        }

        match outcome {
            Ok(assets) => {
                self.assets = assets;
                ApplyOutcome::Replaced
            }
            Err(e) => {
                tracing::error!("Error fetching data: {e:#}");
                ApplyOutcome::Failed
            }
        }
    }
}

/// Calls `query` on `api` immediately and then once per `period`, handing
/// every outcome to `on_outcome`.
///
/// Never returns. The timer is owned by the returned future, so dropping the
/// future stops polling.
pub async fn poll_prices<A, F>(
    api: &A,
    network: Network,
    query: PriceQuery,
    period: Duration,
    mut on_outcome: F,
) where
    A: PricingApi,
    F: FnMut(Result<Vec<Asset>, ApiError>),
{
    tracing::debug!(
        "polling {} on {network} every {period:?}",
        query.function_name()
    );

    let mut interval = Interval::new(period);
    loop {
        let outcome = query.fetch(api, network).await.map(|resp| resp.data);
        on_outcome(outcome);
        interval.tick().await;
    }
}
