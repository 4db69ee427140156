use api::prefs::purchase_prefs::PurchasePrefs;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub purchase_prefs: PurchasePrefs,
}

/// Stable, non-reactive state shared with every screen.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(purchase_prefs: PurchasePrefs) -> Self {
        Self(Arc::new(AppStateData { purchase_prefs }))
    }
}
