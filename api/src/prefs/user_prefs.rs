use super::purchase_prefs::PurchasePrefs;
use serde::Serialize;
use serde::Deserialize;

/// Represents all user prefs. Intended for saving to a file. editing in settings dialog, etc.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub struct UserPrefs {
    purchase_prefs: PurchasePrefs,
}

impl UserPrefs {
    pub fn purchase_prefs(&self) -> &PurchasePrefs {
        &self.purchase_prefs
    }
}
