//! App-wide yewdux store and the typed settings update action.
//!
//! # Design
//! - One store slice per feature keeps reducers predictable.
//! - Partial updates merge shallowly; absent fields never overwrite.

use crate::features::settings::state::{DohProvider, SettingsState};
use std::rc::Rc;
use yewdux::prelude::Reducer;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Runtime settings consumed by the lookup pipeline.
    pub settings: SettingsState,
}

/// Partial settings update applied through the store dispatcher.
///
/// `Some` fields overwrite the current value and `None` fields are left
/// alone, mirroring a shallow merge of a partial payload. Each user
/// interaction applies at most one update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    /// Next provider selection, already in canonical order.
    pub doh_providers: Option<Vec<DohProvider>>,
    /// Upper bound for in-flight RDAP lookups.
    pub rdap_concurrency: Option<u32>,
    /// Upper bound for in-flight DNS lookups.
    pub dns_concurrency: Option<u32>,
}

impl Reducer<AppStore> for SettingsUpdate {
    fn apply(self, mut store: Rc<AppStore>) -> Rc<AppStore> {
        let state = Rc::make_mut(&mut store);
        if let Some(providers) = self.doh_providers {
            state.settings.doh_providers = providers;
        }
        if let Some(value) = self.rdap_concurrency {
            state.settings.rdap_concurrency = value;
        }
        if let Some(value) = self.dns_concurrency {
            state.settings.dns_concurrency = value;
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update_is_a_no_op() {
        let before = Rc::new(AppStore::default());
        let after = SettingsUpdate::default().apply(Rc::clone(&before));
        assert_eq!(after, before);
    }

    #[test]
    fn single_field_update_leaves_other_fields_untouched() {
        let before = Rc::new(AppStore::default());
        let after = SettingsUpdate {
            rdap_concurrency: Some(7),
            ..SettingsUpdate::default()
        }
        .apply(Rc::clone(&before));

        assert_eq!(after.settings.rdap_concurrency, 7);
        assert_eq!(after.settings.doh_providers, before.settings.doh_providers);
        assert_eq!(after.settings.dns_concurrency, before.settings.dns_concurrency);
    }

    #[test]
    fn provider_update_replaces_the_sequence() {
        let store = Rc::new(AppStore::default());
        let after = SettingsUpdate {
            doh_providers: Some(vec![DohProvider::Cloudflare]),
            ..SettingsUpdate::default()
        }
        .apply(store);

        assert_eq!(after.settings.doh_providers, vec![DohProvider::Cloudflare]);
    }

    #[test]
    fn full_update_replaces_every_field() {
        let after = SettingsUpdate {
            doh_providers: Some(vec![DohProvider::Google]),
            rdap_concurrency: Some(12),
            dns_concurrency: Some(3000),
        }
        .apply(Rc::new(AppStore::default()));

        assert_eq!(after.settings.doh_providers, vec![DohProvider::Google]);
        assert_eq!(after.settings.rdap_concurrency, 12);
        assert_eq!(after.settings.dns_concurrency, 3000);
    }
}
