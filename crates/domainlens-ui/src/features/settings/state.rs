//! Settings data model and the provider-selection rules.
//!
//! # Design
//! - Provider sequences are always stored in canonical order so equal
//!   selections serialize identically.
//! - The sliders are widget-clamped; no numeric validation happens here.

use serde::{Deserialize, Serialize};

/// Lower bound for simultaneous RDAP lookups.
pub const RDAP_CONCURRENCY_MIN: u32 = 1;
/// Upper bound for simultaneous RDAP lookups.
pub const RDAP_CONCURRENCY_MAX: u32 = 12;
/// Step granularity of the RDAP slider.
pub const RDAP_CONCURRENCY_STEP: u32 = 1;
/// Lower bound for simultaneous DNS lookups.
pub const DNS_CONCURRENCY_MIN: u32 = 200;
/// Upper bound for simultaneous DNS lookups.
pub const DNS_CONCURRENCY_MAX: u32 = 5000;
/// Step granularity of the DNS slider.
pub const DNS_CONCURRENCY_STEP: u32 = 100;
/// Tick marks rendered under the DNS slider.
pub const DNS_CONCURRENCY_MARKS: [u32; 3] = [200, 1000, 5000];

const DEFAULT_RDAP_CONCURRENCY: u32 = 4;
const DEFAULT_DNS_CONCURRENCY: u32 = 1000;

/// DNS-over-HTTPS resolver services the lookup pipeline can query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DohProvider {
    /// Google Public DNS.
    Google,
    /// Cloudflare 1.1.1.1.
    Cloudflare,
}

impl DohProvider {
    /// All providers in canonical display and storage order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Google, Self::Cloudflare]
    }

    /// Stable identifier, also the serde wire form and the i18n key suffix.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Cloudflare => "cloudflare",
        }
    }

    /// JSON DoH endpoint queried by the lookup pipeline.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Google => "https://dns.google/resolve",
            Self::Cloudflare => "https://cloudflare-dns.com/dns-query",
        }
    }
}

/// Runtime settings shared through the app store and persisted between
/// sessions. The wire form matches the exported run-parameter shape
/// (`dohProviders`, `rdapConcurrency`, `dnsConcurrency`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsState {
    /// Selected resolvers, never empty, always in canonical order.
    pub doh_providers: Vec<DohProvider>,
    /// Upper bound for in-flight RDAP lookups, within `[1, 12]`.
    pub rdap_concurrency: u32,
    /// Upper bound for in-flight DNS lookups, within `[200, 5000]` step 100.
    pub dns_concurrency: u32,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            doh_providers: DohProvider::all().to_vec(),
            rdap_concurrency: DEFAULT_RDAP_CONCURRENCY,
            dns_concurrency: DEFAULT_DNS_CONCURRENCY,
        }
    }
}

/// Why a provider toggle was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderRejection {
    /// The sole remaining provider cannot be unchecked.
    LastProvider,
}

/// Re-sort a provider selection into canonical order.
///
/// The result depends only on the member set; duplicates collapse.
#[must_use]
pub fn sort_providers(selected: &[DohProvider]) -> Vec<DohProvider> {
    DohProvider::all()
        .into_iter()
        .filter(|provider| selected.contains(provider))
        .collect()
}

/// Compute the next provider selection for a checkbox toggle.
///
/// Every accepted toggle yields a canonical-ordered sequence.
///
/// # Errors
///
/// Returns [`ProviderRejection::LastProvider`] when the toggle would
/// uncheck the sole remaining provider.
pub fn toggle_provider(
    current: &[DohProvider],
    provider: DohProvider,
    checked: bool,
) -> Result<Vec<DohProvider>, ProviderRejection> {
    if !checked && current.len() == 1 && current[0] == provider {
        return Err(ProviderRejection::LastProvider);
    }
    let next = DohProvider::all()
        .into_iter()
        .filter(|candidate| {
            if *candidate == provider {
                checked
            } else {
                current.contains(candidate)
            }
        })
        .collect();
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use DohProvider::{Cloudflare, Google};

    #[test]
    fn default_satisfies_invariants() {
        let settings = SettingsState::default();
        assert_eq!(settings.doh_providers, vec![Google, Cloudflare]);
        assert!(settings.rdap_concurrency >= RDAP_CONCURRENCY_MIN);
        assert!(settings.rdap_concurrency <= RDAP_CONCURRENCY_MAX);
        assert!(settings.dns_concurrency >= DNS_CONCURRENCY_MIN);
        assert!(settings.dns_concurrency <= DNS_CONCURRENCY_MAX);
        assert_eq!(settings.dns_concurrency % DNS_CONCURRENCY_STEP, 0);
    }

    #[test]
    fn sort_is_canonical_regardless_of_selection_order() {
        assert_eq!(sort_providers(&[Cloudflare, Google]), vec![Google, Cloudflare]);
        assert_eq!(sort_providers(&[Google, Cloudflare]), vec![Google, Cloudflare]);
        assert_eq!(sort_providers(&[Cloudflare]), vec![Cloudflare]);
        assert_eq!(sort_providers(&[]), Vec::<DohProvider>::new());
    }

    #[test]
    fn sort_collapses_duplicates() {
        assert_eq!(
            sort_providers(&[Cloudflare, Google, Cloudflare]),
            vec![Google, Cloudflare]
        );
    }

    #[test]
    fn unchecking_the_sole_provider_is_refused() {
        assert_eq!(
            toggle_provider(&[Google], Google, false),
            Err(ProviderRejection::LastProvider)
        );
        assert_eq!(
            toggle_provider(&[Cloudflare], Cloudflare, false),
            Err(ProviderRejection::LastProvider)
        );
    }

    #[test]
    fn unchecking_one_of_two_keeps_the_other() {
        assert_eq!(
            toggle_provider(&[Google, Cloudflare], Google, false),
            Ok(vec![Cloudflare])
        );
        assert_eq!(
            toggle_provider(&[Google, Cloudflare], Cloudflare, false),
            Ok(vec![Google])
        );
    }

    #[test]
    fn checking_a_second_provider_yields_canonical_order() {
        // Cloudflare was selected first; Google still lands in front.
        assert_eq!(
            toggle_provider(&[Cloudflare], Google, true),
            Ok(vec![Google, Cloudflare])
        );
    }

    #[test]
    fn toggle_on_then_off_returns_to_the_original_selection() {
        let original = vec![Google, Cloudflare];
        let removed = toggle_provider(&original, Cloudflare, false).unwrap();
        let restored = toggle_provider(&removed, Cloudflare, true).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn rechecking_a_selected_provider_is_a_no_op() {
        assert_eq!(
            toggle_provider(&[Google, Cloudflare], Google, true),
            Ok(vec![Google, Cloudflare])
        );
    }

    #[test]
    fn wire_form_uses_lowercase_codes_and_camel_case_keys() {
        let settings = SettingsState::default();
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"dohProviders\":[\"google\",\"cloudflare\"]"));
        assert!(json.contains("\"rdapConcurrency\""));
        assert!(json.contains("\"dnsConcurrency\""));
        let back: SettingsState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
