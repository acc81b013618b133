//! Settings page view.
//!
//! # Design
//! - Keep the view a thin binding: the provider rules live in `state`, and
//!   every accepted interaction applies exactly one `SettingsUpdate`.
//! - The provider error flag is the only local state; it clears on the next
//!   accepted toggle and never reaches the store.

use super::state::{
    DNS_CONCURRENCY_MARKS, DNS_CONCURRENCY_MAX, DNS_CONCURRENCY_MIN, DNS_CONCURRENCY_STEP,
    DohProvider, ProviderRejection, RDAP_CONCURRENCY_MAX, RDAP_CONCURRENCY_MIN,
    RDAP_CONCURRENCY_STEP, toggle_provider,
};
use crate::components::controls::{Checkbox, Slider};
use crate::core::store::{AppStore, SettingsUpdate};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;
use yewdux::prelude::use_store;

#[function_component(SettingsPage)]
pub(crate) fn settings_page() -> Html {
    let (store, dispatch) = use_store::<AppStore>();
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let provider_error = use_state(|| false);

    let t = {
        let bundle = bundle.clone();
        move |key: &str, fallback: &str| bundle.text(key, fallback)
    };

    let on_toggle = {
        let providers = store.settings.doh_providers.clone();
        let provider_error = provider_error.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |(provider, checked): (DohProvider, bool)| {
            match toggle_provider(&providers, provider, checked) {
                Ok(next) => {
                    provider_error.set(false);
                    dispatch.apply(SettingsUpdate {
                        doh_providers: Some(next),
                        ..SettingsUpdate::default()
                    });
                }
                Err(ProviderRejection::LastProvider) => provider_error.set(true),
            }
        })
    };
    let on_rdap_change = {
        let dispatch = dispatch.clone();
        Callback::from(move |value: u32| {
            dispatch.apply(SettingsUpdate {
                rdap_concurrency: Some(value),
                ..SettingsUpdate::default()
            });
        })
    };
    let on_dns_change = {
        let dispatch = dispatch.clone();
        Callback::from(move |value: u32| {
            dispatch.apply(SettingsUpdate {
                dns_concurrency: Some(value),
                ..SettingsUpdate::default()
            });
        })
    };

    let rdap_helper = bundle.text_with(
        "settings.rdap_helper",
        "Up to {value} RDAP lookups in flight",
        &[("value", &store.settings.rdap_concurrency.to_string())],
    );
    let dns_helper = bundle.text_with(
        "settings.dns_helper",
        "Up to {value} DNS lookups in flight",
        &[("value", &store.settings.dns_concurrency.to_string())],
    );

    let provider_boxes = DohProvider::all().into_iter().map(|provider| {
        let checked = store.settings.doh_providers.contains(&provider);
        let label = t(
            &format!("settings.provider.{}", provider.code()),
            provider.code(),
        );
        let on_toggle = on_toggle.clone();
        html! {
            <Checkbox
                label={AttrValue::from(label)}
                checked={checked}
                onchange={Callback::from(move |checked: bool| on_toggle.emit((provider, checked)))}
            />
        }
    });

    html! {
        <section class="page settings-page">
            <header class="card page-header">
                <h2>{t("settings.title", "Settings")}</h2>
                <p class="muted">{t("settings.subtitle", "Runtime parameters for DNS and RDAP lookups.")}</p>
            </header>

            <div class="card">
                <h3>{t("settings.runtime_title", "Runtime")}</h3>

                <fieldset class="form-control">
                    <legend>{t("settings.doh_label", "DoH providers")}</legend>
                    <div class="provider-row">
                        { for provider_boxes }
                    </div>
                    if *provider_error {
                        <p class="helper error" role="alert">
                            {t("settings.provider_error", "Keep at least one provider selected.")}
                        </p>
                    } else {
                        <p class="helper">
                            {t("settings.doh_helper", "Resolvers queried during availability checks.")}
                        </p>
                    }
                </fieldset>

                <div class="form-control">
                    <div class="slider-head">
                        <label for="rdap-concurrency">
                            {t("settings.rdap_concurrency", "RDAP concurrency")}
                        </label>
                        <span class="helper">{rdap_helper}</span>
                    </div>
                    <Slider
                        id="rdap-concurrency"
                        value={store.settings.rdap_concurrency}
                        min={RDAP_CONCURRENCY_MIN}
                        max={RDAP_CONCURRENCY_MAX}
                        step={RDAP_CONCURRENCY_STEP}
                        marks={(RDAP_CONCURRENCY_MIN..=RDAP_CONCURRENCY_MAX).collect::<Vec<_>>()}
                        onchange={on_rdap_change}
                    />
                </div>

                <div class="form-control">
                    <div class="slider-head">
                        <label for="dns-concurrency">
                            {t("settings.dns_concurrency", "DNS concurrency")}
                        </label>
                        <span class="helper">{dns_helper}</span>
                    </div>
                    <Slider
                        id="dns-concurrency"
                        value={store.settings.dns_concurrency}
                        min={DNS_CONCURRENCY_MIN}
                        max={DNS_CONCURRENCY_MAX}
                        step={DNS_CONCURRENCY_STEP}
                        marks={DNS_CONCURRENCY_MARKS.to_vec()}
                        onchange={on_dns_change}
                    />
                </div>
            </div>
        </section>
    }
}
