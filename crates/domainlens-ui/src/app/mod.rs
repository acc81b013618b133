//! App root: routing, store hydration, and preference persistence.
//!
//! # Design
//! - The store is hydrated from persisted settings once on mount; every
//!   later settings change is persisted back.
//! - The translation bundle is provided via context so pages never build
//!   their own.

use crate::components::shell::{AppShell, NavLabels};
use crate::core::store::AppStore;
use crate::core::theme::ThemeMode;
use crate::features::settings::view::SettingsPage;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use gloo::utils::window;
use preferences::{
    load_locale, load_settings, load_theme, persist_locale, persist_settings, persist_theme,
};
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

mod preferences;
mod routes;

#[function_component(DomainlensApp)]
pub(crate) fn domainlens_app() -> Html {
    let (store, dispatch) = use_store::<AppStore>();
    let theme = use_state(load_theme);
    let locale = use_state(load_locale);
    let bundle = use_memo(*locale, |locale| TranslationBundle::new(*locale));

    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            if let Some(persisted) = load_settings() {
                dispatch.reduce_mut(|store| store.settings = persisted);
            }
        });
    }
    use_effect_with(store.settings.clone(), persist_settings);
    use_effect_with(*theme, |theme| {
        apply_theme(*theme);
        persist_theme(*theme);
    });
    {
        let bundle = (*bundle).clone();
        use_effect_with(*locale, move |locale| {
            persist_locale(*locale);
            apply_direction(bundle.rtl());
        });
    }

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |()| theme.set((*theme).toggled()))
    };
    let set_locale = {
        let locale = locale.clone();
        Callback::from(move |next: LocaleCode| locale.set(next))
    };

    let nav = NavLabels {
        lookup: bundle.text("nav.lookup", "Lookup"),
        settings: bundle.text("nav.settings", "Settings"),
    };
    let tagline = bundle.text("shell.tagline", "Batch domain lookup");
    let page_bundle = (*bundle).clone();
    let theme_value = *theme;
    let locale_value = *locale;

    html! {
        <BrowserRouter>
            <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                <Switch<Route> render={move |route: Route| {
                    let context_panel = match route {
                        Route::Lookup => Some(html! { <RunSummary /> }),
                        Route::Settings | Route::NotFound => None,
                    };
                    html! {
                        <AppShell
                            active={route.clone()}
                            nav={nav.clone()}
                            tagline={tagline.clone()}
                            context_panel={context_panel}
                            theme={theme_value}
                            on_toggle_theme={toggle_theme.clone()}
                            locale={locale_value}
                            on_locale_change={set_locale.clone()}
                        >
                            { page(&route, &page_bundle) }
                        </AppShell>
                    }
                }} />
            </ContextProvider<TranslationBundle>>
        </BrowserRouter>
    }
}

fn page(route: &Route, bundle: &TranslationBundle) -> Html {
    match route {
        Route::Lookup => html! {
            <Placeholder
                title={bundle.text("lookup.title", "Lookup")}
                body={bundle.text(
                    "lookup.body",
                    "Paste candidate names to check availability over DoH and RDAP.",
                )}
            />
        },
        Route::Settings => html! { <SettingsPage /> },
        Route::NotFound => html! {
            <Placeholder
                title={bundle.text("not_found.title", "Not found")}
                body={bundle.text("not_found.body", "Use the navigation to return to a supported view.")}
            />
        },
    }
}

/// Sidebar panel summarizing the run parameters the lookup page will use.
#[function_component(RunSummary)]
fn run_summary() -> Html {
    let (store, _) = use_store::<AppStore>();
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let providers = store
        .settings
        .doh_providers
        .iter()
        .map(|provider| provider.code())
        .collect::<Vec<_>>()
        .join(", ");

    html! {
        <dl class="run-summary">
            <dt>{bundle.text("lookup.sidebar_title", "Run parameters")}</dt>
            <dd>{format!(
                "{}: {providers}",
                bundle.text("lookup.sidebar_providers", "Resolvers"),
            )}</dd>
            <dd>{format!(
                "{}: {}",
                bundle.text("lookup.sidebar_rdap", "RDAP concurrency"),
                store.settings.rdap_concurrency,
            )}</dd>
            <dd>{format!(
                "{}: {}",
                bundle.text("lookup.sidebar_dns", "DNS concurrency"),
                store.settings.dns_concurrency,
            )}</dd>
        </dl>
    }
}

#[derive(Properties, PartialEq)]
struct PlaceholderProps {
    pub title: String,
    pub body: String,
}

#[function_component(Placeholder)]
fn placeholder(props: &PlaceholderProps) -> Html {
    html! {
        <div class="placeholder card">
            <h2>{&props.title}</h2>
            <p class="muted">{&props.body}</p>
        </div>
    }
}

fn apply_theme(theme: ThemeMode) {
    if let Some(body) = window().document().and_then(|document| document.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

fn apply_direction(is_rtl: bool) {
    if let Some(body) = window().document().and_then(|document| document.body()) {
        let _ = body.set_attribute("dir", if is_rtl { "rtl" } else { "ltr" });
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    yew::Renderer::<DomainlensApp>::new().render();
}
