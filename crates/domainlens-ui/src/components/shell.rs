//! Application shell: sidebar navigation, theme and locale controls.
//!
//! # Design
//! - Keep navigation and chrome here; pages fill the main slot.
//! - Pages may contribute an extra sidebar panel; `None` renders nav only.

use crate::app::Route;
use crate::core::theme::ThemeMode;
use crate::i18n::LocaleCode;
use yew::prelude::*;
use yew_router::prelude::Link;

/// Localized labels for the sidebar navigation.
#[derive(Clone, PartialEq)]
pub(crate) struct NavLabels {
    pub lookup: String,
    pub settings: String,
}

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub active: Route,
    pub nav: NavLabels,
    pub tagline: String,
    /// Page-provided sidebar panel; `None` keeps the sidebar to navigation.
    #[prop_or_default]
    pub context_panel: Option<Html>,
    pub theme: ThemeMode,
    pub on_toggle_theme: Callback<()>,
    pub locale: LocaleCode,
    pub on_locale_change: Callback<LocaleCode>,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let theme_label = match props.theme {
        ThemeMode::Light => "Light",
        ThemeMode::Dark => "Dark",
    };
    let on_locale_change = {
        let on_locale_change = props.on_locale_change.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                if let Some(next) = LocaleCode::from_lang_tag(&select.value()) {
                    on_locale_change.emit(next);
                }
            }
        })
    };

    html! {
        <div class={classes!("app-shell", format!("theme-{}", props.theme.as_str()))}>
            <aside class="sidebar">
                <div class="brand">
                    <strong>{"Domainlens"}</strong>
                    <span class="muted">{props.tagline.clone()}</span>
                </div>
                <nav>
                    {nav_item(Route::Lookup, &props.nav.lookup, &props.active)}
                    {nav_item(Route::Settings, &props.nav.settings, &props.active)}
                </nav>
                { props.context_panel.clone().map_or_else(
                    || html! {},
                    |panel| html! { <div class="context-panel">{panel}</div> },
                ) }
                <div class="sidebar-footer">
                    <button class="ghost" onclick={props.on_toggle_theme.clone().reform(|_| ())}>
                        {theme_label}
                    </button>
                    <select value={props.locale.code()} onchange={on_locale_change}>
                        { for LocaleCode::all().iter().map(|lc| html! {
                            <option value={lc.code()} selected={*lc == props.locale}>{lc.label()}</option>
                        }) }
                    </select>
                </div>
            </aside>
            <main>
                { for props.children.iter() }
            </main>
        </div>
    }
}

fn nav_item(route: Route, label: &str, active: &Route) -> Html {
    let classes = classes!(
        "nav-item",
        if *active == route { Some("active") } else { None }
    );
    html! {
        <Link<Route> to={route} classes={classes}>{label}</Link<Route>>
    }
}
