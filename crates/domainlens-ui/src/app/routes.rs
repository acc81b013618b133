//! Routing definitions for the Domainlens UI.
use yew_router::prelude::*;

/// Top-level routes for the single-page app.
#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Lookup,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}
