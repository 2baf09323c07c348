//! # Application State
//!
//! Core business state. This module contains domain logic only, no
//! TUI-specific types. Presentation state (selection, scroll) lives in the
//! `tui` module.
//!
//! ```text
//! App
//! ├── route: Route                        // active view
//! ├── base_url: String                    // upstream API root
//! ├── locale: NumberLocale                // population grouping
//! ├── countries: Fetcher<Vec<Country>>    // list view's resource
//! └── country: Fetcher<Vec<Country>>      // detail view's resource
//! ```
//!
//! Each view owns its own fetcher; nothing is shared between them.
//! State changes only happen through `update(state, action)` in action.rs.

use crate::api::Country;
use crate::core::config::ResolvedConfig;
use crate::core::fetch::Fetcher;
use crate::core::format::NumberLocale;
use crate::core::route::Route;

pub struct App {
    pub route: Route,
    pub base_url: String,
    pub locale: NumberLocale,
    pub countries: Fetcher<Vec<Country>>,
    /// The detail endpoint also answers with an array; empty means not found.
    pub country: Fetcher<Vec<Country>>,
}

impl App {
    pub fn new(base_url: String, locale: NumberLocale) -> Self {
        Self {
            route: Route::List,
            base_url,
            locale,
            countries: Fetcher::new(),
            country: Fetcher::new(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.base_url.clone(), config.locale)
    }
}
