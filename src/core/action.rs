//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User follows a link? That's `Action::Navigate(route)`.
//! A request finishes? That's `Action::Loaded { .. }`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` describing the I/O the runtime should perform. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use std::collections::HashSet;
use std::fmt;

use log::{debug, info, warn};
use serde_json::Value;

use crate::api::{Country, FetchError, endpoints};
use crate::core::fetch::{FetchState, FetchTicket};
use crate::core::route::Route;
use crate::core::state::App;

/// Which view's fetcher a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTarget {
    List,
    Detail,
}

pub enum Action {
    Navigate(Route),
    Loaded {
        target: FetchTarget,
        generation: u64,
        result: Result<Value, FetchError>,
    },
    Quit,
}

// Payloads can be hundreds of records; log their outcome, not their body.
impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Navigate(route) => write!(f, "Navigate({route})"),
            Action::Loaded {
                target,
                generation,
                result,
            } => {
                let outcome = match result {
                    Ok(_) => "ok".to_string(),
                    Err(e) => e.to_string(),
                };
                write!(f, "Loaded({target:?}, gen={generation}, {outcome})")
            }
            Action::Quit => write!(f, "Quit"),
        }
    }
}

/// A fetch the runtime must issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub target: FetchTarget,
    pub ticket: FetchTicket,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Fetch(FetchRequest),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Navigate(route) => navigate(app, route),
        Action::Loaded {
            target,
            generation,
            result,
        } => {
            let decoded = result.and_then(decode_countries);
            let fetcher = match target {
                FetchTarget::List => &mut app.countries,
                FetchTarget::Detail => &mut app.country,
            };
            if fetcher.resolve(generation, decoded) {
                debug!("Committed {:?} result (gen={})", target, generation);
                if let (FetchTarget::List, FetchState::Success(countries)) = (target, fetcher.state()) {
                    for code in duplicate_codes(countries) {
                        warn!("Duplicate country code in upstream list: {}", code);
                    }
                }
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Mounts the view for `route` and unmounts the other one.
fn navigate(app: &mut App, route: Route) -> Effect {
    if app.route != route {
        info!("Navigating {} → {}", app.route, route);
    }
    let request = match &route {
        Route::List => {
            app.country.unmount();
            app.countries
                .mount(endpoints::all_countries(&app.base_url))
                .map(|ticket| FetchRequest {
                    target: FetchTarget::List,
                    ticket,
                })
        }
        Route::Detail(code) => {
            app.countries.unmount();
            app.country
                .mount(endpoints::country_by_code(&app.base_url, code))
                .map(|ticket| FetchRequest {
                    target: FetchTarget::Detail,
                    ticket,
                })
        }
    };
    app.route = route;
    request.map_or(Effect::None, Effect::Fetch)
}

/// Codes that appear more than once, each reported once, in upstream order.
fn duplicate_codes(countries: &[Country]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    countries
        .iter()
        .map(|country| country.cca3.as_str())
        .filter(|code| !seen.insert(*code) && reported.insert(*code))
        .collect()
}

fn decode_countries(value: Value) -> Result<Vec<Country>, FetchError> {
    serde_json::from_value(value).map_err(|e| FetchError::Parse(e.to_string()))
}
