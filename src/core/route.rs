//! # Routes
//!
//! Two routes, derived from a path:
//!
//! ```text
//! /                 → Route::List
//! /country/{code}   → Route::Detail(code)
//! ```
//!
//! Anything else does not parse. There are no guards and no redirects.
//! Codes are ASCII letters and digits only, since they are spliced into
//! the upstream URL as a path segment.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Detail(String),
}

impl Route {
    /// Parses a path into a route. Returns `None` when no pattern matches.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.trim();
        if path.is_empty() || path == "/" {
            return Some(Route::List);
        }
        let rest = path.strip_prefix("/country/")?;
        let code = rest.strip_suffix('/').unwrap_or(rest);
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        Some(Route::Detail(code.to_string()))
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Detail(code) => format!("/country/{code}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// clap value parser for the positional start path.
pub fn parse_route_arg(path: &str) -> Result<Route, String> {
    Route::parse(path).ok_or_else(|| format!("no route matches '{path}' (expected / or /country/CODE)"))
}
