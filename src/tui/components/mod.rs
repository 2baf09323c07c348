//! # TUI Components
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `NavBar`: persistent top line with the Home link and current path
//!
//! ### Stateful Components (Persistent State + Transient Wrapper)
//!
//! - `CountryList` / `CountryListState`: the `/` view, selection by key
//! - `CountryDetail` / `CountryDetailState`: the `/country/{code}` view, scroll
//!
//! The state half lives in `TuiState` across frames; the wrapper is built
//! each frame with borrowed state and the current `FetchState` as props.
//! Each file co-locates state, events, rendering and tests.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub mod country_detail;
pub mod country_list;
pub mod nav_bar;

pub use country_detail::{CountryDetail, CountryDetailState, DetailEvent};
pub use country_list::{CountryList, CountryListState, ListEvent, list_entries};
pub use nav_bar::NavBar;

/// Truncate a string to fit within `max_width` display columns, adding "..." if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}

/// Flattens a test buffer into text, one line per row.
#[cfg(test)]
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
