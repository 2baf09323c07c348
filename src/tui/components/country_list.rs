//! # Country List Component
//!
//! Renders the list view's fetch state:
//!
//! - `Pending`  → loading message
//! - `Failure`  → error message with the failure text
//! - `Success`  → one entry per country, upstream order, flag + common name
//!
//! Every entry is a link to `/country/{cca3}` and is keyed by `cca3`.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CountryListState` lives in `TuiState`
//! - `CountryList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap};

use crate::api::Country;
use crate::core::fetch::FetchState;
use crate::core::route::Route;
use crate::tui::component::Component;
use crate::tui::components::truncate_str;
use crate::tui::event::TuiEvent;

pub const LOADING_MESSAGE: &str = "Loading countries...";
pub const ERROR_PREFIX: &str = "Error loading countries: ";

const PAGE_SIZE: usize = 10;

/// One rendered row of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub key: String,
    pub flag: String,
    pub label: String,
    pub link: Route,
}

/// Builds the list rows, one per country, in upstream order.
pub fn list_entries(countries: &[Country]) -> Vec<ListEntry> {
    countries
        .iter()
        .map(|country| ListEntry {
            key: country.cca3.clone(),
            flag: country.flag_label(),
            label: country.name.common.clone(),
            link: Route::Detail(country.cca3.clone()),
        })
        .collect()
}

/// Events emitted by the list view.
#[derive(Debug, PartialEq, Eq)]
pub enum ListEvent {
    Open(Route),
}

/// Persistent selection state for the list view.
///
/// The selection is remembered by key so it survives the list being
/// unmounted and fetched again.
#[derive(Default)]
pub struct CountryListState {
    pub selected_key: Option<String>,
    pub list_state: ListState,
}

impl CountryListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the selected entry, falling back to the first one.
    fn selected_index(&self, entries: &[ListEntry]) -> Option<usize> {
        if entries.is_empty() {
            return None;
        }
        let index = self
            .selected_key
            .as_deref()
            .and_then(|key| entries.iter().position(|e| e.key == key))
            .unwrap_or(0);
        Some(index)
    }

    fn select(&mut self, entries: &[ListEntry], index: usize) {
        if let Some(entry) = entries.get(index) {
            self.selected_key = Some(entry.key.clone());
            self.list_state.select(Some(index));
        }
    }

    /// Handle a key event against the currently loaded entries.
    pub fn handle_event(&mut self, event: &TuiEvent, entries: &[ListEntry]) -> Option<ListEvent> {
        let current = self.selected_index(entries)?;
        let last = entries.len() - 1;
        match event {
            TuiEvent::CursorUp => self.select(entries, current.saturating_sub(1)),
            TuiEvent::CursorDown => self.select(entries, (current + 1).min(last)),
            TuiEvent::PageUp => self.select(entries, current.saturating_sub(PAGE_SIZE)),
            TuiEvent::PageDown => self.select(entries, (current + PAGE_SIZE).min(last)),
            TuiEvent::Open => {
                self.select(entries, current);
                return Some(ListEvent::Open(entries[current].link.clone()));
            }
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the list view.
pub struct CountryList<'a> {
    state: &'a mut CountryListState,
    fetch: &'a FetchState<Vec<Country>>,
}

impl<'a> CountryList<'a> {
    pub fn new(state: &'a mut CountryListState, fetch: &'a FetchState<Vec<Country>>) -> Self {
        Self { state, fetch }
    }
}

impl Component for CountryList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let countries = match self.fetch {
            FetchState::Pending => {
                let loading = Paragraph::new(LOADING_MESSAGE)
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center);
                frame.render_widget(loading, area);
                return;
            }
            FetchState::Failure(message) => {
                let error = Paragraph::new(format!("{ERROR_PREFIX}{message}"))
                    .style(Style::default().fg(Color::Red))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true });
                frame.render_widget(error, area);
                return;
            }
            FetchState::Success(countries) => countries,
        };

        let entries = list_entries(countries);
        let selected = self.state.selected_index(&entries);
        self.state.list_state.select(selected);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" Countries ({}) ", entries.len()))
            .title_bottom(Line::from(" ↑↓ Move  Enter Open  q Quit ").centered())
            .padding(Padding::horizontal(1));

        let label_width = area.width.saturating_sub(10) as usize;
        let items: Vec<ListItem> = entries
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::raw(entry.flag.clone()),
                    Span::raw("  "),
                    Span::raw(truncate_str(&entry.label, label_width)),
                ]))
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
