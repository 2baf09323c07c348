//! # Country Detail Component
//!
//! Renders the detail view's fetch state. The upstream answers a code
//! lookup with an array, so a successful but empty payload is its own
//! branch ("not found") rather than an error.
//!
//! ```text
//! ┌ 🇫🇷 Details of France ─────────────────┐
//! │ Official name: French Republic         │
//! │ Capital: Paris                         │
//! │ Region: Europe                         │
//! │ Subregion: Western Europe              │
//! │ Population: 67,391,582                 │
//! │ Flag: https://flagcdn.com/fr.svg       │
//! │ Currencies:                            │
//! │   • Euro (€)                           │
//! │                                        │
//! │ ← Back to country list                 │
//! └────────────────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::api::Country;
use crate::core::fetch::FetchState;
use crate::core::format::{NumberLocale, group_digits};
use crate::core::route::Route;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

pub const LOADING_MESSAGE: &str = "Loading country details...";
pub const ERROR_PREFIX: &str = "Error loading country details: ";
pub const NOT_FOUND_MESSAGE: &str = "Country not found.";
pub const CURRENCIES_HEADING: &str = "Currencies:";
pub const BACK_LINK: &str = "← Back to country list";

const PAGE_SIZE: u16 = 10;

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
        Span::raw(value),
    ])
}

/// Body lines for one country. The currency section only appears when the
/// record has a `currencies` field.
pub fn detail_lines(country: &Country, locale: NumberLocale) -> Vec<Line<'static>> {
    let mut lines = vec![
        field("Official name", country.name.official.clone()),
        field("Capital", country.capital_label()),
        field("Region", country.region.clone()),
        field("Subregion", country.subregion.clone()),
        field("Population", group_digits(country.population, locale)),
    ];

    if !country.flags.svg.is_empty() {
        lines.push(field("Flag", country.flags.svg.clone()));
    }
    if let Some(alt) = country.flags.alt.as_deref().filter(|alt| !alt.is_empty()) {
        lines.push(Line::from(Span::styled(
            format!("  {alt}"),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
    }

    // Upstream order, one row per currency
    if let Some(currencies) = &country.currencies {
        lines.push(Line::from(Span::styled(
            CURRENCIES_HEADING,
            Style::default().fg(Color::DarkGray),
        )));
        for (_, currency) in currencies.iter() {
            lines.push(Line::from(format!("  • {}", currency.label())));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(BACK_LINK, Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED)),
        Span::styled(" (Backspace)", Style::default().fg(Color::DarkGray)),
    ]));
    lines
}

/// Events emitted by the detail view.
#[derive(Debug, PartialEq, Eq)]
pub enum DetailEvent {
    Follow(Route),
}

/// Persistent scroll state for the detail view. Reset on every new code.
#[derive(Default)]
pub struct CountryDetailState {
    pub scroll: u16,
}

impl CountryDetailState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<DetailEvent> {
        match event {
            TuiEvent::CursorUp => self.scroll = self.scroll.saturating_sub(1),
            TuiEvent::CursorDown => self.scroll = self.scroll.saturating_add(1),
            TuiEvent::PageUp => self.scroll = self.scroll.saturating_sub(PAGE_SIZE),
            TuiEvent::PageDown => self.scroll = self.scroll.saturating_add(PAGE_SIZE),
            TuiEvent::Back => return Some(DetailEvent::Follow(Route::List)),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the detail view.
pub struct CountryDetail<'a> {
    state: &'a mut CountryDetailState,
    fetch: &'a FetchState<Vec<Country>>,
    locale: NumberLocale,
}

impl<'a> CountryDetail<'a> {
    pub fn new(
        state: &'a mut CountryDetailState,
        fetch: &'a FetchState<Vec<Country>>,
        locale: NumberLocale,
    ) -> Self {
        Self {
            state,
            fetch,
            locale,
        }
    }

    fn render_message(frame: &mut Frame, area: Rect, text: String, color: Color) {
        let lines = vec![
            Line::from(Span::styled(text, Style::default().fg(color))),
            Line::default(),
            Line::from(Span::styled(BACK_LINK, Style::default().fg(Color::Cyan))),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

impl Component for CountryDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let country = match self.fetch {
            FetchState::Pending => {
                Self::render_message(frame, area, LOADING_MESSAGE.to_string(), Color::DarkGray);
                return;
            }
            FetchState::Failure(message) => {
                Self::render_message(frame, area, format!("{ERROR_PREFIX}{message}"), Color::Red);
                return;
            }
            FetchState::Success(countries) => match countries.first() {
                Some(country) => country,
                None => {
                    Self::render_message(frame, area, NOT_FOUND_MESSAGE.to_string(), Color::Yellow);
                    return;
                }
            },
        };

        let lines = detail_lines(country, self.locale);

        // Borders take two rows
        let visible = area.height.saturating_sub(2);
        let max_scroll = (lines.len() as u16).saturating_sub(visible);
        self.state.scroll = self.state.scroll.min(max_scroll);

        let title = format!(" {} Details of {} ", country.flag_label(), country.name.common);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(title, Style::default().add_modifier(Modifier::BOLD)))
            .padding(Padding::horizontal(1));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .scroll((self.state.scroll, 0));

        frame.render_widget(paragraph, area);
    }
}
