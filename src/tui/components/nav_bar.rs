//! # NavBar Component
//!
//! Persistent top line: app name, the Home link, and the current path.
//! Stays rendered (and the Home link stays live) whatever state the active
//! view is in, including loading and errors.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::route::Route;
use crate::tui::component::Component;

pub struct NavBar<'a> {
    pub route: &'a Route,
}

impl<'a> NavBar<'a> {
    pub fn new(route: &'a Route) -> Self {
        Self { route }
    }
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let home_style = if *self.route == Route::List {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED)
        };

        let line = Line::from(vec![
            Span::styled(" Countries ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw("│ "),
            Span::styled("Home", home_style),
            Span::styled(" (g)", Style::default().fg(Color::DarkGray)),
            Span::raw(" │ "),
            Span::styled(self.route.path(), Style::default().fg(Color::Gray)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
