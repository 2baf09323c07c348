use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields), may borrow
/// persistent presentation state, and render to a `Frame` within a given
/// `Rect`. `render` takes `&mut self` so stateful widgets (list selection,
/// scroll offsets) can be updated during the render pass.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
