use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CountryDetail, CountryList, NavBar};

/// Draws the shell: navigation bar on top, the active route's view below.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [nav_area, main_area] = layout.areas(frame.area());

    NavBar::new(&app.route).render(frame, nav_area);

    match &app.route {
        Route::List => {
            CountryList::new(&mut tui.country_list, app.countries.state()).render(frame, main_area);
        }
        Route::Detail(_) => {
            CountryDetail::new(&mut tui.country_detail, app.country.state(), app.locale)
                .render(frame, main_area);
        }
    }
}
