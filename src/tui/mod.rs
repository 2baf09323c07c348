//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! ```text
//!   ┌──► draw (if needed)
//!   │      │
//!   │    poll terminal ──► TuiEvent ──► Action ──► update() ──► Effect
//!   │      │                                                     │
//!   │    drain mpsc ◄── Action::Loaded ◄── tokio task ◄── Fetch ─┘
//!   └──────┘
//! ```
//!
//! The loop itself is single-threaded. Fetches run as tokio tasks and
//! report back through the channel; the core drops any result whose
//! generation has been superseded, so the loop never has to cancel them.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crate::api::{JsonClient, RestClient};
use crate::core::action::{Action, Effect, FetchRequest, update};
use crate::core::config::ResolvedConfig;
use crate::core::fetch::FetchState;
use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::components::{
    CountryDetailState, CountryListState, DetailEvent, ListEvent, list_entries,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub country_list: CountryListState,
    pub country_detail: CountryDetailState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            country_list: CountryListState::new(),
            country_detail: CountryDetailState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client: Arc<dyn JsonClient> = Arc::new(RestClient::new());
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, &mut tui, client, config.start_route);
    ratatui::restore();

    if let Err(e) = &result {
        warn!("Event loop ended with error: {}", e);
    }
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    client: Arc<dyn JsonClient>,
    start_route: Route,
) -> std::io::Result<()> {
    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    info!("Starting at {}", start_route);
    dispatch(app, tui, Action::Navigate(start_route), &client, &tx);

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = handle_event(event, app, tui)
                && dispatch(app, tui, action, &client, &tx)
            {
                info!("Quit requested");
                return Ok(());
            }
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(app, tui, action, &client, &tx) {
                return Ok(());
            }
        }
    }
}

/// Translates a terminal event into an action for the active view.
fn handle_event(event: TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::Quit => return Some(Action::Quit),
        TuiEvent::Home => return Some(Action::Navigate(Route::List)),
        TuiEvent::Resize => return None,
        _ => {}
    }

    match &app.route {
        Route::List => {
            let entries = match app.countries.state() {
                FetchState::Success(countries) => list_entries(countries),
                _ => Vec::new(),
            };
            match tui.country_list.handle_event(&event, &entries)? {
                ListEvent::Open(route) => Some(Action::Navigate(route)),
            }
        }
        Route::Detail(_) => match tui.country_detail.handle_event(&event)? {
            DetailEvent::Follow(route) => Some(Action::Navigate(route)),
        },
    }
}

/// Applies an action and performs its effect. Returns true when the app should quit.
fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    action: Action,
    client: &Arc<dyn JsonClient>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    if let Action::Navigate(route @ Route::Detail(_)) = &action
        && *route != app.route
    {
        tui.country_detail = CountryDetailState::new();
    }

    match update(app, action) {
        Effect::None => false,
        Effect::Fetch(request) => {
            spawn_fetch(client.clone(), request, tx.clone());
            false
        }
        Effect::Quit => true,
    }
}

fn spawn_fetch(
    client: Arc<dyn JsonClient>,
    request: FetchRequest,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    info!(
        "Spawning {:?} fetch (gen={}): {}",
        request.target, request.ticket.generation, request.ticket.url
    );
    tokio::spawn(async move {
        let result = client.fetch_json(&request.ticket.url).await;
        if let Err(e) = &result {
            info!("Fetch failed for {}: {}", request.ticket.url, e);
        }
        let action = Action::Loaded {
            target: request.target,
            generation: request.ticket.generation,
            result,
        };
        if tx.send(action).is_err() {
            warn!("Failed to send fetch result: receiver dropped");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FetchError;
    use crate::core::action::FetchTarget;
    use crate::test_support::{FixtureClient, fixture_countries_json, test_app};

    fn load_list(app: &mut App) {
        let Effect::Fetch(request) = update(app, Action::Navigate(Route::List)) else {
            panic!("expected a fetch");
        };
        update(
            app,
            Action::Loaded {
                target: FetchTarget::List,
                generation: request.ticket.generation,
                result: Ok(fixture_countries_json()),
            },
        );
    }

    #[tokio::test]
    async fn test_spawn_fetch_reports_loaded_action() {
        let client: Arc<dyn JsonClient> = Arc::new(
            FixtureClient::new().with("http://countries.test/alpha/FRA", Ok(serde_json::json!([]))),
        );
        let mut app = test_app();
        let Effect::Fetch(request) =
            update(&mut app, Action::Navigate(Route::Detail("FRA".to_string())))
        else {
            panic!("expected a fetch");
        };
        let generation = request.ticket.generation;

        let (tx, rx) = mpsc::channel();
        spawn_fetch(client, request, tx).await.unwrap();

        match rx.try_recv().unwrap() {
            Action::Loaded {
                target,
                generation: got,
                result,
            } => {
                assert_eq!(target, FetchTarget::Detail);
                assert_eq!(got, generation);
                assert_eq!(result, Ok(serde_json::json!([])));
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_spawn_fetch_reports_http_failure() {
        let client: Arc<dyn JsonClient> = Arc::new(FixtureClient::new());
        let mut app = test_app();
        let Effect::Fetch(request) = update(&mut app, Action::Navigate(Route::List)) else {
            panic!("expected a fetch");
        };

        let (tx, rx) = mpsc::channel();
        spawn_fetch(client, request, tx).await.unwrap();

        let action = rx.try_recv().unwrap();
        update(&mut app, action);
        assert_eq!(
            app.countries.state(),
            &FetchState::Failure(FetchError::HttpStatus { status: 404 }.to_string())
        );
    }

    #[test]
    fn test_enter_on_list_navigates_to_selected_country() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        load_list(&mut app);

        assert!(handle_event(TuiEvent::CursorDown, &app, &mut tui).is_none());
        match handle_event(TuiEvent::Open, &app, &mut tui) {
            Some(Action::Navigate(route)) => assert_eq!(route, Route::Detail("JPN".to_string())),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_enter_while_loading_does_nothing() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        update(&mut app, Action::Navigate(Route::List));
        assert!(handle_event(TuiEvent::Open, &app, &mut tui).is_none());
    }

    #[test]
    fn test_back_on_detail_navigates_home() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        update(&mut app, Action::Navigate(Route::Detail("FRA".to_string())));
        match handle_event(TuiEvent::Back, &app, &mut tui) {
            Some(Action::Navigate(route)) => assert_eq!(route, Route::List),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_home_link_is_always_live() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        update(&mut app, Action::Navigate(Route::Detail("FRA".to_string())));
        // Detail still pending; the nav link works anyway
        assert!(matches!(
            handle_event(TuiEvent::Home, &app, &mut tui),
            Some(Action::Navigate(Route::List))
        ));
    }

    #[tokio::test]
    async fn test_dispatch_resets_detail_scroll_on_new_code() {
        let client: Arc<dyn JsonClient> = Arc::new(FixtureClient::new());
        let (tx, _rx) = mpsc::channel();
        let mut app = test_app();
        let mut tui = TuiState::new();

        dispatch(&mut app, &mut tui, Action::Navigate(Route::Detail("FRA".to_string())), &client, &tx);
        tui.country_detail.scroll = 4;
        dispatch(&mut app, &mut tui, Action::Navigate(Route::Detail("DEU".to_string())), &client, &tx);
        assert_eq!(tui.country_detail.scroll, 0);
    }

    #[tokio::test]
    async fn test_dispatch_quit() {
        let client: Arc<dyn JsonClient> = Arc::new(FixtureClient::new());
        let (tx, _rx) = mpsc::channel();
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert!(dispatch(&mut app, &mut tui, Action::Quit, &client, &tx));
    }
}
