//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::{SPLASH_DURATION_MS, UI_POLL_INTERVAL_MS};
use crate::events::Event as ActionEvent;
use crate::kitchen::{Action, DashboardController};
use crate::ui::dashboard::components::cards::action_key;
use crate::ui::dashboard::state::Notice;
use crate::ui::dashboard::{DashboardState, InputMode, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Frame, Terminal, backend::Backend};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use strum::IntoEnumIterator;
use tokio::sync::mpsc;

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The kitchen dashboard.
    Dashboard,
}

/// What the UI loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// Application state
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Dashboard state; receives events even while the splash is up.
    state: DashboardState,

    /// Issues backend requests on behalf of key presses.
    controller: DashboardController,

    /// Receives events from action tasks.
    event_receiver: mpsc::Receiver<ActionEvent>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        controller: DashboardController,
        event_receiver: mpsc::Receiver<ActionEvent>,
        with_background_color: bool,
    ) -> Self {
        let environment = controller.backend().environment().clone();
        let mut state = DashboardState::new(environment, Instant::now(), with_background_color);
        state.selected_image = controller.selected_image().cloned();
        Self {
            current_screen: Screen::Splash,
            state,
            controller,
            event_receiver,
        }
    }

    /// Move every event received so far into the dashboard queue.
    fn drain_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.state.add_event(event);
        }
    }

    /// Handle a single key press.
    pub async fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyOutcome::Quit;
        }

        if self.current_screen == Screen::Splash {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                return KeyOutcome::Quit;
            }
            // Any other key skips the splash screen
            self.current_screen = Screen::Dashboard;
            return KeyOutcome::Continue;
        }

        // An open notice swallows every key until it is acknowledged
        if self.state.notice().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.state.dismiss_notice();
            }
            return KeyOutcome::Continue;
        }

        if let InputMode::EditingPath(buffer) = self.state.input_mode().clone() {
            self.handle_path_key(key.code, buffer).await;
            return KeyOutcome::Continue;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return KeyOutcome::Quit,
            KeyCode::Char('i') | KeyCode::Char('I') => {
                self.state
                    .set_input_mode(InputMode::EditingPath(String::new()));
            }
            KeyCode::Char(c) => {
                if let Some(action) = action_for_key(c) {
                    self.controller.trigger(action);
                }
            }
            _ => {}
        }
        KeyOutcome::Continue
    }

    async fn handle_path_key(&mut self, code: KeyCode, mut buffer: String) {
        match code {
            KeyCode::Esc => self.state.set_input_mode(InputMode::Normal),
            KeyCode::Backspace => {
                buffer.pop();
                self.state.set_input_mode(InputMode::EditingPath(buffer));
            }
            KeyCode::Char(c) => {
                buffer.push(c);
                self.state.set_input_mode(InputMode::EditingPath(buffer));
            }
            KeyCode::Enter => {
                self.state.set_input_mode(InputMode::Normal);
                let path = PathBuf::from(buffer.trim().trim_matches(|c| c == '"' || c == '\''));
                match self.controller.select_image_file(&path).await {
                    Ok(image) => self.state.selected_image = Some(image),
                    Err(e) => self.state.push_notice(Notice {
                        action: None,
                        message: "Could not read the selected image.".to_string(),
                        detail: format!("{}: {}", path.display(), e),
                    }),
                }
            }
            _ => self.state.set_input_mode(InputMode::EditingPath(buffer)),
        }
    }
}

/// Action bound to a key, case-insensitive.
fn action_for_key(c: char) -> Option<Action> {
    let c = c.to_ascii_lowercase();
    Action::iter().find(|action| action_key(*action) == c)
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_millis(SPLASH_DURATION_MS);

    loop {
        // Responses are applied in the order they arrive
        app.drain_events();
        app.state.update();

        terminal.draw(|f| render(f, &app))?;

        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration {
            app.current_screen = Screen::Dashboard;
            continue;
        }

        if event::poll(Duration::from_millis(UI_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key).await == KeyOutcome::Quit {
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, &app.state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockKitchenBackend;
    use crate::backend::error::BackendError;
    use crate::environment::Environment;
    use crate::events::EventType;
    use crate::kitchen::controller::EventSender;
    use std::sync::Arc;
    use tokio::time::timeout;

    fn app_with(mut backend: MockKitchenBackend) -> App {
        backend
            .expect_environment()
            .return_const(Environment::Local);
        let (sender, receiver) = mpsc::channel(32);
        let controller = DashboardController::new(Arc::new(backend), EventSender::new(sender));
        let mut app = App::new(controller, receiver, false);
        app.current_screen = Screen::Dashboard;
        app
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn next_event(app: &mut App) -> ActionEvent {
        timeout(Duration::from_secs(2), app.event_receiver.recv())
            .await
            .expect("event in time")
            .expect("channel open")
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let mut app = app_with(MockKitchenBackend::new());
        assert_eq!(app.handle_key(press(KeyCode::Char('q'))).await, KeyOutcome::Quit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
                .await,
            KeyOutcome::Quit
        );
    }

    #[tokio::test]
    async fn test_any_key_leaves_splash() {
        let mut app = app_with(MockKitchenBackend::new());
        app.current_screen = Screen::Splash;
        assert_eq!(
            app.handle_key(press(KeyCode::Char('x'))).await,
            KeyOutcome::Continue
        );
        assert_eq!(app.current_screen, Screen::Dashboard);
    }

    #[tokio::test]
    async fn test_key_triggers_fetch() {
        let mut backend = MockKitchenBackend::new();
        backend
            .expect_recipes()
            .times(1)
            .returning(|| Ok(vec!["Shakshuka".to_string()]));
        let mut app = app_with(backend);

        app.handle_key(press(KeyCode::Char('R'))).await;

        assert_eq!(next_event(&mut app).await.event_type, EventType::Issued);
        let done = next_event(&mut app).await;
        assert_eq!(done.event_type, EventType::Success);
        app.state.add_event(done);
        app.state.update();
        assert_eq!(
            app.state.kitchen.recipes.items(),
            ["Shakshuka".to_string()].as_slice()
        );
    }

    #[tokio::test]
    /// Upload keys without a selected image never reach the backend.
    async fn test_upload_key_without_image_is_ignored() {
        let mut backend = MockKitchenBackend::new();
        backend.expect_detect().times(0);
        let mut app = app_with(backend);

        app.handle_key(press(KeyCode::Char('d'))).await;

        assert_eq!(next_event(&mut app).await.event_type, EventType::Skipped);
        app.drain_events();
        app.state.update();
        assert!(app.state.notice().is_none());
    }

    #[tokio::test]
    async fn test_notice_blocks_actions_until_dismissed() {
        let mut backend = MockKitchenBackend::new();
        backend.expect_forecast().times(0);
        let mut app = app_with(backend);
        let error = BackendError::Http {
            status: 500,
            message: "down".to_string(),
        };
        app.state
            .add_event(ActionEvent::failed(Action::Recipes, 1, &error));
        app.state.update();

        assert_eq!(
            app.handle_key(press(KeyCode::Char('f'))).await,
            KeyOutcome::Continue
        );
        assert_eq!(
            app.handle_key(press(KeyCode::Char('q'))).await,
            KeyOutcome::Continue
        );
        assert!(app.state.notice().is_some());

        app.handle_key(press(KeyCode::Enter)).await;
        assert!(app.state.notice().is_none());
    }

    #[tokio::test]
    async fn test_path_prompt_selects_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shelf.jpg");
        std::fs::write(&path, [7u8; 16]).unwrap();
        let mut app = app_with(MockKitchenBackend::new());

        app.handle_key(press(KeyCode::Char('i'))).await;
        for c in path.to_string_lossy().chars() {
            app.handle_key(press(KeyCode::Char(c))).await;
        }
        app.handle_key(press(KeyCode::Enter)).await;

        assert_eq!(app.state.input_mode(), &InputMode::Normal);
        assert_eq!(
            app.state.selected_image.as_ref().unwrap().file_name(),
            "shelf.jpg"
        );
        assert_eq!(app.controller.selected_image().unwrap().len(), 16);
    }

    #[tokio::test]
    async fn test_bad_path_raises_notice() {
        let mut app = app_with(MockKitchenBackend::new());

        app.handle_key(press(KeyCode::Char('i'))).await;
        for c in "/definitely/not/here.png".chars() {
            app.handle_key(press(KeyCode::Char(c))).await;
        }
        app.handle_key(press(KeyCode::Enter)).await;

        assert!(app.state.selected_image.is_none());
        assert_eq!(
            app.state.notice().unwrap().message,
            "Could not read the selected image."
        );
    }

    #[test]
    fn test_action_for_key() {
        assert_eq!(action_for_key('m'), Some(Action::MenuSuggestions));
        assert_eq!(action_for_key('W'), Some(Action::Waste));
        assert_eq!(action_for_key('z'), None);
    }
}
