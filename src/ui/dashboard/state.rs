//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event as ActionEvent;
use crate::kitchen::{Action, KitchenState, SelectedImage};

use std::collections::{HashMap, VecDeque};
use std::time::Instant;

/// What keystrokes currently go to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Single-key actions.
    Normal,
    /// Typing the path of an image to select.
    EditingPath(String),
}

/// A failure the user has to acknowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub action: Option<Action>,
    pub message: String,
    pub detail: String,
}

/// Dashboard state: the six slots plus everything around them.
#[derive(Debug)]
pub struct DashboardState {
    /// The backend the dashboard talks to.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// The six card slots. Written only by the update loop.
    pub kitchen: KitchenState,
    /// Image pending upload, mirrored from the controller.
    pub selected_image: Option<SelectedImage>,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<ActionEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<ActionEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,

    /// Requests issued but not yet answered, per action
    in_flight: HashMap<Action, usize>,
    /// Failure notices, oldest first; the front one is on screen
    notices: VecDeque<Notice>,
    input_mode: InputMode,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, with_background_color: bool) -> Self {
        Self {
            environment,
            start_time,
            kitchen: KitchenState::new(),
            selected_image: None,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color,
            tick: 0,
            in_flight: HashMap::new(),
            notices: VecDeque::new(),
            input_mode: InputMode::Normal,
        }
    }

    pub fn in_flight(&self, action: Action) -> usize {
        self.in_flight.get(&action).copied().unwrap_or(0)
    }

    pub(super) fn in_flight_mut(&mut self) -> &mut HashMap<Action, usize> {
        &mut self.in_flight
    }

    /// The notice currently on screen, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    /// Acknowledge the notice on screen, revealing the next one.
    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }

    pub fn input_mode(&self) -> &InputMode {
        &self.input_mode
    }

    pub fn set_input_mode(&mut self, mode: InputMode) {
        self.input_mode = mode;
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: ActionEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: ActionEvent) {
        self.pending_events.push_back(event);
    }
}
