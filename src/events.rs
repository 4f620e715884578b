//! Event System
//!
//! Events sent by action tasks to whoever owns the dashboard state.

use crate::backend::error::BackendError;
use crate::kitchen::{Action, SlotUpdate};
use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    /// A request left for the backend.
    Issued,
    Success,
    Error,
    /// An upload was requested with no image selected.
    Skipped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub action: Action,
    /// Issuance number of the request; 0 for events with no request.
    pub request_id: u64,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Parsed response for successful requests
    pub update: Option<SlotUpdate>,
    /// Blocking notice to show the user for failed requests
    pub notice: Option<&'static str>,
}

impl Event {
    fn new(
        action: Action,
        request_id: u64,
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self {
            action,
            request_id,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            update: None,
            notice: None,
        }
    }

    pub fn issued(action: Action, request_id: u64) -> Self {
        let method = if action.requires_image() { "POST" } else { "GET" };
        Self::new(
            action,
            request_id,
            format!("#{} {} {}", request_id, method, action.path()),
            EventType::Issued,
            LogLevel::Info,
        )
    }

    pub fn succeeded(action: Action, request_id: u64, update: SlotUpdate) -> Self {
        let mut event = Self::new(
            action,
            request_id,
            format!("#{} {} updated", request_id, action.path()),
            EventType::Success,
            LogLevel::Info,
        );
        event.update = Some(update);
        event
    }

    pub fn failed(action: Action, request_id: u64, error: &BackendError) -> Self {
        let mut event = Self::new(
            action,
            request_id,
            format!("#{} {} failed: {}", request_id, action.path(), error),
            EventType::Error,
            error.log_level(),
        );
        event.notice = Some(action.failure_notice());
        event
    }

    pub fn skipped(action: Action) -> Self {
        Self::new(
            action,
            0,
            format!("{} ignored: no image selected", action.label()),
            EventType::Skipped,
            LogLevel::Debug,
        )
    }

    pub fn should_display(&self) -> bool {
        // Always show outcomes and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_event_carries_notice_and_no_update() {
        let error = BackendError::Http {
            status: 404,
            message: "not found".to_string(),
        };
        let event = Event::failed(Action::MenuSuggestions, 3, &error);
        assert_eq!(event.notice, Some("Failed to load menu suggestions"));
        assert!(event.update.is_none());
        assert_eq!(event.log_level, LogLevel::Error);
        assert!(event.msg.contains("/menu-suggestions"));
    }

    #[test]
    fn test_issued_event_names_method_and_path() {
        assert!(Event::issued(Action::Waste, 7).msg.contains("#7 POST /waste"));
        assert!(Event::issued(Action::Recipes, 8).msg.contains("#8 GET /recipes"));
    }

    #[test]
    fn test_skipped_event_is_debug_only() {
        let event = Event::skipped(Action::Detect);
        assert_eq!(event.event_type, EventType::Skipped);
        assert_eq!(event.log_level, LogLevel::Debug);
        assert!(event.notice.is_none());
    }

    #[test]
    fn test_display_format() {
        let event = Event::succeeded(Action::Spoilage, 1, SlotUpdate::Spoilage(true));
        assert!(event.to_string().starts_with("Success ["));
    }
}
