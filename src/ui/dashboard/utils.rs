//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::kitchen::Action;
use ratatui::prelude::Color;
use std::time::Duration;

/// Get a ratatui color for an action's log lines
pub fn get_action_color(action: Action) -> Color {
    match action {
        Action::Detect | Action::Spoilage | Action::Waste => Color::Cyan,
        Action::Forecast => Color::LightBlue,
        Action::Recipes | Action::MenuSuggestions => Color::Yellow,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min_sec)) = (date_part.get(5..10), time_part.get(0..8)) {
            return format!("{} {}", month_day, hour_min_sec);
        }
    }
    timestamp.to_string()
}

/// Uptime as hours, minutes and seconds
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// Shorten verbose reqwest error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("Reqwest error") {
        let prefix = msg.split(": Reqwest error").next().unwrap_or(msg);
        let lower = msg.to_lowercase();
        if lower.contains("timed out") {
            return format!("{}: request timed out", prefix);
        }
        if lower.contains("connect") {
            return format!("{}: backend unreachable", prefix);
        }
        return format!("{}: network error", prefix);
    }
    msg.to_string()
}
