//! Dashboard state update logic
//!
//! Applies queued action events to the dashboard state

use super::state::{DashboardState, Notice};
use crate::events::{Event as ActionEvent, EventType};

impl DashboardState {
    /// Advance one tick, processing every queued event in arrival order.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(&event);
            self.add_to_activity_log(event);
        }
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &ActionEvent) {
        match event.event_type {
            EventType::Issued => {
                *self.in_flight_mut().entry(event.action).or_insert(0) += 1;
            }
            EventType::Success => {
                self.finish_request(event);
                self.kitchen.apply_event(event);
            }
            EventType::Error => {
                self.finish_request(event);
                if let Some(message) = event.notice {
                    self.push_notice(Notice {
                        action: Some(event.action),
                        message: message.to_string(),
                        detail: event.msg.clone(),
                    });
                }
            }
            EventType::Skipped => {}
        }
    }

    fn finish_request(&mut self, event: &ActionEvent) {
        if let Some(count) = self.in_flight_mut().get_mut(&event.action) {
            *count = count.saturating_sub(1);
        }
    }
}
