//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::kitchen::{Action, KitchenState};
use crate::ui::dashboard::components::cards::{card_content, card_title};
use std::error::Error;

/// Runs a single action in headless mode
///
/// The action's events are printed to the console, followed by the card the
/// response produced. A failed request is returned as an error carrying the
/// action's notice.
///
/// # Arguments
/// * `session` - Session data from setup
/// * `action` - The action to perform
pub async fn run_headless_mode(
    mut session: SessionData,
    action: Action,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.environment);

    let Some(handle) = session.controller.trigger(action) else {
        return Err(format!("{} needs an image. Pass --image <PATH>.", action.label()).into());
    };

    tokio::select! {
        joined = handle => joined?,
        _ = tokio::signal::ctrl_c() => {
            print_session_shutdown();
            return Err("Interrupted before the backend responded".into());
        }
    }

    // The task has sent all of its events by the time it finishes
    let mut kitchen = KitchenState::new();
    let mut failure = None;
    while let Ok(event) = session.event_receiver.try_recv() {
        if event.should_display() {
            println!("{}", event);
        }
        if let Some(notice) = event.notice {
            failure = Some(notice);
        }
        kitchen.apply_event(&event);
    }

    if let Some(notice) = failure {
        return Err(notice.into());
    }

    for line in card_lines(action, &kitchen) {
        println!("{}", line);
    }
    print_session_exit_success();
    Ok(())
}

/// Plain-text rendition of the card fed by `action`.
pub fn card_lines(action: Action, kitchen: &KitchenState) -> Vec<String> {
    let content = card_content(action, kitchen);
    let mut lines = vec![card_title(action).to_string()];
    if content.placeholder {
        lines.extend(content.lines.into_iter().map(|line| format!("  {}", line)));
    } else {
        lines.extend(content.lines.into_iter().map(|line| format!("  • {}", line)));
    }
    lines
}
