//! Session setup and initialization

use crate::backend::BackendClient;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::environment::Environment;
use crate::events::Event;
use crate::kitchen::DashboardController;
use crate::kitchen::controller::EventSender;
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Event receiver for action tasks
    pub event_receiver: mpsc::Receiver<Event>,
    /// Controller that issues backend requests
    pub controller: DashboardController,
    /// Backend the session talks to
    pub environment: Environment,
}

/// Sets up a dashboard session
///
/// This function handles all the common setup required for both TUI and headless modes:
/// 1. Builds the HTTP backend client
/// 2. Creates the event channel
/// 3. Preselects the image, if one was given
///
/// # Arguments
/// * `env` - Backend to connect to
/// * `timeout` - Optional per-request timeout
/// * `image` - Optional image file to select up front
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - The client could not be built or the image could not be read
pub async fn setup_session(
    env: Environment,
    timeout: Option<Duration>,
    image: Option<&Path>,
) -> Result<SessionData, Box<dyn Error>> {
    let backend = BackendClient::with_timeout(env.clone(), timeout)?;

    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let mut controller = DashboardController::new(Arc::new(backend), EventSender::new(event_sender));

    if let Some(path) = image {
        controller
            .select_image_file(path)
            .await
            .map_err(|e| format!("Failed to read image {}: {}", path.display(), e))?;
    }

    Ok(SessionData {
        event_receiver,
        controller,
        environment: env,
    })
}
