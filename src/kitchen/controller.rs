//! Dashboard controller
//!
//! Owns the selected image and turns user actions into backend requests.
//! Every request runs as its own task and reports back through the event
//! channel; the controller never writes to the slots itself. Whoever drains
//! the channel applies updates in arrival order, so the last response to
//! arrive wins.

use crate::backend::KitchenBackend;
use crate::backend::error::BackendError;
use crate::events::Event;
use crate::kitchen::{Action, FetchAction, SelectedImage, SlotUpdate, UploadAction};
use log::debug;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Event sending for action tasks
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send an event, waiting for queue space. A closed channel is ignored.
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }

    /// Send without waiting; dropped if the queue is full or closed.
    pub fn try_send_event(&self, event: Event) {
        let _ = self.sender.try_send(event);
    }
}

/// A request ready to be executed by a task.
#[derive(Debug, Clone)]
enum Request {
    Upload(UploadAction, SelectedImage),
    Fetch(FetchAction),
}

impl Request {
    fn action(&self) -> Action {
        match self {
            Request::Upload(action, _) => (*action).into(),
            Request::Fetch(action) => (*action).into(),
        }
    }
}

pub struct DashboardController {
    backend: Arc<dyn KitchenBackend>,
    events: EventSender,
    selected: Option<SelectedImage>,
    last_request_id: u64,
}

impl DashboardController {
    pub fn new(backend: Arc<dyn KitchenBackend>, events: EventSender) -> Self {
        Self {
            backend,
            events,
            selected: None,
            last_request_id: 0,
        }
    }

    pub fn backend(&self) -> &dyn KitchenBackend {
        self.backend.as_ref()
    }

    pub fn selected_image(&self) -> Option<&SelectedImage> {
        self.selected.as_ref()
    }

    /// Store the payload for the next upload, overwriting any previous one.
    pub fn select_image(&mut self, image: SelectedImage) {
        debug!("Selected image {:?}", image);
        self.selected = Some(image);
    }

    /// Read an image from disk and select it. On error the previous
    /// selection is kept.
    pub async fn select_image_file(&mut self, path: &Path) -> Result<SelectedImage, BackendError> {
        let image = SelectedImage::from_path(path).await?;
        self.select_image(image.clone());
        Ok(image)
    }

    /// Upload the selected image to one of the upload endpoints.
    ///
    /// Without a selected image this does nothing and returns `None`.
    pub fn submit_image(&mut self, action: UploadAction) -> Option<JoinHandle<()>> {
        match self.selected.clone() {
            Some(image) => Some(self.dispatch(Request::Upload(action, image))),
            None => {
                self.events.try_send_event(Event::skipped(action.into()));
                None
            }
        }
    }

    pub fn load_forecast(&mut self) -> JoinHandle<()> {
        self.dispatch(Request::Fetch(FetchAction::Forecast))
    }

    pub fn load_recipes(&mut self) -> JoinHandle<()> {
        self.dispatch(Request::Fetch(FetchAction::Recipes))
    }

    pub fn load_menu_suggestions(&mut self) -> JoinHandle<()> {
        self.dispatch(Request::Fetch(FetchAction::MenuSuggestions))
    }

    /// Run any action by name.
    pub fn trigger(&mut self, action: Action) -> Option<JoinHandle<()>> {
        match action {
            Action::Detect => self.submit_image(UploadAction::Detect),
            Action::Spoilage => self.submit_image(UploadAction::Spoilage),
            Action::Waste => self.submit_image(UploadAction::Waste),
            Action::Forecast => Some(self.load_forecast()),
            Action::Recipes => Some(self.load_recipes()),
            Action::MenuSuggestions => Some(self.load_menu_suggestions()),
        }
    }

    fn dispatch(&mut self, request: Request) -> JoinHandle<()> {
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        let action = request.action();

        let backend = Arc::clone(&self.backend);
        let events = self.events.clone();
        tokio::spawn(async move {
            // Issued and its outcome both wait for queue space, so neither is dropped
            events.send_event(Event::issued(action, request_id)).await;
            let event = match execute(backend.as_ref(), &request).await {
                Ok(update) => Event::succeeded(action, request_id, update),
                Err(e) => Event::failed(action, request_id, &e),
            };
            events.send_event(event).await;
        })
    }
}

/// Perform one request and map the consumed response field to its slot.
async fn execute(
    backend: &dyn KitchenBackend,
    request: &Request,
) -> Result<SlotUpdate, BackendError> {
    let update = match request {
        Request::Upload(UploadAction::Detect, image) => {
            SlotUpdate::Inventory(backend.detect(image).await?.items)
        }
        Request::Upload(UploadAction::Spoilage, image) => {
            SlotUpdate::Spoilage(backend.spoilage(image).await?.spoiled)
        }
        Request::Upload(UploadAction::Waste, image) => {
            SlotUpdate::WasteLog(backend.waste(image).await?.log)
        }
        Request::Fetch(FetchAction::Forecast) => SlotUpdate::Forecast(backend.forecast().await?),
        Request::Fetch(FetchAction::Recipes) => SlotUpdate::Recipes(backend.recipes().await?),
        Request::Fetch(FetchAction::MenuSuggestions) => {
            SlotUpdate::MenuSuggestions(backend.menu_suggestions().await?)
        }
    };
    Ok(update)
}


#[cfg(test)]
/// Overlapping requests against a real HTTP server.
mod overlap_tests {
    use super::*;
    use crate::backend::BackendClient;
    use crate::environment::Environment;
    use crate::kitchen::KitchenState;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    /// The slot keeps whichever response arrives last, not the last one issued.
    async fn test_last_arrival_wins() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/detect"))
            .and(body_string_contains("first-image"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"items": ["from-first"]}))
                    .set_delay(Duration::from_millis(400)),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/detect"))
            .and(body_string_contains("second-image"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"items": ["from-second"]})),
            )
            .mount(&server)
            .await;

        let client = BackendClient::with_timeout(
            Environment::Custom {
                backend_url: server.uri(),
            },
            None,
        )
        .unwrap();
        let (sender, mut receiver) = mpsc::channel(16);
        let mut controller = DashboardController::new(Arc::new(client), EventSender::new(sender));

        controller.select_image(SelectedImage::new("a.jpg", b"first-image".to_vec()));
        let first = controller.submit_image(UploadAction::Detect).unwrap();
        controller.select_image(SelectedImage::new("b.jpg", b"second-image".to_vec()));
        let second = controller.submit_image(UploadAction::Detect).unwrap();
        second.await.unwrap();
        first.await.unwrap();

        let mut state = KitchenState::new();
        let mut arrivals = Vec::new();
        while let Ok(event) = receiver.try_recv() {
            if state.apply_event(&event) {
                arrivals.push(event.request_id);
            }
        }

        assert_eq!(arrivals, vec![2, 1]);
        assert_eq!(state.inventory.items(), ["from-first".to_string()].as_slice());
        assert_eq!(state.inventory.request_id(), Some(1));
    }
}
