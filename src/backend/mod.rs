use crate::backend::error::BackendError;
use crate::backend::schema::{DetectResponse, ForecastPoint, SpoilageResponse, WasteResponse};
use crate::environment::Environment;
use crate::kitchen::SelectedImage;

pub(crate) mod client;
pub use client::BackendClient;
pub mod error;
pub mod schema;

#[cfg(test)]
use mockall::automock;

/// The smart-kitchen service consumed by the dashboard.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait KitchenBackend: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Detect inventory items in an image.
    async fn detect(&self, image: &SelectedImage) -> Result<DetectResponse, BackendError>;

    /// Classify whether the pictured food is spoiled.
    async fn spoilage(&self, image: &SelectedImage) -> Result<SpoilageResponse, BackendError>;

    /// Categorise the waste shown in an image.
    async fn waste(&self, image: &SelectedImage) -> Result<WasteResponse, BackendError>;

    /// Fetch the demand forecast series.
    async fn forecast(&self) -> Result<Vec<ForecastPoint>, BackendError>;

    /// Fetch generated recipe suggestions.
    async fn recipes(&self) -> Result<Vec<String>, BackendError>;

    /// Fetch optimised menu suggestions.
    async fn menu_suggestions(&self) -> Result<Vec<String>, BackendError>;
}
