//! Kitchen Backend Client
//!
//! HTTP client for the smart-kitchen service: multipart image uploads and
//! plain JSON fetches.

use crate::backend::KitchenBackend;
use crate::backend::error::BackendError;
use crate::backend::schema::{DetectResponse, ForecastPoint, SpoilageResponse, WasteResponse};
use crate::consts::cli_consts::UPLOAD_FIELD_NAME;
use crate::environment::Environment;
use crate::kitchen::SelectedImage;
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("kitchen-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    environment: Environment,
}

impl BackendClient {
    /// Creates a client. `None` leaves requests unbounded.
    pub fn with_timeout(
        environment: Environment,
        timeout: Option<Duration>,
    ) -> Result<Self, BackendError> {
        let mut builder = ClientBuilder::new();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.backend_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn image_form(image: &SelectedImage) -> Result<Form, BackendError> {
        let part = Part::bytes(image.bytes().to_vec())
            .file_name(image.file_name().to_string())
            .mime_str(image.mime_type())?;
        Ok(Form::new().part(UPLOAD_FIELD_NAME, part))
    }

    async fn handle_response_status(response: Response) -> Result<Response, BackendError> {
        if !response.status().is_success() {
            return Err(BackendError::from_response(response).await);
        }
        Ok(response)
    }

    async fn decode_response<T: DeserializeOwned>(
        endpoint: &str,
        response: Response,
    ) -> Result<T, BackendError> {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| BackendError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, BackendError> {
        let url = self.build_url(endpoint);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        Self::decode_response(endpoint, response).await
    }

    async fn upload_request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        image: &SelectedImage,
    ) -> Result<T, BackendError> {
        let url = self.build_url(endpoint);
        debug!("POST {} ({} bytes)", url, image.len());
        let response = self
            .client
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .multipart(Self::image_form(image)?)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        Self::decode_response(endpoint, response).await
    }
}

#[async_trait::async_trait]
impl KitchenBackend for BackendClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn detect(&self, image: &SelectedImage) -> Result<DetectResponse, BackendError> {
        self.upload_request("detect", image).await
    }

    async fn spoilage(&self, image: &SelectedImage) -> Result<SpoilageResponse, BackendError> {
        self.upload_request("spoilage", image).await
    }

    async fn waste(&self, image: &SelectedImage) -> Result<WasteResponse, BackendError> {
        self.upload_request("waste", image).await
    }

    async fn forecast(&self) -> Result<Vec<ForecastPoint>, BackendError> {
        self.get_request("forecast").await
    }

    async fn recipes(&self) -> Result<Vec<String>, BackendError> {
        self.get_request("recipes").await
    }

    async fn menu_suggestions(&self) -> Result<Vec<String>, BackendError> {
        self.get_request("menu-suggestions").await
    }
}
