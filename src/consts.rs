pub mod cli_consts {
    //! Dashboard Configuration Constants

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Event buffer size between action tasks and the UI loop
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // BACKEND CONFIGURATION
    // =============================================================================

    /// Base URL of a backend running on this machine
    pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

    /// Environment variable selecting the backend ("local" or a URL)
    pub const ENVIRONMENT_VAR: &str = "KITCHEN_ENVIRONMENT";

    /// Multipart form field carrying the uploaded image
    pub const UPLOAD_FIELD_NAME: &str = "file";

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// How long the splash screen stays up before the dashboard (milliseconds)
    pub const SPLASH_DURATION_MS: u64 = 1_500;

    /// Key event poll interval of the UI loop (milliseconds)
    pub const UI_POLL_INTERVAL_MS: u64 = 100;
}
