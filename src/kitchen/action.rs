//! User-triggered actions and their fixed endpoint bindings.

/// Every action the dashboard can perform. Each one makes a single request
/// and feeds a single slot.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Hash, strum::Display, strum::EnumIter, clap::ValueEnum,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Action {
    Detect,
    Spoilage,
    Waste,
    Forecast,
    Recipes,
    MenuSuggestions,
}

/// Actions that upload the selected image.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum UploadAction {
    Detect,
    Spoilage,
    Waste,
}

/// Actions that fetch without a payload.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FetchAction {
    Forecast,
    Recipes,
    MenuSuggestions,
}

impl Action {
    /// Endpoint path, relative to the backend base URL.
    pub fn path(self) -> String {
        format!("/{}", self)
    }

    /// Text of the blocking notice shown when this action fails.
    pub fn failure_notice(self) -> &'static str {
        match self {
            Action::Detect | Action::Spoilage | Action::Waste => {
                "An error occurred during the image upload process."
            }
            Action::Forecast => "Failed to load forecast data",
            Action::Recipes => "Failed to load recipes",
            Action::MenuSuggestions => "Failed to load menu suggestions",
        }
    }

    /// Button-style label.
    pub fn label(self) -> &'static str {
        match self {
            Action::Detect => "Detect Inventory",
            Action::Spoilage => "Check Spoilage",
            Action::Waste => "Analyze Waste",
            Action::Forecast => "Load Forecast",
            Action::Recipes => "Generate Recipes",
            Action::MenuSuggestions => "Suggest Menu",
        }
    }

    pub fn requires_image(self) -> bool {
        matches!(self, Action::Detect | Action::Spoilage | Action::Waste)
    }
}

impl From<UploadAction> for Action {
    fn from(action: UploadAction) -> Self {
        match action {
            UploadAction::Detect => Action::Detect,
            UploadAction::Spoilage => Action::Spoilage,
            UploadAction::Waste => Action::Waste,
        }
    }
}

impl From<FetchAction> for Action {
    fn from(action: FetchAction) -> Self {
        match action {
            FetchAction::Forecast => Action::Forecast,
            FetchAction::Recipes => Action::Recipes,
            FetchAction::MenuSuggestions => Action::MenuSuggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_paths_match_backend_routes() {
        let paths: Vec<String> = Action::iter().map(Action::path).collect();
        assert_eq!(
            paths,
            vec![
                "/detect",
                "/spoilage",
                "/waste",
                "/forecast",
                "/recipes",
                "/menu-suggestions"
            ]
        );
    }

    #[test]
    fn test_uploads_share_one_notice_and_fetches_are_distinct() {
        assert_eq!(
            Action::Detect.failure_notice(),
            Action::Waste.failure_notice()
        );
        assert_ne!(
            Action::Forecast.failure_notice(),
            Action::Recipes.failure_notice()
        );
        assert_ne!(
            Action::Recipes.failure_notice(),
            Action::MenuSuggestions.failure_notice()
        );
    }

    #[test]
    fn test_only_uploads_require_image() {
        for action in Action::iter() {
            let is_upload = matches!(action, Action::Detect | Action::Spoilage | Action::Waste);
            assert_eq!(action.requires_image(), is_upload, "{}", action);
        }
    }
}
