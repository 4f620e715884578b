//! Dashboard state slots
//!
//! One slot per action. A slot only ever changes when a successful response
//! for its own action is applied, and then it is replaced wholesale.

use crate::backend::schema::{ForecastPoint, WasteEntry};
use crate::events::Event;
use chrono::Local;

/// A single piece of dashboard state.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<T> {
    Empty,
    Populated {
        value: T,
        /// Issuance number of the request whose response filled the slot.
        request_id: u64,
        /// Local time the response was applied.
        updated_at: String,
    },
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot::Empty
    }
}

impl<T> Slot<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Slot::Empty => None,
            Slot::Populated { value, .. } => Some(value),
        }
    }

    pub fn request_id(&self) -> Option<u64> {
        match self {
            Slot::Empty => None,
            Slot::Populated { request_id, .. } => Some(*request_id),
        }
    }

    pub fn updated_at(&self) -> Option<&str> {
        match self {
            Slot::Empty => None,
            Slot::Populated { updated_at, .. } => Some(updated_at),
        }
    }

    fn replace(&mut self, value: T, request_id: u64) {
        *self = Slot::Populated {
            value,
            request_id,
            updated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };
    }
}

impl<T> Slot<Vec<T>> {
    /// Items to list, empty when the slot is empty.
    pub fn items(&self) -> &[T] {
        self.value().map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Tri-state spoilage verdict.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SpoilageStatus {
    Unknown,
    Spoiled,
    NotSpoiled,
}

/// Parsed payload of a successful response, tagged with its target slot.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotUpdate {
    Inventory(Vec<String>),
    Spoilage(bool),
    WasteLog(Vec<WasteEntry>),
    Forecast(Vec<ForecastPoint>),
    Recipes(Vec<String>),
    MenuSuggestions(Vec<String>),
}

/// The six independent slots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KitchenState {
    pub inventory: Slot<Vec<String>>,
    pub spoilage: Slot<bool>,
    pub forecast: Slot<Vec<ForecastPoint>>,
    pub waste_log: Slot<Vec<WasteEntry>>,
    pub recipes: Slot<Vec<String>>,
    pub menu_suggestions: Slot<Vec<String>>,
}

impl KitchenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the targeted slot. Later calls win regardless of `request_id`.
    pub fn apply(&mut self, request_id: u64, update: SlotUpdate) {
        match update {
            SlotUpdate::Inventory(items) => self.inventory.replace(items, request_id),
            SlotUpdate::Spoilage(spoiled) => self.spoilage.replace(spoiled, request_id),
            SlotUpdate::WasteLog(log) => self.waste_log.replace(log, request_id),
            SlotUpdate::Forecast(series) => self.forecast.replace(series, request_id),
            SlotUpdate::Recipes(recipes) => self.recipes.replace(recipes, request_id),
            SlotUpdate::MenuSuggestions(dishes) => {
                self.menu_suggestions.replace(dishes, request_id)
            }
        }
    }

    /// Apply the slot update carried by an event, if any. Returns whether a
    /// slot changed.
    pub fn apply_event(&mut self, event: &Event) -> bool {
        match &event.update {
            Some(update) => {
                self.apply(event.request_id, update.clone());
                true
            }
            None => false,
        }
    }

    pub fn spoilage_status(&self) -> SpoilageStatus {
        match self.spoilage.value() {
            None => SpoilageStatus::Unknown,
            Some(true) => SpoilageStatus::Spoiled,
            Some(false) => SpoilageStatus::NotSpoiled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::error::BackendError;
    use crate::kitchen::Action;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = KitchenState::new();
        assert!(state.inventory.items().is_empty());
        assert_eq!(state.spoilage_status(), SpoilageStatus::Unknown);
        assert_eq!(state.forecast, Slot::Empty);
        assert_eq!(state.menu_suggestions.request_id(), None);
    }

    #[test]
    fn test_apply_replaces_wholesale() {
        let mut state = KitchenState::new();
        state.apply(1, SlotUpdate::Inventory(strings(&["milk", "eggs", "butter"])));
        state.apply(2, SlotUpdate::Inventory(strings(&["flour"])));

        assert_eq!(state.inventory.items(), strings(&["flour"]).as_slice());
        assert_eq!(state.inventory.request_id(), Some(2));
        assert!(state.inventory.updated_at().is_some());
    }

    #[test]
    fn test_apply_touches_only_its_slot() {
        let mut state = KitchenState::new();
        state.apply(1, SlotUpdate::Recipes(strings(&["Omelette"])));
        let before = state.clone();

        state.apply(2, SlotUpdate::Spoilage(false));

        assert_eq!(state.recipes, before.recipes);
        assert_eq!(state.inventory, Slot::Empty);
        assert_eq!(state.spoilage_status(), SpoilageStatus::NotSpoiled);
    }

    #[test]
    fn test_later_application_wins_over_higher_request_id() {
        let mut state = KitchenState::new();
        state.apply(2, SlotUpdate::Spoilage(false));
        state.apply(1, SlotUpdate::Spoilage(true));

        assert_eq!(state.spoilage_status(), SpoilageStatus::Spoiled);
        assert_eq!(state.spoilage.request_id(), Some(1));
    }

    #[test]
    fn test_populated_never_returns_to_empty() {
        let mut state = KitchenState::new();
        state.apply(1, SlotUpdate::MenuSuggestions(strings(&["Stew"])));
        state.apply(2, SlotUpdate::MenuSuggestions(Vec::new()));

        assert!(state.menu_suggestions.items().is_empty());
        assert_ne!(state.menu_suggestions, Slot::Empty);
    }

    #[test]
    fn test_failed_event_leaves_state_unchanged() {
        let mut state = KitchenState::new();
        state.apply(1, SlotUpdate::Forecast(Vec::new()));
        let before = state.clone();

        let error = BackendError::Http {
            status: 500,
            message: "boom".to_string(),
        };
        let changed = state.apply_event(&Event::failed(Action::Forecast, 2, &error));

        assert!(!changed);
        assert_eq!(state, before);
    }
}
