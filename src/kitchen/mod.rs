//! Kitchen dashboard core
//!
//! Actions, the selected image, the six state slots and the controller that
//! turns user actions into backend requests.

pub mod action;
pub mod controller;
pub mod image;
pub mod slots;

pub use action::{Action, FetchAction, UploadAction};
pub use controller::DashboardController;
pub use image::SelectedImage;
pub use slots::{KitchenState, Slot, SlotUpdate, SpoilageStatus};
