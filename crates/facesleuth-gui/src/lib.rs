/// FaceSleuth GUI — egui-based desktop frontend.
///
/// This crate contains all UI code. Business logic lives in `facesleuth-core`.
pub mod app;
pub mod charts;
pub mod icon;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::{FaceSleuthApp, FaceSleuthState};
