/// FaceSleuth Core — scanning, decoding, and aggregation.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends (GUI, CLI, TUI).
///
/// # Modules
///
/// - [`model`] — Label sets, decoded records, and supporting types.
/// - [`scanner`] — Non-recursive dataset directory scanning.
/// - [`decode`] — Filename metadata decoding.
/// - [`analysis`] — Cross-tabulated label aggregation.
pub mod analysis;
pub mod decode;
pub mod model;
pub mod scanner;
