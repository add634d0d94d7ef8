/// Data model for the FaceSleuth dataset.
///
/// Re-exports the label sets, the decoded record type, and supporting types.
pub mod count;
pub mod labels;
pub mod record;

pub use labels::{Ethnicity, Gender, AGE_SEED_MAX, AGE_SEED_MIN, DEFAULT_AGE_RANGE};
pub use record::FaceRecord;
