//! Input collection. Everything handed to the engines passes through here
//! first, so the engines can assume in-range values.

pub mod assessment;
pub mod check_in;
mod error;

pub use assessment::{AssessmentDraft, AssessmentForm, BackOutcome, StepOutcome, TOTAL_STEPS};
pub use check_in::CheckInForm;
pub use error::ValidationError;
