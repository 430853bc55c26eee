//! Key-value persistence for the assessment and the check-in history.
//!
//! Two keys are used:
//! - `wellnessData`: one JSON `AssessmentRecord`, overwritten on each retake
//! - `checkIns`: JSON array of `CheckIn`, grown by decode/push/re-encode
//!
//! Engines never touch a store; callers load plain values through
//! [`WellnessRecords`] and pass them in.

mod memory;
mod records;

pub use memory::MemoryStore;
pub use records::WellnessRecords;

use anyhow::Result;

pub const ASSESSMENT_KEY: &str = "wellnessData";
pub const CHECK_INS_KEY: &str = "checkIns";

/// Raw string storage. Last write wins; no transactions.
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn put(&self, key: &str, value: String) -> Result<()>;

    async fn remove(&self, key: &str) -> Result<()>;

    async fn clear(&self) -> Result<()>;
}
