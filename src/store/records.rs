use anyhow::{Context, Result};

use super::{RecordStore, ASSESSMENT_KEY, CHECK_INS_KEY};
use crate::models::{AssessmentRecord, CheckIn};
use crate::{log_debug, log_info};

const ENABLE_LOGS: bool = true;

/// Typed access to the two record keys over any [`RecordStore`].
#[derive(Clone)]
pub struct WellnessRecords<S> {
    store: S,
}

impl<S: RecordStore> WellnessRecords<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// `None` means no assessment has been completed yet.
    pub async fn load_assessment(&self) -> Result<Option<AssessmentRecord>> {
        let Some(raw) = self.store.get(ASSESSMENT_KEY).await? else {
            return Ok(None);
        };

        let record = serde_json::from_str(&raw)
            .with_context(|| format!("failed to decode record '{ASSESSMENT_KEY}'"))?;
        Ok(Some(record))
    }

    /// Replaces any previous assessment wholesale.
    pub async fn save_assessment(&self, record: &AssessmentRecord) -> Result<()> {
        let encoded = serde_json::to_string(record).context("failed to encode assessment")?;
        self.store.put(ASSESSMENT_KEY, encoded).await?;
        log_info!("Assessment saved");
        Ok(())
    }

    /// Stored history in append order; empty when nothing was stored yet.
    pub async fn load_check_ins(&self) -> Result<Vec<CheckIn>> {
        let Some(raw) = self.store.get(CHECK_INS_KEY).await? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw)
            .with_context(|| format!("failed to decode record '{CHECK_INS_KEY}'"))
    }

    /// Decodes the history, pushes `check_in`, and writes the whole list back.
    /// Returns the new history length.
    pub async fn append_check_in(&self, check_in: CheckIn) -> Result<usize> {
        let mut history = self.load_check_ins().await?;
        history.push(check_in);

        let encoded = serde_json::to_string(&history).context("failed to encode check-ins")?;
        self.store.put(CHECK_INS_KEY, encoded).await?;

        log_debug!("Check-in appended; history now has {} entries", history.len());
        Ok(history.len())
    }

    pub async fn clear(&self) -> Result<()> {
        self.store.remove(ASSESSMENT_KEY).await?;
        self.store.remove(CHECK_INS_KEY).await?;
        log_info!("Cleared stored assessment and check-in history");
        Ok(())
    }
}
