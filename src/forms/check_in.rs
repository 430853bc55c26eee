use chrono::{DateTime, Utc};

use super::error::{check_range, ValidationError};
use crate::models::{Activity, CheckIn, CheckInMood, CheckInState};

/// Monitor form: starts from the neutral defaults and only saves once an
/// activity is chosen.
#[derive(Debug, Clone, Default)]
pub struct CheckInForm {
    pub state: CheckInState,
}

impl CheckInForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: CheckInState) -> Self {
        Self { state }
    }

    pub fn submit(&self, now: DateTime<Utc>) -> Result<CheckIn, ValidationError> {
        if let CheckInMood::Unrecognized(raw) = &self.state.mood {
            return Err(ValidationError::UnrecognizedChoice {
                field: "mood",
                value: raw.clone(),
            });
        }

        let activity = match &self.state.activity {
            None => return Err(ValidationError::MissingField("activity")),
            Some(Activity::Unrecognized(raw)) => {
                return Err(ValidationError::UnrecognizedChoice {
                    field: "activity",
                    value: raw.clone(),
                })
            }
            Some(activity) => activity.clone(),
        };

        check_range("focusLevel", f64::from(self.state.focus_level), 1.0, 10.0)?;
        check_range("stressLevel", f64::from(self.state.stress_level), 1.0, 10.0)?;
        check_range("energy", f64::from(self.state.energy), 1.0, 10.0)?;

        Ok(CheckIn {
            timestamp: now,
            mood: self.state.mood.clone(),
            focus_level: self.state.focus_level,
            stress_level: self.state.stress_level,
            energy: self.state.energy,
            activity,
        })
    }
}
