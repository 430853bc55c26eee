use serde::{Deserialize, Serialize};

use super::error::{check_half_step, check_range, ValidationError};
use crate::models::{AssessmentMood, AssessmentRecord, ExerciseFrequency, WorkBreaks};

pub const TOTAL_STEPS: u8 = 5;

/// Answers collected so far. Choice fields start unanswered; sliders start
/// at the questionnaire's defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentDraft {
    pub mood: Option<AssessmentMood>,
    pub sleep_quality: u8,
    pub sleep_hours: f64,
    pub stress_level: u8,
    pub exercise_frequency: Option<ExerciseFrequency>,
    pub water_intake: u8,
    pub screen_time: f64,
    pub work_breaks: Option<WorkBreaks>,
    pub posture: String,
}

impl Default for AssessmentDraft {
    fn default() -> Self {
        Self {
            mood: None,
            sleep_quality: 5,
            sleep_hours: 7.0,
            stress_level: 5,
            exercise_frequency: None,
            water_intake: 4,
            screen_time: 6.0,
            work_breaks: None,
            posture: String::new(),
        }
    }
}

impl AssessmentDraft {
    /// Full check of every answer; the result satisfies the record's ranges.
    pub fn validate(&self) -> Result<AssessmentRecord, ValidationError> {
        let mood = required_choice("mood", &self.mood, |m| match m {
            AssessmentMood::Unrecognized(raw) => Some(raw.clone()),
            _ => None,
        })?;
        let exercise_frequency =
            required_choice("exerciseFrequency", &self.exercise_frequency, |e| match e {
                ExerciseFrequency::Unrecognized(raw) => Some(raw.clone()),
                _ => None,
            })?;
        let work_breaks = required_choice("workBreaks", &self.work_breaks, |w| match w {
            WorkBreaks::Unrecognized(raw) => Some(raw.clone()),
            _ => None,
        })?;

        check_range("sleepQuality", f64::from(self.sleep_quality), 1.0, 10.0)?;
        check_range("sleepHours", self.sleep_hours, 3.0, 12.0)?;
        check_half_step("sleepHours", self.sleep_hours)?;
        check_range("stressLevel", f64::from(self.stress_level), 1.0, 10.0)?;
        check_range("waterIntake", f64::from(self.water_intake), 0.0, 15.0)?;
        check_range("screenTime", self.screen_time, 0.0, 16.0)?;
        check_half_step("screenTime", self.screen_time)?;

        Ok(AssessmentRecord {
            mood,
            sleep_quality: self.sleep_quality,
            sleep_hours: self.sleep_hours,
            stress_level: self.stress_level,
            exercise_frequency,
            water_intake: self.water_intake,
            screen_time: self.screen_time,
            work_breaks,
            posture: self.posture.clone(),
        })
    }
}

fn required_choice<T: Clone>(
    field: &'static str,
    value: &Option<T>,
    unrecognized: impl Fn(&T) -> Option<String>,
) -> Result<T, ValidationError> {
    let choice = value.as_ref().ok_or(ValidationError::MissingField(field))?;
    if let Some(raw) = unrecognized(choice) {
        return Err(ValidationError::UnrecognizedChoice { field, value: raw });
    }
    Ok(choice.clone())
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Advanced(u8),
    Completed(AssessmentRecord),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    Step(u8),
    /// Backing out of the first step leaves the questionnaire.
    Exit,
}

/// Five-step questionnaire: mood, sleep, stress, exercise, daily habits.
#[derive(Debug, Clone)]
pub struct AssessmentForm {
    step: u8,
    pub draft: AssessmentDraft,
}

impl Default for AssessmentForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentForm {
    pub fn new() -> Self {
        Self {
            step: 1,
            draft: AssessmentDraft::default(),
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn progress(&self) -> f64 {
        f64::from(self.step()) / f64::from(TOTAL_STEPS) * 100.0
    }

    pub fn is_last_step(&self) -> bool {
        self.step() == TOTAL_STEPS
    }

    /// Choice questions block their step until answered.
    pub fn can_advance(&self) -> bool {
        self.missing_on_current_step().is_none()
    }

    fn missing_on_current_step(&self) -> Option<&'static str> {
        match self.step() {
            1 if self.draft.mood.is_none() => Some("mood"),
            4 if self.draft.exercise_frequency.is_none() => Some("exerciseFrequency"),
            5 if self.draft.work_breaks.is_none() => Some("workBreaks"),
            _ => None,
        }
    }

    /// Move forward one step, or produce the finished record on the last one.
    pub fn next(&mut self) -> Result<StepOutcome, ValidationError> {
        if let Some(field) = self.missing_on_current_step() {
            return Err(ValidationError::MissingField(field));
        }

        if self.step() < TOTAL_STEPS {
            self.step += 1;
            return Ok(StepOutcome::Advanced(self.step));
        }

        self.draft.validate().map(StepOutcome::Completed)
    }

    pub fn back(&mut self) -> BackOutcome {
        if self.step() > 1 {
            self.step -= 1;
            BackOutcome::Step(self.step)
        } else {
            BackOutcome::Exit
        }
    }

    /// Walk every step from the current one to completion.
    pub fn complete(mut self) -> Result<AssessmentRecord, ValidationError> {
        loop {
            if let StepOutcome::Completed(record) = self.next()? {
                return Ok(record);
            }
        }
    }
}
