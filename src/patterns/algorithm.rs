use serde::{Deserialize, Serialize};

use crate::models::{CheckIn, Pattern, PatternKind, Trend};
use crate::patterns::config::PatternConfig;
use crate::patterns::stats::{activity_ranking, mean_of, round_one_decimal, summarize, Summary};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub patterns: Vec<Pattern>,
    pub summary: Option<Summary>,
}

/// The "recent" window and the window of the same size just before it.
struct Windows<'a> {
    recent: &'a [CheckIn],
    older: &'a [CheckIn],
}

impl<'a> Windows<'a> {
    fn split(history: &'a [CheckIn], size: usize) -> Self {
        let recent_start = history.len().saturating_sub(size);
        let older_start = recent_start.saturating_sub(size);
        Self {
            recent: &history[recent_start..],
            older: &history[older_start..recent_start],
        }
    }

    /// (recent mean, older mean). An empty older window reuses the recent
    /// mean, so the comparison reports no change.
    fn means(&self, level: impl Fn(&CheckIn) -> u8 + Copy) -> (f64, f64) {
        let recent = mean_of(self.recent, level);
        let older = if self.older.is_empty() {
            recent
        } else {
            mean_of(self.older, level)
        };
        (recent, older)
    }
}

pub fn analyze(history: &[CheckIn]) -> Analysis {
    analyze_with(history, &PatternConfig::default())
}

/// Main analysis: detect trend patterns over the history and summarize it.
pub fn analyze_with(history: &[CheckIn], config: &PatternConfig) -> Analysis {
    Analysis {
        patterns: detect_patterns(history, config),
        summary: summarize(history),
    }
}

pub fn detect_patterns(history: &[CheckIn], config: &PatternConfig) -> Vec<Pattern> {
    // Also guards the mean computations below against empty windows.
    if history.len() < config.min_history.max(1) {
        return vec![Pattern::new(
            PatternKind::Info,
            "Insufficient Data",
            "Keep tracking your behavior to discover personalized patterns and insights.",
            Trend::Stable,
        )];
    }

    let windows = Windows::split(history, config.window_size.max(1));
    let mut patterns = Vec::new();

    patterns.extend(focus_trend(&windows, config));
    patterns.extend(stress_trend(&windows, config));
    patterns.extend(energy_level(&windows, config));
    patterns.extend(routine(&windows, config));
    patterns.extend(mood_volatility(&windows, config));

    if patterns.is_empty() {
        patterns.push(Pattern::new(
            PatternKind::Info,
            "Stable Patterns",
            "Your behavior patterns are relatively stable. Continue monitoring to track changes over time.",
            Trend::Stable,
        ));
    }

    patterns
}

fn focus_trend(windows: &Windows<'_>, config: &PatternConfig) -> Option<Pattern> {
    let (recent, older) = windows.means(|c| c.focus_level);

    if recent > older + config.trend_delta {
        Some(Pattern::new(
            PatternKind::Focus,
            "Focus Improving",
            format!(
                "Your focus levels have increased by {} points. Keep up the good work!",
                round_one_decimal(recent - older)
            ),
            Trend::Up,
        ))
    } else if recent < older - config.trend_delta {
        Some(Pattern::new(
            PatternKind::Focus,
            "Focus Declining",
            "Your focus has decreased. Consider implementing better work habits or reducing distractions.",
            Trend::Down,
        ))
    } else {
        None
    }
}

/// Rising stress is reported as a downward (adverse) trend.
fn stress_trend(windows: &Windows<'_>, config: &PatternConfig) -> Option<Pattern> {
    let (recent, older) = windows.means(|c| c.stress_level);

    if recent > older + config.trend_delta {
        Some(Pattern::new(
            PatternKind::Stress,
            "Stress Increasing",
            "Your stress levels have risen. Prioritize relaxation techniques and self-care activities.",
            Trend::Down,
        ))
    } else if recent < older - config.trend_delta {
        Some(Pattern::new(
            PatternKind::Stress,
            "Stress Decreasing",
            "Great job managing stress! Your levels have improved significantly.",
            Trend::Up,
        ))
    } else {
        None
    }
}

fn energy_level(windows: &Windows<'_>, config: &PatternConfig) -> Option<Pattern> {
    let recent = mean_of(windows.recent, |c| c.energy);

    if recent < config.low_energy {
        Some(Pattern::new(
            PatternKind::Energy,
            "Low Energy Pattern",
            "Your energy levels are consistently low. Review your sleep, nutrition, and exercise habits.",
            Trend::Down,
        ))
    } else if recent > config.high_energy {
        Some(Pattern::new(
            PatternKind::Energy,
            "High Energy Levels",
            "You're maintaining excellent energy levels. Your lifestyle habits are working well!",
            Trend::Up,
        ))
    } else {
        None
    }
}

fn routine(windows: &Windows<'_>, config: &PatternConfig) -> Option<Pattern> {
    let (activity, count) = activity_ranking(windows.recent).into_iter().next()?;

    if count as f64 > windows.recent.len() as f64 * config.routine_share {
        Some(Pattern::new(
            PatternKind::Routine,
            "Routine Detected",
            format!(
                "You spend most of your time {}. Consider balancing with other activities.",
                activity.to_lowercase()
            ),
            Trend::Stable,
        ))
    } else {
        None
    }
}

fn mood_volatility(windows: &Windows<'_>, config: &PatternConfig) -> Option<Pattern> {
    let volatility = mean_mood_change(windows.recent)?;

    if volatility > config.volatile_mood {
        Some(Pattern::new(
            PatternKind::Mood,
            "Mood Fluctuations",
            "Your mood varies significantly. Consider tracking triggers and practicing emotional regulation techniques.",
            Trend::Down,
        ))
    } else if volatility < config.stable_mood {
        Some(Pattern::new(
            PatternKind::Mood,
            "Stable Mood",
            "Your emotional state is consistent and balanced. Great emotional regulation!",
            Trend::Up,
        ))
    } else {
        None
    }
}

/// Mean absolute difference between consecutive mood ordinals.
///
/// `None` when there are fewer than two entries or any mood is outside the
/// five-point scale; the volatility rule then reports nothing.
fn mean_mood_change(entries: &[CheckIn]) -> Option<f64> {
    if entries.len() < 2 {
        return None;
    }

    let ordinals = entries
        .iter()
        .map(|c| c.mood.ordinal())
        .collect::<Option<Vec<u8>>>()?;

    let total: u32 = ordinals
        .windows(2)
        .map(|pair| u32::from(pair[0].abs_diff(pair[1])))
        .sum();

    Some(f64::from(total) / (ordinals.len() - 1) as f64)
}
