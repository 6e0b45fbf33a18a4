//! # Recommendations and Next Steps
//!
//! Three independent synthesizers build the list-shaped parts of a feedback result:
//!
//! - [`generate_recommendations`]: the one-line summary bound into the `{recommendations}` slot.
//! - [`detailed_recommendations`]: the `recommendations` list, one line per kind of data present.
//! - [`next_steps`]: fixed lines per performance level, with one dynamic line for students who
//!   need improvement and have named weak areas.

use crate::level::PerformanceLevel;
use crate::types::StudentRecord;

pub const CONTINUE_STRENGTHS: &str = "Continue building on current strengths";
/// Bound into `{areas}` when a student has no weak areas.
pub const DEFAULT_AREAS: &str = "general concepts";
pub const DEFAULT_STRENGTHS: &str = "identified areas";

const EXCELLENT_STEPS: [&str; 2] = [
    "Explore advanced topics and challenges",
    "Consider peer tutoring opportunities",
];
const GOOD_STEPS: [&str; 2] = [
    "Practice additional exercises in identified areas",
    "Seek clarification on challenging concepts",
];
const NEEDS_IMPROVEMENT_STEPS: [&str; 2] = [
    "Schedule additional support sessions",
    "Review fundamental concepts",
];

/// The first two weak areas joined with `" and "`.
fn focus_areas(weak_areas: &[String]) -> String {
    weak_areas[..weak_areas.len().min(2)].join(" and ")
}

/// Short-form recommendation text.
///
/// Only the first two weak areas are used. Strengths are all listed.
///
/// ```rust
/// use feedback::recommendations::generate_recommendations;
///
/// let weak = vec!["Grammar".to_string(), "Vocabulary".to_string(), "Spelling".to_string()];
/// let strengths = vec!["Creative writing".to_string()];
/// assert_eq!(
///     generate_recommendations(&weak, &strengths),
///     "Focus on Grammar and Vocabulary while leveraging strengths in Creative writing"
/// );
/// ```
pub fn generate_recommendations(weak_areas: &[String], strengths: &[String]) -> String {
    if weak_areas.is_empty() {
        return CONTINUE_STRENGTHS.to_string();
    }

    let leverage = if strengths.is_empty() {
        DEFAULT_STRENGTHS.to_string()
    } else {
        strengths.join(" and ")
    };

    format!(
        "Focus on {} while leveraging strengths in {}",
        focus_areas(weak_areas),
        leverage
    )
}

/// Text bound into the `{areas}` slot.
pub fn areas_text(weak_areas: &[String]) -> String {
    if weak_areas.is_empty() {
        DEFAULT_AREAS.to_string()
    } else {
        weak_areas.join(", ")
    }
}

/// Detailed recommendation lines, in fixed order, for whichever inputs are present.
pub fn detailed_recommendations(record: &StudentRecord) -> Vec<String> {
    let mut lines = Vec::new();

    if !record.weak_areas.is_empty() {
        lines.push(format!(
            "Target improvement areas: {}",
            record.weak_areas.join(", ")
        ));
    }

    if !record.strengths.is_empty() {
        lines.push(format!(
            "Build upon strengths: {}",
            record.strengths.join(", ")
        ));
    }

    if let Some(style) = &record.learning_style {
        lines.push(format!(
            "Adapt teaching methods for {style} learning style"
        ));
    }

    lines
}

/// Next steps for a performance level.
pub fn next_steps(level: PerformanceLevel, weak_areas: &[String]) -> Vec<String> {
    let base = match level {
        PerformanceLevel::Excellent => EXCELLENT_STEPS,
        PerformanceLevel::Good => GOOD_STEPS,
        PerformanceLevel::NeedsImprovement => NEEDS_IMPROVEMENT_STEPS,
    };
    let mut steps: Vec<String> = base.iter().map(|s| s.to_string()).collect();

    if level == PerformanceLevel::NeedsImprovement && !weak_areas.is_empty() {
        steps.push(format!(
            "Focus specifically on: {}",
            focus_areas(weak_areas)
        ));
    }

    steps
}
