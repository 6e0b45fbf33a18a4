//! # Performance Levels
//!
//! Classification of a 0-100 performance score into one of three tiers.
//! Thresholds are fixed; a caller-supplied rubric is never consulted here.

use crate::template::Template;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest score classified as [`PerformanceLevel::Excellent`].
pub const EXCELLENT_THRESHOLD: f64 = 85.0;
/// Lowest score classified as [`PerformanceLevel::Good`].
pub const GOOD_THRESHOLD: f64 = 70.0;

/// The tier a student's performance falls into.
///
/// Serialized in camelCase: `excellent`, `good`, `needsImprovement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PerformanceLevel {
    Excellent,
    Good,
    NeedsImprovement,
}

impl PerformanceLevel {
    /// Every level, highest tier first.
    pub const ALL: [PerformanceLevel; 3] = [
        PerformanceLevel::Excellent,
        PerformanceLevel::Good,
        PerformanceLevel::NeedsImprovement,
    ];

    /// Classifies a score. Boundaries belong to the higher tier.
    ///
    /// # Example
    ///
    /// ```rust
    /// use feedback::level::PerformanceLevel;
    ///
    /// assert_eq!(PerformanceLevel::classify(85.0), PerformanceLevel::Excellent);
    /// assert_eq!(PerformanceLevel::classify(84.999), PerformanceLevel::Good);
    /// assert_eq!(PerformanceLevel::classify(69.999), PerformanceLevel::NeedsImprovement);
    /// ```
    pub fn classify(performance: f64) -> Self {
        if performance >= EXCELLENT_THRESHOLD {
            PerformanceLevel::Excellent
        } else if performance >= GOOD_THRESHOLD {
            PerformanceLevel::Good
        } else {
            PerformanceLevel::NeedsImprovement
        }
    }

    /// Inclusive lower bound of the tier.
    pub fn min_score(&self) -> f64 {
        match self {
            PerformanceLevel::Excellent => EXCELLENT_THRESHOLD,
            PerformanceLevel::Good => GOOD_THRESHOLD,
            PerformanceLevel::NeedsImprovement => 0.0,
        }
    }

    pub fn template(&self) -> Template {
        Template::for_level(*self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceLevel::Excellent => "excellent",
            PerformanceLevel::Good => "good",
            PerformanceLevel::NeedsImprovement => "needsImprovement",
        }
    }
}

impl fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
