//! # Feedback Engine
//!
//! Maps a validated [`StudentRecord`] and its [`Criteria`] to a [`FeedbackResult`].
//!
//! The engine is stateless apart from its [`Clock`], so one instance can be cloned freely and
//! shared across requests. Generation is deterministic for a given clock: classification,
//! template rendering, and both recommendation lists depend only on the record.

use crate::clock::{Clock, SystemClock};
use crate::error::FeedbackError;
use crate::intake;
use crate::level::PerformanceLevel;
use crate::recommendations::{
    areas_text, detailed_recommendations, generate_recommendations, next_steps,
};
use crate::template::{Bindings, Slot};
use crate::types::{Criteria, FeedbackResult, StudentRecord};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct FeedbackEngine {
    clock: Arc<dyn Clock>,
}

impl Default for FeedbackEngine {
    fn default() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl FeedbackEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
        }
    }

    /// Generates feedback for a record that has already been validated and sanitized.
    ///
    /// The criteria are accepted but do not influence the result; in particular a custom rubric
    /// never changes the performance level.
    ///
    /// # Errors
    /// Only [`FeedbackError::UnboundSlot`], which cannot happen with the built-in templates.
    pub fn generate(
        &self,
        record: &StudentRecord,
        criteria: &Criteria,
    ) -> Result<FeedbackResult, FeedbackError> {
        let level = PerformanceLevel::classify(record.performance);

        let bindings = Bindings::new()
            .with(Slot::Student, record.name.as_str())
            .with(Slot::Topic, record.subject.as_str())
            .with(Slot::Areas, areas_text(&record.weak_areas))
            .with(
                Slot::Recommendations,
                generate_recommendations(&record.weak_areas, &record.strengths),
            );
        let feedback = level.template().render(&bindings)?;

        debug!(
            student = %record.name,
            subject = %record.subject,
            performance = record.performance,
            level = %level,
            weight = ?criteria.weight,
            custom_rubric = criteria.rubric.is_some(),
            "Generated feedback"
        );

        Ok(FeedbackResult {
            student_name: record.name.clone(),
            subject: record.subject.clone(),
            performance_level: level,
            feedback,
            recommendations: detailed_recommendations(record),
            next_steps: next_steps(level, &record.weak_areas),
            timestamp: self.clock.now(),
        })
    }

    /// Validates, sanitizes and converts raw JSON input, then generates feedback.
    ///
    /// # Errors
    /// - [`FeedbackError::Validation`] with every violation if the input is rejected.
    /// - [`FeedbackError::Conversion`] or [`FeedbackError::UnboundSlot`] on internal failure.
    pub fn process(
        &self,
        student: &Value,
        criteria: Option<&Value>,
    ) -> Result<FeedbackResult, FeedbackError> {
        let (record, criteria) = intake::prepare(student, criteria)?;
        self.generate(&record, &criteria)
    }
}
