//! # Feedback Library
//!
//! This crate provides the core logic for turning a student's performance data into personalized
//! feedback. It validates and sanitizes raw JSON input, classifies the performance score, renders
//! the level's feedback template, and assembles recommendations and next steps.
//!
//! ## Key Concepts
//! - **Validation**: Raw-input checks that report every violation in one pass ([`validation`]).
//! - **Performance levels**: A fixed three-tier classification of a 0-100 score ([`level`]).
//! - **Templates**: One slot-based template per level, rendered without string find/replace ([`template`]).
//! - **Engine**: The stateless transformation producing a [`FeedbackResult`] ([`engine`]).
//!
//! ## Example
//!
//! ```rust
//! use feedback::{FeedbackEngine, PerformanceLevel};
//! use serde_json::json;
//!
//! let student = json!({
//!     "name": "Jane Smith",
//!     "performance": 75,
//!     "subject": "Science",
//!     "weakAreas": ["Lab procedures"],
//!     "strengths": ["Theory understanding"]
//! });
//! let result = FeedbackEngine::new().process(&student, Some(&json!({}))).unwrap();
//! assert_eq!(result.performance_level, PerformanceLevel::Good);
//! assert!(result.feedback.starts_with("Good progress!"));
//! ```

pub mod clock;
pub mod engine;
pub mod error;
pub mod intake;
pub mod level;
pub mod recommendations;
pub mod template;
pub mod types;
pub mod validation;

pub use engine::FeedbackEngine;
pub use error::FeedbackError;
pub use level::PerformanceLevel;
pub use recommendations::generate_recommendations;
pub use types::{Criteria, FeedbackResult, Rubric, StudentRecord};
