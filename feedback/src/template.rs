//! # Feedback Templates
//!
//! Each [`PerformanceLevel`] owns exactly one [`Template`]. A template is a static list of
//! [`Segment`]s: literal text interleaved with named [`Slot`]s. Rendering walks the segments and
//! looks every slot up in a set of [`Bindings`]; a slot without a binding is an error, so a rendered
//! string can never contain an unresolved `{placeholder}`.
//!
//! ```rust
//! use feedback::level::PerformanceLevel;
//! use feedback::template::{Bindings, Slot};
//!
//! let bindings = Bindings::new()
//!     .with(Slot::Student, "Ada")
//!     .with(Slot::Topic, "Algebra");
//! let text = PerformanceLevel::Excellent.template().render(&bindings).unwrap();
//! assert_eq!(
//!     text,
//!     "Outstanding work! Ada has demonstrated exceptional understanding of Algebra."
//! );
//! ```

use crate::error::FeedbackError;
use crate::level::PerformanceLevel;
use serde::Serialize;
use std::collections::HashMap;

/// A named placeholder inside a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Slot {
    Student,
    Topic,
    Areas,
    Recommendations,
}

impl Slot {
    /// The token name used inside braces, e.g. `student` for `{student}`.
    pub fn name(&self) -> &'static str {
        match self {
            Slot::Student => "student",
            Slot::Topic => "topic",
            Slot::Areas => "areas",
            Slot::Recommendations => "recommendations",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Literal(&'static str),
    Placeholder(Slot),
}

use Segment::{Literal, Placeholder};

const EXCELLENT: &[Segment] = &[
    Literal("Outstanding work! "),
    Placeholder(Slot::Student),
    Literal(" has demonstrated exceptional understanding of "),
    Placeholder(Slot::Topic),
    Literal("."),
];

const GOOD: &[Segment] = &[
    Literal("Good progress! "),
    Placeholder(Slot::Student),
    Literal(" shows solid grasp of "),
    Placeholder(Slot::Topic),
    Literal(" with room for improvement in "),
    Placeholder(Slot::Areas),
    Literal("."),
];

const NEEDS_IMPROVEMENT: &[Segment] = &[
    Placeholder(Slot::Student),
    Literal(" needs additional support in "),
    Placeholder(Slot::Topic),
    Literal(". Consider focusing on "),
    Placeholder(Slot::Recommendations),
    Literal("."),
];

/// The closed set of feedback templates, one per performance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Excellent,
    Good,
    NeedsImprovement,
}

impl Template {
    pub fn for_level(level: PerformanceLevel) -> Self {
        match level {
            PerformanceLevel::Excellent => Template::Excellent,
            PerformanceLevel::Good => Template::Good,
            PerformanceLevel::NeedsImprovement => Template::NeedsImprovement,
        }
    }

    pub fn segments(&self) -> &'static [Segment] {
        match self {
            Template::Excellent => EXCELLENT,
            Template::Good => GOOD,
            Template::NeedsImprovement => NEEDS_IMPROVEMENT,
        }
    }

    /// Slots referenced by this template, in order of appearance.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.segments().iter().filter_map(|segment| match segment {
            Placeholder(slot) => Some(*slot),
            Literal(_) => None,
        })
    }

    /// The template written out with `{slot}` tokens, as shown to API clients.
    pub fn source(&self) -> String {
        self.segments()
            .iter()
            .map(|segment| match segment {
                Literal(text) => (*text).to_string(),
                Placeholder(slot) => format!("{{{}}}", slot.name()),
            })
            .collect()
    }

    /// Substitutes every slot from `bindings`.
    ///
    /// # Errors
    /// [`FeedbackError::UnboundSlot`] if the template references a slot with no binding.
    /// Bindings the template does not reference are ignored.
    pub fn render(&self, bindings: &Bindings) -> Result<String, FeedbackError> {
        let mut out = String::new();
        for segment in self.segments() {
            match segment {
                Literal(text) => out.push_str(text),
                Placeholder(slot) => {
                    let value = bindings
                        .get(*slot)
                        .ok_or(FeedbackError::UnboundSlot { slot: *slot })?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

/// Rendered text for each slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings(HashMap<Slot, String>);

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, slot: Slot, value: impl Into<String>) -> Self {
        self.bind(slot, value);
        self
    }

    pub fn bind(&mut self, slot: Slot, value: impl Into<String>) {
        self.0.insert(slot, value.into());
    }

    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.0.get(&slot).map(String::as_str)
    }
}
