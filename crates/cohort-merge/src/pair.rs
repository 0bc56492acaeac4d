//! Merge pairs and their classification.
//!
//! A [`MergePair`] associates at most one source record with at most one
//! target record. The fields are private and the only constructors are
//! [`MergePair::source_only`], [`MergePair::target_only`] and
//! [`MergePair::matched`], so the shape with neither side present cannot be
//! represented. [`MergePair::kind`] derives the classification purely from
//! presence; it is never stored and can never disagree with the references.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a merge pair, derived from which sides are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairKind {
    /// Only the source record is present.
    SourceOnly,
    /// Only the target record is present.
    TargetOnly,
    /// Both records are present.
    Both,
}

impl PairKind {
    /// Convert to string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PairKind::SourceOnly => "source_only",
            PairKind::TargetOnly => "target_only",
            PairKind::Both => "both",
        }
    }
}

impl fmt::Display for PairKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PairKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "source_only" => Ok(PairKind::SourceOnly),
            "target_only" => Ok(PairKind::TargetOnly),
            "both" => Ok(PairKind::Both),
            _ => Err(format!("Unknown pair kind: {s}")),
        }
    }
}

/// An ownership-free association of a source record and a target record.
///
/// At least one side is always present. The pair holds whatever reference
/// type the caller supplies (typically `MergePair<&T>` for one pass over
/// borrowed collections) and never mutates the underlying records.
///
/// Serialize is derived for audit logging; Deserialize deliberately is not,
/// so an ill-formed pair cannot enter through serde.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergePair<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<T>,
}

impl<T> MergePair<T> {
    /// Create a pair carrying only a source record.
    #[must_use]
    pub fn source_only(source: T) -> Self {
        Self {
            source: Some(source),
            target: None,
        }
    }

    /// Create a pair carrying only a target record.
    #[must_use]
    pub fn target_only(target: T) -> Self {
        Self {
            source: None,
            target: Some(target),
        }
    }

    /// Create a pair carrying both sides.
    #[must_use]
    pub fn matched(source: T, target: T) -> Self {
        Self {
            source: Some(source),
            target: Some(target),
        }
    }

    /// The source side, if present.
    pub fn source(&self) -> Option<&T> {
        self.source.as_ref()
    }

    /// The target side, if present.
    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    /// Classify the pair from the presence of each side.
    #[must_use]
    pub fn kind(&self) -> PairKind {
        match (&self.source, &self.target) {
            (Some(_), None) => PairKind::SourceOnly,
            (None, Some(_)) => PairKind::TargetOnly,
            (Some(_), Some(_)) => PairKind::Both,
            // Unrepresentable: every constructor sets at least one side.
            (None, None) => unreachable!("merge pair constructed without either side"),
        }
    }

    /// Decompose into the optional sides.
    #[must_use]
    pub fn into_parts(self) -> (Option<T>, Option<T>) {
        (self.source, self.target)
    }
}
