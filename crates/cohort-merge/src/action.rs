//! Validated merge actions.
//!
//! A [`MergeAction`] attaches the executor-facing decision to a
//! [`MergePair`]. Which action to take is business policy and belongs to the
//! caller; this module's sole responsibility is to validate and construct.
//! Every invariant is checked in [`MergeAction::new`] before a value
//! escapes, so an executor can never receive a structurally unsound action.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::pair::MergePair;

/// The unit of work an executor applies for one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Leave both sides untouched.
    NoAction,
    /// Re-parent the source record under the surviving entity.
    MoveSource,
    /// Unify both records according to the attached merge plan.
    Merge,
    /// Delete the source record.
    DeleteSource,
}

impl ActionType {
    /// Convert to string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::NoAction => "no_action",
            ActionType::MoveSource => "move_source",
            ActionType::Merge => "merge",
            ActionType::DeleteSource => "delete_source",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ActionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "no_action" => Ok(ActionType::NoAction),
            "move_source" => Ok(ActionType::MoveSource),
            "merge" => Ok(ActionType::Merge),
            "delete_source" => Ok(ActionType::DeleteSource),
            _ => Err(format!("Unknown action type: {s}")),
        }
    }
}

/// Invariant violation reported at action construction.
///
/// Always a caller error, never a runtime data condition: the pair shapes
/// that trigger it are known before construction is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMergeAction {
    /// The action needs the pair to carry a source record.
    #[error("{action} requires the pair to carry a source record")]
    MissingSource {
        /// The action that was attempted.
        action: ActionType,
    },

    /// Merge needs the pair to carry a target record.
    #[error("{action} requires the pair to carry a target record")]
    MissingTarget {
        /// The action that was attempted.
        action: ActionType,
    },

    /// Merge needs an externally built merge plan.
    #[error("merge requires a field-level merge plan")]
    MissingPlan,
}

/// The validated decision for one pair: the pair itself, the action to
/// apply, and (for [`ActionType::Merge`]) the opaque merge plan describing
/// field-level resolution.
///
/// Constructed once per pair via [`MergeAction::new`], immutable thereafter,
/// and consumed exactly once by the external executor. The plan payload is
/// opaque to the engine; only its presence is checked. A plan supplied
/// alongside a non-merge action is retained but carries no meaning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergeAction<T, P> {
    pair: MergePair<T>,
    action: ActionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    plan: Option<P>,
}

impl<T, P> MergeAction<T, P> {
    /// Validate and construct the action for a pair.
    ///
    /// # Errors
    ///
    /// - [`ActionType::MoveSource`] and [`ActionType::DeleteSource`] require
    ///   the pair's source side.
    /// - [`ActionType::Merge`] requires the source side, the target side,
    ///   and a plan.
    /// - [`ActionType::NoAction`] has no precondition.
    ///
    /// Failure is total: no partially constructed action is ever returned.
    pub fn new(
        pair: MergePair<T>,
        action: ActionType,
        plan: Option<P>,
    ) -> Result<Self, InvalidMergeAction> {
        match action {
            ActionType::NoAction => {}
            ActionType::MoveSource | ActionType::DeleteSource => {
                if pair.source().is_none() {
                    return Err(InvalidMergeAction::MissingSource { action });
                }
            }
            ActionType::Merge => {
                if pair.source().is_none() {
                    return Err(InvalidMergeAction::MissingSource { action });
                }
                if pair.target().is_none() {
                    return Err(InvalidMergeAction::MissingTarget { action });
                }
                if plan.is_none() {
                    return Err(InvalidMergeAction::MissingPlan);
                }
            }
        }

        Ok(Self { pair, action, plan })
    }

    /// The pair this action applies to.
    pub fn pair(&self) -> &MergePair<T> {
        &self.pair
    }

    /// The action the executor should apply.
    #[must_use]
    pub fn action(&self) -> ActionType {
        self.action
    }

    /// The merge plan, if one was attached.
    pub fn plan(&self) -> Option<&P> {
        self.plan.as_ref()
    }

    /// Decompose for the executor.
    #[must_use]
    pub fn into_parts(self) -> (MergePair<T>, ActionType, Option<P>) {
        (self.pair, self.action, self.plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pair::PairKind;

    type Plan = &'static str;

    #[test]
    fn test_no_action_has_no_precondition() {
        let action: MergeAction<_, Plan> =
            MergeAction::new(MergePair::target_only("t"), ActionType::NoAction, None).unwrap();
        assert_eq!(action.action(), ActionType::NoAction);
        assert_eq!(action.pair().kind(), PairKind::TargetOnly);
        assert!(action.plan().is_none());
    }

    #[test]
    fn test_move_source_requires_source() {
        let err = MergeAction::<_, Plan>::new(
            MergePair::target_only("t"),
            ActionType::MoveSource,
            None,
        )
        .unwrap_err();
        assert_eq!(
            err,
            InvalidMergeAction::MissingSource {
                action: ActionType::MoveSource
            }
        );

        let ok =
            MergeAction::<_, Plan>::new(MergePair::source_only("s"), ActionType::MoveSource, None);
        assert!(ok.is_ok());
    }

    #[test]
    fn test_delete_source_requires_source() {
        let err = MergeAction::<_, Plan>::new(
            MergePair::target_only("t"),
            ActionType::DeleteSource,
            None,
        )
        .unwrap_err();
        assert_eq!(
            err,
            InvalidMergeAction::MissingSource {
                action: ActionType::DeleteSource
            }
        );
    }

    #[test]
    fn test_merge_requires_plan() {
        let err = MergeAction::<_, Plan>::new(MergePair::matched("s", "t"), ActionType::Merge, None)
            .unwrap_err();
        assert_eq!(err, InvalidMergeAction::MissingPlan);

        let ok = MergeAction::new(
            MergePair::matched("s", "t"),
            ActionType::Merge,
            Some("prefer-target"),
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn test_merge_requires_both_sides_regardless_of_plan() {
        let err = MergeAction::new(
            MergePair::source_only("s"),
            ActionType::Merge,
            Some("prefer-target"),
        )
        .unwrap_err();
        assert_eq!(
            err,
            InvalidMergeAction::MissingTarget {
                action: ActionType::Merge
            }
        );

        let err = MergeAction::new(
            MergePair::target_only("t"),
            ActionType::Merge,
            Some("prefer-target"),
        )
        .unwrap_err();
        assert_eq!(
            err,
            InvalidMergeAction::MissingSource {
                action: ActionType::Merge
            }
        );
    }

    #[test]
    fn test_error_display() {
        let err = InvalidMergeAction::MissingSource {
            action: ActionType::MoveSource,
        };
        assert_eq!(
            err.to_string(),
            "move_source requires the pair to carry a source record"
        );

        assert_eq!(
            InvalidMergeAction::MissingPlan.to_string(),
            "merge requires a field-level merge plan"
        );
    }

    #[test]
    fn test_action_type_display_and_parse() {
        assert_eq!(ActionType::MoveSource.to_string(), "move_source");
        assert_eq!("merge".parse::<ActionType>().unwrap(), ActionType::Merge);
        assert_eq!(
            "DELETE_SOURCE".parse::<ActionType>().unwrap(),
            ActionType::DeleteSource
        );
        assert!("upsert".parse::<ActionType>().is_err());
    }

    #[test]
    fn test_serializes_for_audit_logging() {
        let action = MergeAction::new(
            MergePair::matched("s", "t"),
            ActionType::Merge,
            Some("prefer-target"),
        )
        .unwrap();

        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["action"], "merge");
        assert_eq!(json["pair"]["source"], "s");
        assert_eq!(json["pair"]["target"], "t");
        assert_eq!(json["plan"], "prefer-target");
    }

    #[test]
    fn test_plan_alongside_non_merge_is_retained() {
        let action = MergeAction::new(
            MergePair::source_only("s"),
            ActionType::DeleteSource,
            Some("ignored"),
        )
        .unwrap();
        assert_eq!(action.plan(), Some(&"ignored"));
    }

    #[test]
    fn test_into_parts() {
        let action = MergeAction::new(
            MergePair::matched("s", "t"),
            ActionType::Merge,
            Some("prefer-target"),
        )
        .unwrap();

        let (pair, action_type, plan) = action.into_parts();
        assert_eq!(pair.kind(), PairKind::Both);
        assert_eq!(action_type, ActionType::Merge);
        assert_eq!(plan, Some("prefer-target"));
    }
}
