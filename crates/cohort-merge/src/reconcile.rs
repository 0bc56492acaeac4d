//! One-pass reconciliation orchestration.
//!
//! [`reconcile`] runs the whole flow for one entity type: pairing, per-pair
//! policy, validated action construction, statistics. The first invariant
//! violation aborts the entire pass before any action escapes, so the
//! executor never receives a partially valid sequence.
//!
//! Recursion across composite entities stays outside: the caller runs one
//! pass per level and threads the resolved parent target identity into the
//! child-level policy for re-parenting.

use chrono::{DateTime, Utc};
use cohort_core::Identified;
use tracing::{info, warn};

use crate::action::{ActionType, InvalidMergeAction, MergeAction};
use crate::pair::MergePair;
use crate::pairing::pair_records;
use crate::statistics::PassStatistics;

/// The caller's policy verdict for one classified pair.
///
/// Policy (which action a pair deserves) is domain business logic and lives
/// with the caller; the engine only validates the verdict against the pair
/// shape when constructing the action.
#[derive(Debug, Clone)]
pub struct Decision<P> {
    action: ActionType,
    plan: Option<P>,
}

impl<P> Decision<P> {
    /// A verdict from raw parts, for callers composing policy dynamically.
    #[must_use]
    pub fn new(action: ActionType, plan: Option<P>) -> Self {
        Self { action, plan }
    }

    /// Leave the pair untouched.
    #[must_use]
    pub fn no_action() -> Self {
        Self::new(ActionType::NoAction, None)
    }

    /// Re-parent the source record.
    #[must_use]
    pub fn move_source() -> Self {
        Self::new(ActionType::MoveSource, None)
    }

    /// Delete the source record.
    #[must_use]
    pub fn delete_source() -> Self {
        Self::new(ActionType::DeleteSource, None)
    }

    /// Merge both sides according to an externally built plan.
    #[must_use]
    pub fn merge(plan: P) -> Self {
        Self::new(ActionType::Merge, Some(plan))
    }

    /// The action this verdict requests.
    #[must_use]
    pub fn action(&self) -> ActionType {
        self.action
    }

    fn into_parts(self) -> (ActionType, Option<P>) {
        (self.action, self.plan)
    }
}

/// The result of one successful reconciliation pass.
#[derive(Debug)]
pub struct PassOutcome<'a, T, P> {
    /// Validated actions, in pairing order (sources first, then leftover
    /// targets). The executor applies them in sequence under a single
    /// persistence transaction.
    pub actions: Vec<MergeAction<&'a T, P>>,
    /// Aggregated counts for the pass.
    pub statistics: PassStatistics,
    /// When the pass started.
    pub started_at: DateTime<Utc>,
    /// When the pass completed.
    pub completed_at: DateTime<Utc>,
}

/// Run one reconciliation pass for one entity type.
///
/// Pairs `sources` against `targets` under `equivalent` (see
/// [`pair_records`] for the matching semantics), asks `decide` for a verdict
/// on every classified pair, and constructs the validated action sequence.
///
/// The pass is deterministic: identical inputs produce an identical action
/// sequence, and the engine mutates nothing but its own transient state.
///
/// `decide` is `FnMut` so policies can accumulate context across pairs,
/// e.g. collecting the child records that a later child-level pass must
/// re-parent.
///
/// # Errors
///
/// Returns the first [`InvalidMergeAction`] produced by a verdict that
/// violates the pair-shape invariants. On error no actions are surfaced at
/// all; the pass must be corrected and re-run as a whole.
pub fn reconcile<'a, T, P, E, D>(
    sources: &'a [T],
    targets: &'a [T],
    equivalent: E,
    mut decide: D,
) -> Result<PassOutcome<'a, T, P>, InvalidMergeAction>
where
    T: Identified,
    E: Fn(&T, &T) -> bool,
    D: FnMut(&MergePair<&'a T>) -> Decision<P>,
{
    let started_at = Utc::now();
    let mut statistics = PassStatistics::new(sources.len(), targets.len());

    let pairs = pair_records(sources, targets, equivalent);

    let mut actions = Vec::with_capacity(pairs.len());
    for pair in pairs {
        statistics.record_pair(pair.kind());

        let (action, plan) = decide(&pair).into_parts();
        let action = MergeAction::new(pair, action, plan).map_err(|err| {
            warn!(error = %err, "reconciliation pass aborted");
            err
        })?;

        statistics.record_action(action.action());
        actions.push(action);
    }

    let completed_at = Utc::now();
    info!(
        sources = statistics.sources_total,
        targets = statistics.targets_total,
        actions = actions.len(),
        "reconciliation pass planned"
    );

    Ok(PassOutcome {
        actions,
        statistics,
        started_at,
        completed_at,
    })
}
