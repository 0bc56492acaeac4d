//! Pass statistics.
//!
//! Aggregated counts for one reconciliation pass, serializable so the
//! embedding service can persist or audit-log a snapshot. Breakdown maps
//! are string-keyed for that reason.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::action::ActionType;
use crate::pair::PairKind;

/// Statistics for a single reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PassStatistics {
    /// Number of source records supplied.
    #[serde(default)]
    pub sources_total: usize,
    /// Number of target records supplied.
    #[serde(default)]
    pub targets_total: usize,
    /// Number of pairs emitted.
    #[serde(default)]
    pub pairs_total: usize,
    /// Pairs broken down by kind.
    #[serde(default)]
    pub pairs_by_kind: HashMap<String, usize>,
    /// Planned actions broken down by type.
    #[serde(default)]
    pub actions_by_type: HashMap<String, usize>,
}

impl PassStatistics {
    /// Create statistics for a pass over the given collection sizes.
    #[must_use]
    pub fn new(sources_total: usize, targets_total: usize) -> Self {
        Self {
            sources_total,
            targets_total,
            ..Self::default()
        }
    }

    /// Record one emitted pair.
    pub fn record_pair(&mut self, kind: PairKind) {
        self.pairs_total += 1;
        *self.pairs_by_kind.entry(kind.to_string()).or_insert(0) += 1;
    }

    /// Record one planned action.
    pub fn record_action(&mut self, action: ActionType) {
        *self.actions_by_type.entry(action.to_string()).or_insert(0) += 1;
    }

    /// Count of pairs with a specific kind.
    #[must_use]
    pub fn pair_count(&self, kind: PairKind) -> usize {
        self.pairs_by_kind.get(kind.as_str()).copied().unwrap_or(0)
    }

    /// Count of planned actions of a specific type.
    #[must_use]
    pub fn action_count(&self, action: ActionType) -> usize {
        self.actions_by_type
            .get(action.as_str())
            .copied()
            .unwrap_or(0)
    }

    /// Merge with another statistics instance.
    ///
    /// Used by orchestrators that run one pass per level of a composite
    /// entity and want a single roll-up across parent and child passes.
    pub fn merge(&mut self, other: &PassStatistics) {
        self.sources_total += other.sources_total;
        self.targets_total += other.targets_total;
        self.pairs_total += other.pairs_total;

        for (key, value) in &other.pairs_by_kind {
            *self.pairs_by_kind.entry(key.clone()).or_insert(0) += value;
        }

        for (key, value) in &other.actions_by_type {
            *self.actions_by_type.entry(key.clone()).or_insert(0) += value;
        }
    }
}
