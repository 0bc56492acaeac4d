//! # Merge Reconciliation Engine
//!
//! Given two overlapping collections of domain records believed to represent
//! the same real-world entities (two accounts and their dependent child
//! records, two study records, ...), this crate determines how to unify them
//! safely: it matches the collections under a caller-supplied equivalence
//! predicate, classifies every resulting pair, and emits a validated action
//! plan whose construction-time invariants rule out data loss.
//!
//! Persistence, transaction execution, authorization and any HTTP surface
//! are external collaborators. Their whole contract with this crate is:
//! supply two ordered collections plus an equivalence function, consume an
//! ordered sequence of validated actions, and execute those actions under a
//! single transaction per pass.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       reconcile()                          │
//! ├────────────────────────────────────────────────────────────┤
//! │                                                            │
//! │  ┌────────────┐    ┌────────────┐    ┌─────────────────┐  │
//! │  │  Pairing   │───►│ Classifier │───►│ Action Planner  │  │
//! │  │  Engine    │    │ (PairKind) │    │ (MergeAction)   │  │
//! │  └────────────┘    └────────────┘    └─────────────────┘  │
//! │        │                  │                   │            │
//! │        ▼                  ▼                   ▼            │
//! │  ordered pairs      source_only /      validated ordered   │
//! │                     target_only /      action sequence     │
//! │                     both               + PassStatistics    │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Data flows one way: raw collections → pairs → classified pairs →
//! validated actions. No component holds state between calls; each pass is
//! a pure function of its inputs.
//!
//! ## Usage
//!
//! ```
//! use cohort_core::{Identified, RecordId};
//! use cohort_merge::{reconcile, ActionType, Decision, PairKind};
//!
//! struct Account {
//!     id: RecordId,
//!     email: String,
//! }
//!
//! impl Identified for Account {
//!     fn record_id(&self) -> RecordId {
//!         self.id
//!     }
//! }
//!
//! let sources = vec![Account {
//!     id: RecordId::new(),
//!     email: "lin@example.org".to_string(),
//! }];
//! let targets = vec![Account {
//!     id: RecordId::new(),
//!     email: "lin@example.org".to_string(),
//! }];
//!
//! let outcome = reconcile(
//!     &sources,
//!     &targets,
//!     |s: &Account, t: &Account| s.email == t.email,
//!     |pair| match pair.kind() {
//!         PairKind::Both => Decision::merge("prefer-target"),
//!         _ => Decision::no_action(),
//!     },
//! )?;
//!
//! assert_eq!(outcome.actions.len(), 1);
//! assert_eq!(outcome.actions[0].action(), ActionType::Merge);
//! # Ok::<(), cohort_merge::InvalidMergeAction>(())
//! ```
//!
//! For composite entities (a parent with dependent child collections) the
//! caller composes passes explicitly: run one pass over the parents, then
//! one pass per resolved parent pair over its child collections, threading
//! the parent's target identity into the child-level policy for
//! re-parenting. The engine itself never recurses through an object graph.

pub mod action;
pub mod pair;
pub mod pairing;
pub mod reconcile;
pub mod statistics;

// Re-export main types
pub use action::{ActionType, InvalidMergeAction, MergeAction};
pub use pair::{MergePair, PairKind};
pub use pairing::pair_records;
pub use reconcile::{reconcile, Decision, PassOutcome};
pub use statistics::PassStatistics;
