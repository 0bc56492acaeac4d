//! Record Capability Traits
//!
//! The merge reconciliation engine makes exactly one structural assumption
//! about the records it pairs: each carries a stable identity. This module
//! provides that capability as a trait rather than a base type, so any
//! domain record (account, study, dependent child record) can participate
//! without inheritance-style coupling.
//!
//! # Example
//!
//! ```
//! use cohort_core::{Identified, RecordId};
//!
//! struct StudyRecord {
//!     id: RecordId,
//!     protocol: String,
//! }
//!
//! impl Identified for StudyRecord {
//!     fn record_id(&self) -> RecordId {
//!         self.id
//!     }
//! }
//!
//! fn same_record<T: Identified>(a: &T, b: &T) -> bool {
//!     a.record_id() == b.record_id()
//! }
//! ```

use crate::ids::RecordId;

/// Trait for domain records with a stable identity.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `&dyn Identified` or
/// `Box<dyn Identified>`.
pub trait Identified {
    /// Returns the stable identifier of this record.
    ///
    /// Returns an owned `RecordId` (which is `Copy`) so callers can use the
    /// value without lifetime concerns.
    fn record_id(&self) -> RecordId;
}

impl<T: Identified + ?Sized> Identified for &T {
    fn record_id(&self) -> RecordId {
        (**self).record_id()
    }
}
