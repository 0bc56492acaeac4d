//! Cohort Core Library
//!
//! Shared types and traits for the cohort portal backend.
//!
//! # Modules
//!
//! - [`ids`] - Strongly typed identifiers (`RecordId`)
//! - [`traits`] - Record capability traits (`Identified`)
//!
//! # Example
//!
//! ```
//! use cohort_core::{Identified, RecordId};
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
//! ```

pub mod ids;
pub mod traits;

// Re-export main types for convenient access
pub use ids::{ParseIdError, RecordId};
pub use traits::Identified;
