//! # Peak Records
//!
//! Curated peaks as they arrive from the manual and automated workflows.
//!
//! A [`PeakRecord`] is validated once at construction (finite `rt` and m/z,
//! non-negative intensity) and is immutable afterwards. Records can be built
//! programmatically with [`PeakRecordBuilder`] or loaded from CSV/TSV exports
//! with [`PeakTable`].
//!
//! ```rust
//! use mzcompare::peak::PeakRecordBuilder;
//!
//! let peak = PeakRecordBuilder::manual()
//!     .sample("testsample_1")
//!     .scope("1", "glutamate")
//!     .rt(1.0)
//!     .mz(146.0448)
//!     .intensity(1.0e5)
//!     .build()?;
//!
//! assert_eq!(peak.identifier(), "glutamate@testsample_1");
//! # Ok::<(), mzcompare::peak::PeakError>(())
//! ```

mod error;
mod loader;
mod record;


pub use error::PeakError;
pub use loader::{PeakTable, RejectedRow};
pub use record::{PeakRecord, PeakRecordBuilder, ScopeKey, Source};
