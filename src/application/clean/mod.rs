//! Clean Use Case
//!
//! Removes the outputs recorded in a render manifest. Only paths inside the
//! output root are touched; directories are left in place.

mod options;
mod result;
mod use_case;

pub use options::CleanOptions;
pub use result::{CleanResult, SkipReason, SkippedFile};
pub use use_case::CleanUseCase;
