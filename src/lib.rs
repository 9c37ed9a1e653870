//! Smart text truncation.
//!
//! Shortens a string to a byte budget while keeping the output readable:
//! the cut can be moved back to a word boundary, trailing punctuation can
//! be stripped, and a configurable suffix (default `"..."`) marks that
//! truncation happened. Strings short enough to fit are returned as-is.
//!
//! The budget counts bytes, matching the reference behavior, but cuts
//! never split a UTF-8 code point: slicing snaps back to the nearest
//! character boundary, so the result is always valid UTF-8 and never
//! longer than the budget.
//!
//! ```
//! use textrim::smart_trim;
//!
//! let text = "The quick brown fox jumps over the lazy dog";
//! assert_eq!(smart_trim(text, 20, None)?, "The quick brown...");
//! # Ok::<(), textrim::TrimError>(())
//! ```

mod error;
mod options;
mod trim;

pub use error::TrimError;
pub use options::{TrimOptions, TrimOverride};
pub use trim::{smart_trim, smart_trim_with};
