//! utf8span - zero-copy windowed views over shared UTF-8 byte buffers
//!
//! This library provides [`ByteView`], a mutable offset + length window over
//! a shared, reference-counted byte buffer, built for high-frequency parsing
//! and manipulation without per-operation allocation or decoding.
//!
//! # Features
//!
//! - **Zero-copy aliasing**: sub-windows, split segments, and line records
//!   all reference the original buffer; cloning a view is O(1)
//! - **Never-fail hot path**: indexing, windowing, and trimming clamp
//!   out-of-range inputs instead of failing, with checked `try_*` variants
//!   for callers that want errors
//! - **Code-point awareness**: sub-windowing pulls a cut that lands inside a
//!   multi-byte UTF-8 sequence back to the preceding boundary
//! - **Direct-from-bytes parsing**: decimal integers and 128-bit
//!   identifiers parse straight from the window without intermediate text
//!
//! # Example - Splitting and trimming
//!
//! ```
//! use utf8span::ByteView;
//!
//! let mut view = ByteView::from("  name = value  ");
//! view.trim_self();
//! let fields = view.split(b'=', true);
//! assert_eq!(fields.len(), 2);
//! assert_eq!(fields[0].trim(), "name");
//! assert_eq!(fields[1].trim(), "value");
//! ```
//!
//! # Example - Consuming lines
//!
//! ```
//! use utf8span::ByteView;
//!
//! let mut view = ByteView::from("alpha\r\nbeta\ngamma");
//! let mut line = ByteView::empty();
//! let mut seen = Vec::new();
//! loop {
//!     let terminated = view.read_line(&mut line);
//!     seen.push(line.to_string());
//!     if !terminated {
//!         break;
//!     }
//! }
//! assert_eq!(seen, ["alpha", "beta", "gamma"]);
//! ```
//!
//! # Example - Parsing identifiers
//!
//! ```
//! use utf8span::ByteView;
//!
//! let view = ByteView::from(" 6ba7b810-9dad-11d1-80b4-00c04fd430c8 ");
//! let id = view.parse_uuid(true).unwrap();
//! assert_eq!(id.to_string(), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
//! ```

/// Error type and result alias for the checked accessors.
pub mod error;

/// Hexadecimal byte-range decoding and encoding helpers.
pub mod hex;

/// Byte-membership predicates for trim, search, and split.
mod set;

/// 128-bit identifier type.
mod uuid;

/// The core view type.
mod view;

// Operation families as inherent impls on `ByteView`.
mod parse;
mod search;
mod split;
mod trim;

pub use error::{Error, Result};
pub use set::ByteSet;
pub use uuid::Uuid;
pub use view::ByteView;
