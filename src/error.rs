//! Error type for the checked access variants.
//!
//! The default `ByteView` operations never fail: out-of-range indices and
//! over-long windows are clamped into valid bounds on the hot path. The
//! `try_*` accessors are the strict counterparts for callers that want an
//! error instead of a clamp, and this is the type they report.

use thiserror::Error;

/// Errors reported by the checked (`try_*`) accessors on [`ByteView`].
///
/// [`ByteView`]: crate::ByteView
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Index past the end of the view window.
    #[error("index {index} out of bounds for view of length {len}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The window length at the time of the access.
        len: usize,
    },

    /// Requested sub-window does not fit inside the current window.
    #[error("window {start}..{end} out of bounds for view of length {len}")]
    WindowOutOfBounds {
        /// Start of the requested range, relative to the window.
        start: usize,
        /// End of the requested range, relative to the window.
        end: usize,
        /// The window length at the time of the request.
        len: usize,
    },
}

/// Result type for the checked accessors.
pub type Result<T> = std::result::Result<T, Error>;
