//! 128-bit identifier assembled from hexadecimal field groups.
//!
//! The identifier follows the RFC 4122 field layout: a 32-bit group, two
//! 16-bit groups, and eight trailing bytes, printed as dashed lowercase
//! 8-4-4-4-12 hex. Parsing from a view lives in [`ByteView::parse_uuid`].
//!
//! [`ByteView::parse_uuid`]: crate::ByteView::parse_uuid

use std::fmt;

use crate::hex::push_hex_lower;

/// A 128-bit identifier in RFC 4122 field layout.
///
/// # Examples
///
/// ```
/// use utf8span::Uuid;
///
/// let id = Uuid::from_fields(0x00112233, 0x4455, 0x6677, [0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);
/// assert_eq!(id.to_string(), "00112233-4455-6677-8899-aabbccddeeff");
/// assert_eq!(id.simple(), "00112233445566778899aabbccddeeff");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// The all-zero identifier.
    #[inline]
    pub const fn nil() -> Self {
        Self([0u8; 16])
    }

    /// Build an identifier from its five field groups.
    ///
    /// `a`, `b`, and `c` are the first three dashed groups; `d` holds the
    /// remaining eight bytes (the 4-digit and 12-digit groups).
    #[inline]
    pub fn from_fields(a: u32, b: u16, c: u16, d: [u8; 8]) -> Self {
        let mut out = [0u8; 16];
        out[..4].copy_from_slice(&a.to_be_bytes());
        out[4..6].copy_from_slice(&b.to_be_bytes());
        out[6..8].copy_from_slice(&c.to_be_bytes());
        out[8..].copy_from_slice(&d);
        Self(out)
    }

    /// Build an identifier from its raw big-endian bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// The raw big-endian bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Whether this is the all-zero identifier.
    #[inline]
    pub fn is_nil(&self) -> bool {
        self.0 == [0u8; 16]
    }

    /// Undashed lowercase 32-digit form.
    pub fn simple(&self) -> String {
        let mut out = String::with_capacity(32);
        push_hex_lower(&mut out, &self.0);
        out
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(36);
        push_hex_lower(&mut out, &self.0[0..4]);
        out.push('-');
        push_hex_lower(&mut out, &self.0[4..6]);
        out.push('-');
        push_hex_lower(&mut out, &self.0[6..8]);
        out.push('-');
        push_hex_lower(&mut out, &self.0[8..10]);
        out.push('-');
        push_hex_lower(&mut out, &self.0[10..16]);
        f.write_str(&out)
    }
}
