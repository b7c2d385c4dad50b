#![no_std]

//! `nulstr`: conversions between NUL-separated string buffers and string vectors.
//!
//! A *nulstr* is a flat byte buffer holding NUL-terminated strings back to
//! back. A *strv* ([`Strv`]) is an ordered vector of owned strings. This crate
//! converts between the two without validating the encoding: arbitrary bytes
//! pass through unchanged.
//!
//! # Bounded and Unbounded Nulstrs
//!
//! A nulstr is read in one of two ways:
//!
//! - **Bounded**: the length is known. Every NUL terminates one element, and
//!   an unterminated tail is one more element. Empty elements are allowed.
//!   See [`parse_nulstr`] and [`BoundedSegments`].
//! - **Unbounded**: the length is not known. The first empty element marks the
//!   end, so two consecutive NUL bytes end the nulstr. Empty elements cannot
//!   be represented. See [`split_nulstr`], [`nulstr_get`] and [`NulstrIter`].
//!
//! ```
//! # use nulstr::{parse_nulstr, split_nulstr};
//! let data = b"a\0\0b\0\0";
//!
//! assert_eq!(parse_nulstr(data).unwrap(), [&b"a"[..], b"", b"b", b""]);
//! assert_eq!(split_nulstr(data).unwrap(), [b"a"]);
//! ```
//!
//! # Serialization
//!
//! [`make_nulstr`] produces a [`Nulstr`] readable both ways: the logical bytes
//! ([`Nulstr::as_bytes`]) feed a bounded parse, and the physical buffer
//! ([`Nulstr::as_bytes_with_nul`]) carries one extra NUL for unbounded
//! readers.
//!
//! ```
//! # use nulstr::{make_nulstr, nulstr_get, parse_nulstr};
//! let nulstr = make_nulstr(Some(&["foo", "bar", "baz"][..])).unwrap();
//!
//! assert_eq!(nulstr.len(), 12);
//! assert_eq!(parse_nulstr(nulstr.as_bytes()).unwrap(), ["foo", "bar", "baz"]);
//! assert_eq!(nulstr_get(Some(nulstr.as_bytes_with_nul()), b"bar"), Some(&b"bar"[..]));
//!
//! // An absent or empty vector still ends in two NUL bytes
//! let empty = make_nulstr::<&str>(None).unwrap();
//! assert_eq!(empty.len(), 0);
//! assert_eq!(empty.as_bytes_with_nul(), b"\0\0");
//! ```
//!
//! # Errors
//!
//! The only failure is allocation exhaustion, reported as
//! [`NulstrError::OutOfMemory`]. All storage is reserved with the fallible
//! `try_reserve` family, and partially built results are dropped before the
//! error is returned.
//!
//! ## `no_std` Compatibility
//!
//! The crate uses only `core` and `alloc`. Enable the optional `std` feature
//! to build `thiserror` with `std` support:
//! ```toml
//! [dependencies]
//! nulstr = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod convert;
mod error;
mod iter;
mod strv;

// Re-export public types and functions
pub use convert::{
    make_nulstr, nulstr_contains, nulstr_get, parse_nulstr, parse_nulstr_full, split_nulstr,
    Nulstr,
};
pub use error::NulstrError;
pub use iter::{count_segments, BoundedSegments, NulstrIter, NulstrPairIter, StrvIter};
pub use strv::Strv;
