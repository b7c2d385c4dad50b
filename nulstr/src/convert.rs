use alloc::vec::Vec;

use crate::error::{try_dup, try_reserve, try_reserve_exact, NulstrError};
use crate::iter::{count_segments, BoundedSegments, NulstrIter};
use crate::strv::Strv;

/// Owned nulstr produced by [`make_nulstr`].
///
/// The physical buffer holds one NUL byte more than the logical size, so the
/// same buffer can be consumed with a length ([`parse_nulstr`]) or without
/// one ([`split_nulstr`], [`NulstrIter`]). An empty nulstr is two NUL bytes
/// with a logical size of zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nulstr {
    buffer: Vec<u8>,
    size: usize,
}

impl Nulstr {
    /// Logical size: the bytes of all elements, each followed by its NUL.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The logical bytes, without the extra trailing NUL.
    #[must_use]
    #[allow(clippy::indexing_slicing)] // size < buffer.len() by construction
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.size]
    }

    /// The whole physical buffer, including the extra trailing NUL.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buffer
    }

    /// Iterates the elements the way an unbounded consumer sees them.
    #[must_use]
    pub fn iter(&self) -> NulstrIter<'_> {
        NulstrIter::new(&self.buffer)
    }

    /// Parses the logical bytes back into a string vector.
    ///
    /// # Errors
    ///
    /// Returns `NulstrError::OutOfMemory` if allocation fails.
    pub fn to_strv(&self) -> Result<Strv, NulstrError> {
        parse_nulstr(self.as_bytes())
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.buffer
    }

    /// Splits into the physical buffer and the logical size.
    #[must_use]
    pub fn into_raw_parts(self) -> (Vec<u8>, usize) {
        (self.buffer, self.size)
    }
}

impl AsRef<[u8]> for Nulstr {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<'a> IntoIterator for &'a Nulstr {
    type Item = &'a [u8];
    type IntoIter = NulstrIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Parses a bounded nulstr into a string vector.
///
/// The result has one element per NUL byte in `s`, plus one for an
/// unterminated tail. Embedded empty strings are preserved. An empty `s`
/// yields an empty vector.
///
/// ```
/// # use nulstr::parse_nulstr;
/// let strv = parse_nulstr(b"a\0\0b").unwrap();
/// assert_eq!(strv, [&b"a"[..], b"", b"b"]);
/// ```
///
/// # Errors
///
/// Returns `NulstrError::OutOfMemory` if allocation fails. Elements copied
/// so far are released.
pub fn parse_nulstr(s: &[u8]) -> Result<Strv, NulstrError> {
    parse_nulstr_full(s, false)
}

/// Like [`parse_nulstr`], but with `drop_trailing_nuls` set, trailing NUL
/// bytes are stripped first, so no trailing empty elements are produced.
///
/// # Errors
///
/// Returns `NulstrError::OutOfMemory` if allocation fails.
pub fn parse_nulstr_full(s: &[u8], drop_trailing_nuls: bool) -> Result<Strv, NulstrError> {
    let s = if drop_trailing_nuls {
        let end = s.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        s.get(..end).unwrap_or_default()
    } else {
        s
    };

    if s.is_empty() {
        log::trace!("parse_nulstr: empty input");
        return Ok(Strv::new());
    }

    let count = count_segments(s);
    let mut strv = Strv::try_with_capacity(count)?;
    for segment in BoundedSegments::new(s) {
        strv.push_reserved(try_dup(segment)?);
    }
    debug_assert_eq!(strv.len(), count);

    log::trace!("parse_nulstr: {} bytes -> {} elements", s.len(), count);
    Ok(strv)
}

/// Parses an unbounded nulstr into a string vector.
///
/// Parsing stops at the first empty string, which marks the end of the
/// nulstr, so embedded empty strings cannot be represented. Use
/// [`parse_nulstr`] when the length is known.
///
/// ```
/// # use nulstr::split_nulstr;
/// let strv = split_nulstr(b"a\0\0b\0\0").unwrap();
/// assert_eq!(strv, [b"a"]);
/// ```
///
/// # Errors
///
/// Returns `NulstrError::OutOfMemory` if allocation fails.
pub fn split_nulstr(s: &[u8]) -> Result<Strv, NulstrError> {
    let mut strv = Strv::new();
    for segment in NulstrIter::new(s) {
        strv.try_extend(segment)?;
    }

    log::trace!("split_nulstr: {} elements", strv.len());
    Ok(strv)
}

/// Serializes a string vector into a nulstr.
///
/// Each element is written followed by a NUL. One extra NUL is appended but
/// not counted in [`Nulstr::len`]. `None` and an empty slice both produce
/// two NUL bytes with a logical size of zero.
///
/// ```
/// # use nulstr::make_nulstr;
/// let nulstr = make_nulstr(Some(&["foo", "bar"][..])).unwrap();
/// assert_eq!(nulstr.as_bytes(), b"foo\0bar\0");
/// assert_eq!(nulstr.as_bytes_with_nul(), b"foo\0bar\0\0");
/// ```
///
/// # Errors
///
/// Returns `NulstrError::OutOfMemory` if the buffer cannot be grown. The
/// partial buffer is released.
pub fn make_nulstr<S: AsRef<[u8]>>(l: Option<&[S]>) -> Result<Nulstr, NulstrError> {
    let mut buffer = Vec::new();

    for item in l.unwrap_or_default() {
        let item = item.as_ref();
        // Room for the element, its NUL and the final extra NUL
        try_reserve(&mut buffer, item.len() + 2)?;
        buffer.extend_from_slice(item);
        buffer.push(0);
    }

    let size = buffer.len();
    if buffer.is_empty() {
        try_reserve_exact(&mut buffer, 2)?;
        buffer.extend_from_slice(&[0, 0]);
    } else {
        buffer.push(0);
    }

    log::trace!("make_nulstr: size {size}, buffer {}", buffer.len());
    Ok(Nulstr { buffer, size })
}

/// Finds the first element of an unbounded nulstr equal to `needle`.
///
/// The returned slice borrows from `nulstr`. A `None` nulstr never matches.
///
/// ```
/// # use nulstr::nulstr_get;
/// let nulstr: &[u8] = b"foo\0bar\0baz\0\0";
/// assert_eq!(nulstr_get(Some(nulstr), b"bar"), Some(&b"bar"[..]));
/// assert_eq!(nulstr_get(Some(nulstr), b"qux"), None);
/// assert_eq!(nulstr_get(None, b"bar"), None);
/// ```
#[must_use]
pub fn nulstr_get<'a>(nulstr: Option<&'a [u8]>, needle: &[u8]) -> Option<&'a [u8]> {
    NulstrIter::new(nulstr?).find(|&segment| segment == needle)
}

#[must_use]
pub fn nulstr_contains(nulstr: Option<&[u8]>, needle: &[u8]) -> bool {
    nulstr_get(nulstr, needle).is_some()
}
