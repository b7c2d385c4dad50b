use alloc::vec::Vec;

/// Position of the first NUL byte in `data`, if any.
#[inline]
pub(crate) fn find_nul(data: &[u8]) -> Option<usize> {
    memchr::memchr(0, data)
}

/// Number of elements a bounded parse of `data` produces.
///
/// Every NUL byte terminates one segment. If the last byte is not NUL, the
/// unterminated tail counts as one more segment. An empty slice has no segments.
#[must_use]
pub fn count_segments(data: &[u8]) -> usize {
    let Some(&last) = data.last() else {
        return 0;
    };
    let nuls = memchr::memchr_iter(0, data).count();
    if last == 0 {
        nuls
    } else {
        nuls + 1
    }
}

/// Iterator over the segments of an unbounded nulstr.
///
/// Segments are yielded without their terminating NUL. Iteration stops at
/// the first empty segment, so embedded empty strings cannot be seen. When
/// the slice ends before a terminator, the remaining bytes form the last
/// segment.
///
/// This iterator implements `Clone`.
#[derive(Clone, Debug)]
pub struct NulstrIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> NulstrIter<'a> {
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl<'a> Iterator for NulstrIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.data.get(self.pos..)?;
        let segment = match find_nul(rest) {
            Some(0) => None,
            Some(end) => rest.get(..end),
            None if rest.is_empty() => None,
            None => Some(rest),
        };
        match segment {
            Some(segment) => {
                self.pos += segment.len() + 1;
                Some(segment)
            }
            None => {
                // Past the end: every further call returns None
                self.pos = self.data.len() + 1;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len().saturating_sub(self.pos);
        (0, Some(remaining.div_ceil(2)))
    }
}

impl core::iter::FusedIterator for NulstrIter<'_> {}

/// Iterator over consecutive segment pairs of an unbounded nulstr.
/// If there is an odd number of segments, the last segment is ignored.
///
/// This iterator implements `Clone`.
#[derive(Clone, Debug)]
pub struct NulstrPairIter<'a> {
    iter: NulstrIter<'a>,
}

impl<'a> NulstrPairIter<'a> {
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            iter: NulstrIter::new(data),
        }
    }
}

impl<'a> Iterator for NulstrPairIter<'a> {
    type Item = (&'a [u8], &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.iter.next()?;
        let second = self.iter.next()?;
        Some((first, second))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper.map(|u| u / 2))
    }
}

impl core::iter::FusedIterator for NulstrPairIter<'_> {}

/// Iterator over the segments of a bounded nulstr.
///
/// Unlike [`NulstrIter`], embedded empty segments are yielded. A trailing NUL
/// terminates the last segment rather than starting a new empty one. The
/// number of items equals [`count_segments`].
#[derive(Clone, Debug)]
pub struct BoundedSegments<'a> {
    data: &'a [u8],
    pos: usize,
    remaining: usize,
}

impl<'a> BoundedSegments<'a> {
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            remaining: count_segments(data),
        }
    }
}

impl<'a> Iterator for BoundedSegments<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let rest = self.data.get(self.pos..)?;
        let segment = match find_nul(rest) {
            Some(end) => {
                self.pos += end + 1;
                rest.get(..end)?
            }
            None => {
                self.pos = self.data.len();
                rest
            }
        };
        self.remaining -= 1;
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for BoundedSegments<'_> {}

impl core::iter::FusedIterator for BoundedSegments<'_> {}

/// Iterator over the elements of a [`Strv`](crate::Strv)
///
/// This iterator implements `Clone`.
#[derive(Clone, Debug)]
pub struct StrvIter<'a> {
    inner: core::slice::Iter<'a, Vec<u8>>,
}

impl<'a> StrvIter<'a> {
    pub(crate) fn new(items: &'a [Vec<u8>]) -> Self {
        Self {
            inner: items.iter(),
        }
    }
}

impl<'a> Iterator for StrvIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Vec::as_slice)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for StrvIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Vec::as_slice)
    }
}

impl ExactSizeIterator for StrvIter<'_> {}
