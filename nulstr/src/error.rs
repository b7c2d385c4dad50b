use alloc::vec::Vec;
use thiserror::Error;

/// Error types for nulstr conversions
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum NulstrError {
    /// The allocator could not provide the requested storage
    #[error("Out of memory: failed to reserve {requested} more elements")]
    OutOfMemory {
        /// Number of additional elements that could not be reserved
        requested: usize,
    },
}

/// Reserves exactly `additional` more slots in `v`, mapping allocator failure
/// to `NulstrError::OutOfMemory`.
pub(crate) fn try_reserve_exact<T>(v: &mut Vec<T>, additional: usize) -> Result<(), NulstrError> {
    v.try_reserve_exact(additional).map_err(|_| {
        log::debug!("reservation of {additional} slots failed");
        NulstrError::OutOfMemory {
            requested: additional,
        }
    })
}

/// Amortized variant of [`try_reserve_exact`], for buffers grown element by element.
pub(crate) fn try_reserve<T>(v: &mut Vec<T>, additional: usize) -> Result<(), NulstrError> {
    v.try_reserve(additional).map_err(|_| {
        log::debug!("growth by {additional} slots failed");
        NulstrError::OutOfMemory {
            requested: additional,
        }
    })
}

/// Duplicates `bytes` into a freshly allocated, exactly sized owned string.
pub(crate) fn try_dup(bytes: &[u8]) -> Result<Vec<u8>, NulstrError> {
    let mut owned = Vec::new();
    try_reserve_exact(&mut owned, bytes.len())?;
    owned.extend_from_slice(bytes);
    Ok(owned)
}
