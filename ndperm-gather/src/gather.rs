//! Gather engine: `dst[i] = src[map.source_index(i)]` for every `i`.
//!
//! Each destination element is written exactly once and only after its source
//! read, so the index range can be split across workers arbitrarily.

use ndperm_layout::{IndexMap, NdPermError, Result};

#[cfg(feature = "parallel")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "parallel")]
use rayon::slice::ParallelSliceMut;

/// Minimum buffer length to justify multi-threaded execution.
pub const MIN_PARALLEL_LEN: usize = 1 << 15;

/// Destination elements handed to one rayon task.
pub const CHUNK_LEN: usize = 1 << 12;

/// Run-time knobs of the gather engine.
///
/// `parallel` has no effect unless the crate is built with the `parallel` feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatherOptions {
    pub parallel: bool,
    pub min_parallel_len: usize,
    pub chunk_len: usize,
}

impl Default for GatherOptions {
    fn default() -> Self {
        Self {
            parallel: cfg!(feature = "parallel"),
            min_parallel_len: MIN_PARALLEL_LEN,
            chunk_len: CHUNK_LEN,
        }
    }
}

fn env_usize(key: &str) -> Option<usize> {
    std::env::var(key).ok()?.trim().parse().ok()
}

impl GatherOptions {
    /// Always single-threaded.
    pub fn serial() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Defaults overridden by `NDPERM_MIN_PARALLEL_LEN`, `NDPERM_CHUNK_LEN`
    /// and `NDPERM_SERIAL=1`. Unparsable values are ignored.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Some(v) = env_usize("NDPERM_MIN_PARALLEL_LEN") {
            opts.min_parallel_len = v;
        }
        if let Some(v) = env_usize("NDPERM_CHUNK_LEN") {
            opts.chunk_len = v;
        }
        if matches!(std::env::var("NDPERM_SERIAL"), Ok(ref v) if v == "1") {
            opts.parallel = false;
        }
        opts
    }

    /// Whether a buffer of `len` elements is gathered on the rayon pool.
    pub fn runs_parallel(&self, len: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && len >= self.min_parallel_len
    }
}

/// Gather with [`GatherOptions::default`].
pub fn gather_into<T, M>(dst: &mut [T], src: &[T], map: &M) -> Result<()>
where
    T: Copy + Send + Sync,
    M: IndexMap + ?Sized,
{
    gather_into_with(dst, src, map, &GatherOptions::default())
}

/// Fill `dst[i]` with `src[map.source_index(i)]`.
///
/// # Errors
/// [`NdPermError::LengthMismatch`] when the buffers differ in length.
///
/// # Panics
/// If `map` yields an index outside `src`.
pub fn gather_into_with<T, M>(
    dst: &mut [T],
    src: &[T],
    map: &M,
    opts: &GatherOptions,
) -> Result<()>
where
    T: Copy + Send + Sync,
    M: IndexMap + ?Sized,
{
    if dst.len() != src.len() {
        return Err(NdPermError::LengthMismatch {
            expected: src.len(),
            actual: dst.len(),
        });
    }

    let parallel = opts.runs_parallel(dst.len());
    tracing::debug!(len = dst.len(), parallel, chunk = opts.chunk_len, "gather");

    #[cfg(feature = "parallel")]
    {
        if parallel {
            let chunk = opts.chunk_len.max(1);
            dst.par_chunks_mut(chunk)
                .enumerate()
                .for_each(|(c, out)| gather_range(out, src, map, c * chunk));
            return Ok(());
        }
    }

    gather_range(dst, src, map, 0);
    Ok(())
}

/// Serial kernel for destination positions `base..base + out.len()`.
#[inline]
fn gather_range<T: Copy, M: IndexMap + ?Sized>(out: &mut [T], src: &[T], map: &M, base: usize) {
    for (k, d) in out.iter_mut().enumerate() {
        *d = src[map.source_index(base + k)];
    }
}
