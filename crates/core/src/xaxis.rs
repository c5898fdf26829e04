//! Generates or reads the X axis shared across a variant's subfiles (or, for
//! `TXYXYS`, a single subfile's own axis).

use crate::cursor::Cursor;
use crate::error::SpcError;

/// Evenly spaced X axis: `x[i] = first + i * (last - first) / (npts - 1)`.
///
/// When `npts == 1` the single value is `first`.
pub(crate) fn even(first: f64, last: f64, npts: usize) -> Vec<f64> {
    if npts == 1 {
        return vec![first];
    }
    let step = (last - first) / ((npts - 1) as f64);
    (0..npts).map(|i| first + i as f64 * step).collect()
}

/// Reads `npts` consecutive little-endian f32 values and widens them to f64.
pub(crate) fn explicit(cursor: &mut Cursor<'_>, npts: usize) -> Result<Vec<f64>, SpcError> {
    (0..npts)
        .map(|_| cursor.f32("x_value").map(f64::from))
        .collect()
}
