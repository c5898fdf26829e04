//! Decoder for Galactic Industries SPC spectral files.
//!
//! This crate decodes the "new generation", little-endian (version byte
//! `0x4B`) SPC layout into a list of `(x, y)` [`Spectrum`] pairs. It does not
//! write SPC files, interpret domain metadata (units, instrument fields,
//! timestamps) beyond what reconstructing X/Y requires, support the older
//! pre-"new" generation, stream incrementally, or transform the decoded
//! data.
//!
//! ```no_run
//! let bytes = std::fs::read("spectrum.spc").unwrap();
//! let spectra = spc_core::decode(&bytes).unwrap();
//! for spectrum in &spectra {
//!     println!("{} point(s)", spectrum.len());
//! }
//! ```

mod cursor;
mod dispatch;
mod error;
mod flags;
mod header;
mod spectrum;
mod subheader;
mod xaxis;
mod ydecode;

pub use error::{Result, SpcError};
pub use spectrum::Spectrum;

use camino::Utf8Path;

/// Decodes an in-memory SPC byte buffer into its constituent spectra.
pub fn decode(bytes: &[u8]) -> Result<Vec<Spectrum>> {
    dispatch::decode(bytes)
}

/// Reads an SPC file from `path` and decodes it.
///
/// Filesystem errors (missing file, permission denied, ...) surface as
/// [`SpcError::Io`], populated via `fs-err` so the message already names the
/// offending path.
pub fn read(path: &Utf8Path) -> Result<Vec<Spectrum>> {
    let bytes = fs_err::read(path)?;
    decode(&bytes)
}
