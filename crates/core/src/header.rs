//! The SPC main header: a fixed 512-byte block at the start of every file
//! this crate accepts.
//!
//! Field layout (offsets from the start of the file):
//!
//! | Offset | Width | Field |
//! |---|---|---|
//! | 0 | 1 | flags |
//! | 1 | 1 | version |
//! | 2 | 1 | experiment type (ignored) |
//! | 3 | 1 | exponent (i8) |
//! | 4 | 4 | npts (i32) |
//! | 8 | 8 | first (f64) |
//! | 16 | 8 | last (f64) |
//! | 24 | 4 | nsub (i32) |
//! | 28..248 | 220 | axis codes, timestamp, resolution/source strings, peak point, spare, memo, axis labels (ignored) |
//! | 248 | 4 | log offset (preserved, never dereferenced) |
//! | 252..512 | 260 | modification flags, processing code, method file, w-axis fields, reserved (ignored) |

use crate::cursor::Cursor;
use crate::error::SpcError;
use crate::flags::{Flags, Variant};

/// SPC software marks a "new generation", little-endian (LSB) file with this
/// version byte. This is the only version this crate decodes: big-endian
/// (`0x4C`) and old-format (`0x4D`) files are rejected rather than converted.
const VERSION_NEW_LSB: u8 = 0x4B;

pub(crate) const HEADER_LEN: usize = 512;

/// The floating-point sentinel exponent: any value whose low byte is `0x80`
/// marks Y as IEEE-754 binary32 rather than scaled integers. Applies to both
/// the i8 main-header exponent and the i16 subheader exponent.
pub(crate) const FLOAT_SENTINEL_LOW_BYTE: u8 = 0x80;

#[derive(Clone, Debug)]
pub(crate) struct MainHeader {
    pub(crate) flags: Flags,
    pub(crate) exponent: i8,
    pub(crate) npts: i32,
    pub(crate) first: f64,
    pub(crate) last: f64,
    pub(crate) nsub: i32,
    /// Byte offset of the trailing log block, as recorded in the header.
    /// Preserved for a future, separate log-block component; never read by
    /// this crate.
    #[allow(dead_code)]
    pub(crate) log_offset: u32,
    pub(crate) variant: Variant,
}

impl MainHeader {
    /// Number of points on the shared X axis used by every non-`TXYXYS`
    /// variant. Always `npts` cast to `usize`, which is safe once `npts > 0`
    /// has been checked by [`parse`].
    pub(crate) fn npts(&self) -> usize {
        self.npts as usize
    }

    pub(crate) fn nsub(&self) -> usize {
        self.nsub as usize
    }
}

pub(crate) fn parse(cursor: &mut Cursor<'_>) -> Result<MainHeader, SpcError> {
    let flags = Flags(cursor.u8("flags")?);
    let version = cursor.u8("version")?;
    if version != VERSION_NEW_LSB {
        return Err(SpcError::UnsupportedVariant {
            reason: format!(
                "version byte 0x{version:02X} is not the supported new-generation LSB variant (0x{VERSION_NEW_LSB:02X})"
            ),
        });
    }

    cursor.skip(1, "experiment_type")?;
    let exponent = cursor.i8("exponent")?;
    let npts = cursor.i32("npts")?;
    let first = cursor.f64("first")?;
    let last = cursor.f64("last")?;
    let raw_nsub = cursor.i32("nsub")?;

    cursor.skip(220, "axis_codes_and_metadata")?;
    let log_offset = cursor.u32("log_offset")?;
    cursor.skip(260, "reserved_tail")?;

    if npts <= 0 {
        return Err(SpcError::InvalidHeader {
            field: "npts",
            message: format!("must be positive, found {npts}"),
        });
    }
    if !first.is_finite() {
        return Err(SpcError::InvalidHeader {
            field: "first",
            message: format!("must be finite, found {first}"),
        });
    }
    if !last.is_finite() {
        return Err(SpcError::InvalidHeader {
            field: "last",
            message: format!("must be finite, found {last}"),
        });
    }

    let nsub = if flags.multifile() {
        if raw_nsub <= 0 {
            return Err(SpcError::InvalidHeader {
                field: "nsub",
                message: format!("must be positive when TMULTI is set, found {raw_nsub}"),
            });
        }
        raw_nsub
    } else {
        1
    };

    let variant = Variant::classify(flags)?;

    log::debug!(
        "parsed main header: variant={variant:?} npts={npts} nsub={nsub} exponent={exponent}"
    );

    Ok(MainHeader {
        flags,
        exponent,
        npts,
        first,
        last,
        nsub,
        log_offset,
        variant,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn header_bytes(flags: u8, version: u8, exponent: i8, npts: i32, first: f64, last: f64, nsub: i32) -> Vec<u8> {
        let mut buf = vec![0u8; HEADER_LEN];
        buf[0] = flags;
        buf[1] = version;
        buf[3] = exponent as u8;
        buf[4..8].copy_from_slice(&npts.to_le_bytes());
        buf[8..16].copy_from_slice(&first.to_le_bytes());
        buf[16..24].copy_from_slice(&last.to_le_bytes());
        buf[24..28].copy_from_slice(&nsub.to_le_bytes());
        buf
    }

    #[test]
    fn parses_minimal_y_only_header() {
        let bytes = header_bytes(0x00, 0x4B, 0, 4, 100.0, 400.0, 0);
        let mut cursor = Cursor::new(&bytes);
        let header = parse(&mut cursor).unwrap();
        assert_eq!(header.npts(), 4);
        assert_eq!(header.nsub(), 1);
        assert_eq!(cursor.position(), HEADER_LEN);
    }

    #[test]
    fn rejects_bad_version_byte() {
        let bytes = header_bytes(0x00, 0x4D, 0, 4, 0.0, 1.0, 0);
        let mut cursor = Cursor::new(&bytes);
        let err = parse(&mut cursor).unwrap_err();
        assert!(matches!(err, SpcError::UnsupportedVariant { .. }));
    }

    #[test]
    fn rejects_nonpositive_npts() {
        let bytes = header_bytes(0x00, 0x4B, 0, 0, 0.0, 1.0, 0);
        let mut cursor = Cursor::new(&bytes);
        let err = parse(&mut cursor).unwrap_err();
        assert!(matches!(err, SpcError::InvalidHeader { field: "npts", .. }));
    }

    #[test]
    fn rejects_non_finite_endpoints() {
        let bytes = header_bytes(0x00, 0x4B, 0, 4, f64::NAN, 1.0, 0);
        let mut cursor = Cursor::new(&bytes);
        let err = parse(&mut cursor).unwrap_err();
        assert!(matches!(err, SpcError::InvalidHeader { field: "first", .. }));
    }

    #[test]
    fn forces_nsub_to_one_without_tmulti() {
        let bytes = header_bytes(0x00, 0x4B, 0, 4, 0.0, 1.0, 99);
        let mut cursor = Cursor::new(&bytes);
        let header = parse(&mut cursor).unwrap();
        assert_eq!(header.nsub(), 1);
    }

    #[test]
    fn rejects_nonpositive_nsub_with_tmulti() {
        let bytes = header_bytes(0b0000_0100, 0x4B, 0, 4, 0.0, 1.0, 0);
        let mut cursor = Cursor::new(&bytes);
        let err = parse(&mut cursor).unwrap_err();
        assert!(matches!(err, SpcError::InvalidHeader { field: "nsub", .. }));
    }

    #[test]
    fn truncated_header_is_truncated_error() {
        let bytes = vec![0u8; 10];
        let mut cursor = Cursor::new(&bytes);
        let err = parse(&mut cursor).unwrap_err();
        assert!(matches!(err, SpcError::Truncated { .. }));
    }
}
