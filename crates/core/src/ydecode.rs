//! Decodes a raw Y block into natural-units float64 values.
//!
//! Three encodings are possible, selected by the effective exponent and the
//! main header's `TSPREC` flag:
//! - floating point (effective exponent is the `-128`-low-byte sentinel):
//!   `n` little-endian f32 values, widened to f64, unscaled.
//! - 16-bit integer (`TSPREC` set): `n` little-endian i16 values, scaled by
//!   `2^(e - 16)`.
//! - 32-bit integer (`TSPREC` clear): `n` *byte-swapped* i32 values, scaled
//!   by `2^(e - 32)`. The on-disk word's 16-bit halves are swapped relative
//!   to a normal little-endian i32 — the single most common source of
//!   decoding bugs in this format.

use crate::cursor::Cursor;
use crate::error::SpcError;
use crate::subheader::is_float_sentinel;

pub(crate) fn decode(
    cursor: &mut Cursor<'_>,
    effective_exponent: i16,
    y_precision_16_bit: bool,
    npts: usize,
) -> Result<Vec<f64>, SpcError> {
    if is_float_sentinel(effective_exponent) {
        return (0..npts)
            .map(|_| cursor.f32("y_value").map(f64::from))
            .collect();
    }

    if y_precision_16_bit {
        log::trace!("decoding {npts} 16-bit integer y-value(s) with exponent {effective_exponent}");
        let factor = 2f64.powi(effective_exponent as i32 - 16);
        (0..npts)
            .map(|_| cursor.i16("y_value").map(|raw| raw as f64 * factor))
            .collect()
    } else {
        log::trace!("decoding {npts} byte-swapped 32-bit integer y-value(s) with exponent {effective_exponent}");
        let factor = 2f64.powi(effective_exponent as i32 - 32);
        (0..npts)
            .map(|_| read_swapped_i32(cursor).map(|raw| raw as f64 * factor))
            .collect()
    }
}

/// Reassembles a byte-swapped on-disk i32: the stored bytes `[b0, b1, b2,
/// b3]` represent the canonical little-endian word `[b2, b3, b0, b1]`.
fn read_swapped_i32(cursor: &mut Cursor<'_>) -> Result<i32, SpcError> {
    let raw = cursor.take(4, "y_value")?;
    let (b0, b1, b2, b3) = (raw[0], raw[1], raw[2], raw[3]);
    Ok(i32::from_le_bytes([b2, b3, b0, b1]))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn byte_swapped_i32_known_answer() {
        // Stored bytes 00 00 01 00 must decode to 1, not 65536.
        let bytes = [0x00u8, 0x00, 0x01, 0x00];
        let mut cursor = Cursor::new(&bytes);
        assert_eq!(read_swapped_i32(&mut cursor).unwrap(), 1);
    }

    #[test]
    fn byte_swapped_i32_negative_value() {
        // -1 as a canonical LE i32 is FF FF FF FF; byte-swapped storage of
        // that canonical word is also FF FF FF FF (swap is self-inverse
        // when both halves are equal).
        let bytes = [0xFFu8, 0xFF, 0xFF, 0xFF];
        let mut cursor = Cursor::new(&bytes);
        assert_eq!(read_swapped_i32(&mut cursor).unwrap(), -1);
    }

    #[test]
    fn decodes_float_sentinel_without_scaling() {
        let mut bytes = Vec::new();
        for v in [1.0f32, 2.0, 3.0, 4.0] {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        let mut cursor = Cursor::new(&bytes);
        let ys = decode(&mut cursor, -128, false, 4).unwrap();
        assert_eq!(ys, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn decodes_16_bit_integers_with_scaling() {
        let mut bytes = Vec::new();
        for v in [1i16, 2, 3, 4] {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        let mut cursor = Cursor::new(&bytes);
        let ys = decode(&mut cursor, 0, true, 4).unwrap();
        let factor = 2f64.powi(0 - 16);
        assert_eq!(ys, vec![1.0 * factor, 2.0 * factor, 3.0 * factor, 4.0 * factor]);
    }

    #[test]
    fn decodes_32_bit_integers_with_byte_swap_and_scaling() {
        // Encode 1,2,3,4 in byte-swapped form.
        let mut bytes = Vec::new();
        for v in [1i32, 2, 3, 4] {
            let le = v.to_le_bytes();
            bytes.extend_from_slice(&[le[2], le[3], le[0], le[1]]);
        }
        let mut cursor = Cursor::new(&bytes);
        let ys = decode(&mut cursor, 0, false, 4).unwrap();
        let factor = 2f64.powi(0 - 32);
        assert_eq!(ys, vec![1.0 * factor, 2.0 * factor, 3.0 * factor, 4.0 * factor]);
    }

    #[test]
    fn truncated_y_block_is_truncated_error() {
        let bytes = [0u8; 1];
        let mut cursor = Cursor::new(&bytes);
        let err = decode(&mut cursor, 0, true, 1).unwrap_err();
        assert!(matches!(err, SpcError::Truncated { .. }));
    }
}
