//! The 32-byte subfile header that precedes every subfile's Y data (and, for
//! the `TXYXYS` variant, its own X data too).
//!
//! This crate's redesigned format widens the Y exponent to 16 bits (with its
//! own inherit-from-main sentinel) compared to the classic on-disk SPC
//! subheader. The 32-byte layout:
//!
//! | Offset | Width | Field |
//! |---|---|---|
//! | 0 | 1 | flags (unused) |
//! | 1 | 1 | reserved |
//! | 2 | 2 | exponent (i16) |
//! | 4 | 2 | index (u16) |
//! | 6 | 4 | npts (u32) |
//! | 10 | 4 | first (f32, `TXYXYS` only) |
//! | 14 | 4 | last (f32, `TXYXYS` only) |
//! | 18 | 4 | w-axis value (unused) |
//! | 22 | 10 | reserved |

use crate::cursor::Cursor;
use crate::error::SpcError;
use crate::header::FLOAT_SENTINEL_LOW_BYTE;

pub(crate) const SUBHEADER_LEN: usize = 32;

/// Sentinel subheader exponent meaning "inherit the main header's exponent".
const INHERIT_EXPONENT: i16 = -32768;

#[derive(Clone, Copy, Debug)]
pub(crate) struct SubHeader {
    exponent: i16,
    /// Subfile ordinal. Not consulted by the dispatcher, which derives
    /// ordering from subfile read order rather than this field.
    #[allow(dead_code)]
    pub(crate) index: u16,
    pub(crate) npts: u32,
    /// Per-subfile X endpoints. Unused for `TXYXYS` reconstruction, which
    /// reads the X block explicitly rather than regenerating it from these.
    #[allow(dead_code)]
    pub(crate) first: f32,
    #[allow(dead_code)]
    pub(crate) last: f32,
}

impl SubHeader {
    /// Resolves the effective Y exponent for this subfile: the subheader's
    /// own exponent unless it carries the inherit sentinel, in which case
    /// the main header's exponent applies.
    pub(crate) fn effective_exponent(&self, main_exponent: i8) -> i16 {
        if self.exponent == INHERIT_EXPONENT {
            log::trace!("subheader exponent is the inherit sentinel, using main header exponent {main_exponent}");
            main_exponent as i16
        } else {
            log::trace!("subheader exponent {} overrides main header exponent", self.exponent);
            self.exponent
        }
    }

    pub(crate) fn npts(&self) -> usize {
        self.npts as usize
    }
}

/// True when an effective exponent (main- or subheader-derived) marks
/// floating-point Y: any value whose low byte is `0x80`, not only the exact
/// i16 value `-128`.
pub(crate) fn is_float_sentinel(effective_exponent: i16) -> bool {
    let is_float = (effective_exponent as u16 & 0x00FF) as u8 == FLOAT_SENTINEL_LOW_BYTE;
    if is_float {
        log::trace!("effective exponent {effective_exponent} is the floating-point sentinel");
    }
    is_float
}

pub(crate) fn parse(cursor: &mut Cursor<'_>) -> Result<SubHeader, SpcError> {
    cursor.skip(1, "subheader.flags")?;
    cursor.skip(1, "subheader.reserved_lo")?;
    let exponent = cursor.i16("subheader.exponent")?;
    let index = cursor.u16("subheader.index")?;
    let npts = cursor.u32("subheader.npts")?;
    let first = cursor.f32("subheader.first")?;
    let last = cursor.f32("subheader.last")?;
    cursor.skip(4, "subheader.w_value")?;
    cursor.skip(10, "subheader.reserved_hi")?;

    Ok(SubHeader {
        exponent,
        index,
        npts,
        first,
        last,
    })
}
