//! The first byte of an SPC main header packs eight independent flag bits.
//!
//! Bit order, smallest to largest:
//! - TSPREC: Y data blocks are 16-bit integers
//! - TCGRAM: enables fexper in older software (unused here)
//! - TMULTI: file contains more than one subfile
//! - TRANDM: if TMULTI and TRANDM, Z values in subfile headers are unordered (unused here)
//! - TORDRD: if TMULTI and TORDRD, Z values are ordered but unevenly spaced (unused here)
//! - TALABS: axis label text is stored in a free-text block (unused here)
//! - TXYXYS: each subfile carries its own X array; requires TMULTI
//! - TXVALS: an explicit shared X array precedes the subfile stream

use crate::error::SpcError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Flags(pub(crate) u8);

impl Flags {
    pub(crate) fn y_precision_16_bit(self) -> bool {
        self.0 & 0b0000_0001 != 0
    }

    pub(crate) fn multifile(self) -> bool {
        self.0 & 0b0000_0100 != 0
    }

    pub(crate) fn per_subfile_x(self) -> bool {
        self.0 & 0b0100_0000 != 0
    }

    pub(crate) fn explicit_shared_x(self) -> bool {
        self.0 & 0b1000_0000 != 0
    }
}

/// The five on-disk layouts this crate decodes, selected by [`Flags`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Variant {
    /// TMULTI clear, TXVALS clear: one implicit, evenly spaced X axis.
    YOnlyEven,
    /// TMULTI clear, TXVALS set: one explicit X axis.
    XYExplicit,
    /// TMULTI set, TXVALS clear, TXYXYS clear: shared, evenly spaced X axis.
    MultiYSharedEven,
    /// TMULTI set, TXVALS set, TXYXYS clear: shared, explicit X axis.
    MultiYSharedExplicit,
    /// TMULTI set, TXYXYS set: each subfile carries its own X axis. TXVALS
    /// is ignored in this case.
    MultiPerSubfileX,
}

impl Variant {
    pub(crate) fn classify(flags: Flags) -> Result<Self, SpcError> {
        if flags.per_subfile_x() && !flags.multifile() {
            return Err(SpcError::InvalidHeader {
                field: "flags",
                message: "TXYXYS is set without TMULTI".to_owned(),
            });
        }

        Ok(match (flags.multifile(), flags.explicit_shared_x(), flags.per_subfile_x()) {
            (false, false, _) => Variant::YOnlyEven,
            (false, true, _) => Variant::XYExplicit,
            (true, _, true) => Variant::MultiPerSubfileX,
            (true, false, false) => Variant::MultiYSharedEven,
            (true, true, false) => Variant::MultiYSharedExplicit,
        })
    }
}
