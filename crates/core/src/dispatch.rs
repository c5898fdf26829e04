//! Composes the header, axis, subheader and Y-decoder components into the
//! five on-disk layouts an SPC file can take, and assembles the final list
//! of spectra.

use crate::cursor::Cursor;
use crate::error::SpcError;
use crate::flags::Variant;
use crate::header::{self, MainHeader};
use crate::spectrum::Spectrum;
use crate::subheader;
use crate::xaxis;
use crate::ydecode;

fn verify_shape(subfile: usize, x_len: usize, y_len: usize) -> Result<(), SpcError> {
    if x_len != y_len || x_len == 0 {
        return Err(SpcError::ShapeMismatch {
            subfile,
            x_len,
            y_len,
        });
    }
    Ok(())
}

fn decode_subfile(
    cursor: &mut Cursor<'_>,
    header: &MainHeader,
    shared_x: &[f64],
    index: usize,
) -> Result<Spectrum, SpcError> {
    let sub = subheader::parse(cursor)?;
    let effective_exponent = sub.effective_exponent(header.exponent);
    let y = ydecode::decode(
        cursor,
        effective_exponent,
        header.flags.y_precision_16_bit(),
        shared_x.len(),
    )?;
    verify_shape(index, shared_x.len(), y.len())?;
    log::debug!("decoded subfile {index} ({} point(s))", y.len());
    Ok(Spectrum::new(shared_x.to_vec(), y))
}

fn decode_per_subfile_x(
    cursor: &mut Cursor<'_>,
    header: &MainHeader,
    index: usize,
) -> Result<Spectrum, SpcError> {
    let sub = subheader::parse(cursor)?;
    let x = xaxis::explicit(cursor, sub.npts())?;
    let effective_exponent = sub.effective_exponent(header.exponent);
    let y = ydecode::decode(
        cursor,
        effective_exponent,
        header.flags.y_precision_16_bit(),
        sub.npts(),
    )?;
    verify_shape(index, x.len(), y.len())?;
    log::debug!("decoded subfile {index} ({} point(s), own x-axis)", y.len());
    Ok(Spectrum::new(x, y))
}

pub(crate) fn decode(bytes: &[u8]) -> Result<Vec<Spectrum>, SpcError> {
    let mut cursor = Cursor::new(bytes);
    let header = header::parse(&mut cursor)?;

    let spectra = match header.variant {
        Variant::YOnlyEven | Variant::MultiYSharedEven => {
            let x = xaxis::even(header.first, header.last, header.npts());
            (0..header.nsub())
                .map(|i| decode_subfile(&mut cursor, &header, &x, i))
                .collect::<Result<Vec<_>, _>>()?
        }
        Variant::XYExplicit | Variant::MultiYSharedExplicit => {
            let x = xaxis::explicit(&mut cursor, header.npts())?;
            log::debug!("read {} explicit shared x-value(s)", x.len());
            (0..header.nsub())
                .map(|i| decode_subfile(&mut cursor, &header, &x, i))
                .collect::<Result<Vec<_>, _>>()?
        }
        Variant::MultiPerSubfileX => (0..header.nsub())
            .map(|i| decode_per_subfile_x(&mut cursor, &header, i))
            .collect::<Result<Vec<_>, _>>()?,
    };

    log::debug!("decoded {} spectrum/spectra", spectra.len());
    Ok(spectra)
}
