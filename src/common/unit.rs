//! Unit conversion utilities.
//!
//! Slide geometry is authored in inches and font sizes in points; PresentationML
//! stores positions in EMUs and run sizes in hundredths of a point.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

#[inline]
pub fn inch_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

#[inline]
pub fn pt_to_emu_f64(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64) as i64
}

/// Font size in points to the `sz` attribute of `a:rPr` (hundredths of a point).
#[inline]
pub fn pt_to_run_size(pt: f64) -> u32 {
    (pt * 100.0).round() as u32
}
