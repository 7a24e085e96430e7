/// `round(100 * part / whole)`, rounding halves away from zero. A zero
/// `whole` yields 0 rather than NaN.
pub fn rounded_percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }

    let scaled = (part as f64 * 100.0) / whole as f64;
    scaled.round().clamp(0.0, u32::MAX as f64) as u32
}
