use crate::utils::constants::{DEGREES_PER_HOUR, IDEG_DEC_QUARTER_CIRCLE, IDEG_RA_FULL_CIRCLE};

/// Convert right ascension from hours [0, 24) to degrees [0, 360)
///
/// # Examples
/// ```
/// use wellknown_catalog::utils::ra_to_degrees;
///
/// assert_eq!(ra_to_degrees(12.0), 180.0);
/// ```
pub fn ra_to_degrees(hours: f64) -> f64 {
    hours * DEGREES_PER_HOUR
}

/// Convert an integer-scaled declination (±324000 = ±90°) to degrees
pub fn ideg_to_dec(ideg: f64) -> f64 {
    ideg / IDEG_DEC_QUARTER_CIRCLE * 90.0
}

/// Format an integer-scaled right ascension (864000 = 360°) as `HHhMMmSS.sssss`.
///
/// The minute field counts half-degree steps of the remainder within the hour,
/// and the seconds field is what is left of that remainder in degrees.
pub fn ideg_to_ra(ideg: f64) -> String {
    let degrees = ideg / IDEG_RA_FULL_CIRCLE * 360.0;
    let hour = (degrees / DEGREES_PER_HOUR).trunc();
    let remainder = degrees - hour * DEGREES_PER_HOUR;
    let minute = (remainder * 2.0).trunc();
    let second = remainder - minute / 2.0;

    format!("{:02}h{:02}m{:.5}", hour as i64, minute as i64, second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ra_to_degrees() {
        assert_eq!(ra_to_degrees(0.0), 0.0);
        assert_eq!(ra_to_degrees(12.0), 180.0);
        assert_eq!(ra_to_degrees(6.75), 101.25);
        assert!((ra_to_degrees(23.999) - 359.985).abs() < 1e-9);
    }

    #[test]
    fn test_ideg_to_dec() {
        assert_eq!(ideg_to_dec(324000.0), 90.0);
        assert_eq!(ideg_to_dec(-324000.0), -90.0);
        assert!((ideg_to_dec(-60178.0) - -16.716111).abs() < 1e-6);
    }

    #[test]
    fn test_ideg_to_ra() {
        assert_eq!(ideg_to_ra(0.0), "00h00m0.00000");
        // 432000 is exactly half the circle: 180 degrees, hour 12
        assert_eq!(ideg_to_ra(432000.0), "12h00m0.00000");
        // 243089 -> 101.28708 degrees -> hour 6, remainder 11.28708
        assert_eq!(ideg_to_ra(243089.0), "06h22m0.28708");
    }
}
