/// Rounds a floating-point number to a number of decimal places.
///
/// The value is scaled by `10^places`, rounded to the nearest integer with
/// [`f64::round`] (halfway cases away from zero) and scaled back. Because the
/// scaling happens in binary floating point, some decimal halfway values land
/// just below the midpoint: `1.005` becomes `1.0`, not `1.01`.
///
/// # Arguments
/// * `value` - The number to round
/// * `places` - Decimal places to keep; negative values round to tens, hundreds, ...
///
/// # Returns
/// The rounded value. If scaling up overflows, `value` is returned unchanged;
/// if `places` is so negative that the scale itself overflows, the result is a
/// zero carrying the sign of `value`.
/// NaN and infinite inputs are not meaningful and give unspecified results.
///
/// # Examples
/// ```
/// use useful_sdk::utils::round_to_places;
/// assert_eq!(round_to_places(3.14159, 2), 3.14);
/// assert_eq!(round_to_places(2.5, 0), 3.0);
/// assert_eq!(round_to_places(1234.5, -2), 1200.0);
/// ```
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places.saturating_abs());
    if places < 0 {
        if !factor.is_finite() {
            return 0.0_f64.copysign(value);
        }
        return (value / factor).round() * factor;
    }
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// `rounded_to_places` as a method on floating-point values.
///
/// # Example
/// ```
/// use useful_sdk::utils::RoundToPlaces;
/// assert_eq!(2.71828_f64.rounded_to_places(3), 2.718);
/// assert_eq!(0.125_f32.rounded_to_places(2), 0.13);
/// ```
pub trait RoundToPlaces {
    fn rounded_to_places(self, places: i32) -> Self;
}

impl RoundToPlaces for f64 {
    fn rounded_to_places(self, places: i32) -> Self {
        round_to_places(self, places)
    }
}

impl RoundToPlaces for f32 {
    fn rounded_to_places(self, places: i32) -> Self {
        let rounded = round_to_places(f64::from(self), places) as f32;
        if rounded.is_finite() {
            rounded
        } else {
            self
        }
    }
}
