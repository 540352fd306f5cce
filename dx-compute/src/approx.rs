/// The default absolute tolerance used when comparing floating-point values.
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

/// Returns true if `a` and `b` differ by less than `tolerance`.
///
/// The tolerance is absolute, so it behaves the same for values of any magnitude. `NaN` is never
/// approximately equal to anything.
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}
