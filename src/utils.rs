/*
 * fractional position of v between a and b; not clamped
 */
pub fn inverse_lerp(a: f32, b: f32, v: f32) -> f32 {
    (v - a) / (b - a)
}

/*
 * point at fraction t between a and b; not clamped
 */
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/*
 * affine map of v from (min_a, max_a) to (min_b, max_b)
 */
pub fn rescale(v: f32, min_a: f32, max_a: f32, min_b: f32, max_b: f32) -> f32 {
    lerp(min_b, max_b, inverse_lerp(min_a, max_a, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rescale_maps_lower_bound_to_lower_bound() {
        assert_eq!(rescale(-10.0, -10.0, 10.0, 0.0, 1.0), 0.0);
        assert_eq!(rescale(-3.0, -3.0, 3.0, 10.0, 20.0), 10.0);
    }

    #[test]
    fn rescale_maps_midpoint_to_midpoint() {
        let mid = rescale(0.0, -10.0, 10.0, 0.0, 100.0);
        assert!((mid - 50.0).abs() <= f32::EPSILON * 50.0, "got {}", mid);

        let mid = rescale(2.5, 1.0, 4.0, -7.0, 3.0);
        assert!((mid + 2.0).abs() <= f32::EPSILON * 8.0, "got {}", mid);
    }

    #[test]
    fn rescale_is_affine() {
        // equal steps in the source give equal steps in the destination
        let a = rescale(-1.0, -3.0, 3.0, 0.0, 60.0);
        let b = rescale(0.0, -3.0, 3.0, 0.0, 60.0);
        let c = rescale(1.0, -3.0, 3.0, 0.0, 60.0);
        assert!(((b - a) - (c - b)).abs() < 1e-4);
        assert!(((b - a) - 10.0).abs() < 1e-4);
    }

    #[test]
    fn no_clamping_outside_interval() {
        assert!((inverse_lerp(0.0, 10.0, 15.0) - 1.5).abs() < 1e-6);
        assert!((lerp(0.0, 10.0, -0.5) + 5.0).abs() < 1e-6);
    }
}
