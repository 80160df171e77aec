//! Easing curves matching the names the page's motion design uses.

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

pub fn power1_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

pub fn power1_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(2)
}

/// Cubic ease-in-out, handed to the browser for CSS-driven transitions.
pub const POWER2_IN_OUT_CSS: &str = "cubic-bezier(0.645, 0.045, 0.355, 1)";

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn curves_hit_their_endpoints_and_midpoint() {
        assert!(close(power1_in_out(0.0), 0.0));
        assert!(close(power1_in_out(0.5), 0.5));
        assert!(close(power1_in_out(1.0), 1.0));
        assert!(close(power1_out(0.0), 0.0));
        assert!(close(power1_out(1.0), 1.0));
    }

    #[test]
    fn curves_are_monotonic_and_clamped() {
        for ease in [power1_in_out, power1_out] {
            let mut previous = ease(-1.0);
            assert!(close(previous, 0.0));
            for step in 1..=100 {
                let value = ease(step as f64 / 100.0);
                assert!(value >= previous);
                previous = value;
            }
            assert!(close(ease(3.0), 1.0));
        }
    }

    const POWER2_IN_OUT_BEZIER: [f64; 4] = [0.645, 0.045, 0.355, 1.0];

    fn bezier(p1: f64, p2: f64, t: f64) -> f64 {
        3.0 * (1.0 - t).powi(2) * t * p1 + 3.0 * (1.0 - t) * t * t * p2 + t.powi(3)
    }

    /// y of a CSS `cubic-bezier` at progress `x`, by bisection on the curve parameter.
    fn css_curve_at([x1, y1, x2, y2]: [f64; 4], x: f64) -> f64 {
        let (mut lo, mut hi) = (0.0, 1.0);
        for _ in 0..60 {
            let mid = (lo + hi) / 2.0;
            if bezier(x1, x2, mid) < x {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        bezier(y1, y2, lo)
    }

    fn cubic_in_out(x: f64) -> f64 {
        if x < 0.5 {
            4.0 * x.powi(3)
        } else {
            1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
        }
    }

    #[test]
    fn css_curve_follows_the_cubic_not_the_quadratic() {
        let rendered = POWER2_IN_OUT_BEZIER
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        assert_eq!(POWER2_IN_OUT_CSS, format!("cubic-bezier({})", rendered));

        for x in [0.25, 0.75] {
            let y = css_curve_at(POWER2_IN_OUT_BEZIER, x);
            let cubic = cubic_in_out(x);
            let quadratic = power1_in_out(x);
            assert!((y - cubic).abs() < 0.03, "y({}) = {} vs cubic {}", x, y, cubic);
            assert!((y - cubic).abs() < (y - quadratic).abs());
        }
    }

    #[test]
    fn lerp_interpolates_linearly() {
        assert!(close(lerp(10.0, 20.0, 0.25), 12.5));
        assert!(close(lerp(100.0, 0.0, 1.0), 0.0));
    }
}
