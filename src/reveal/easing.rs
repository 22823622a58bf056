/// A CSS-style cubic-bezier timing curve through (0, 0) and (1, 1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const EPSILON: f64 = 1e-7;

impl CubicBezier {
    /// `ease`, the CSS default timing function.
    pub const EASE: CubicBezier = CubicBezier::new(0.25, 0.1, 0.25, 1.0);

    /// Control point x coordinates must lie within [0, 1] for the curve to be a function of time.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased progress for linear progress `t`; `t` is clamped to [0, 1].
    pub fn sample(&self, t: f64) -> f64 {
        if t <= 0.0 || t.is_nan() {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let s = self.solve_parameter(t);
        bezier(s, self.y1, self.y2)
    }

    // Finds s with x(s) == x: Newton first, bisection when the slope is too flat.
    fn solve_parameter(&self, x: f64) -> f64 {
        let mut s = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = bezier(s, self.x1, self.x2) - x;
            if error.abs() < EPSILON {
                return s;
            }
            let slope = bezier_slope(s, self.x1, self.x2);
            if slope.abs() < EPSILON {
                break;
            }
            s -= error / slope;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        s = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = bezier(s, self.x1, self.x2);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::EASE
    }
}

fn bezier(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINEAR: CubicBezier = CubicBezier::new(0.0, 0.0, 1.0, 1.0);

    #[test]
    fn endpoints_are_fixed() {
        for curve in [CubicBezier::EASE, LINEAR] {
            assert_eq!(curve.sample(0.0), 0.0);
            assert_eq!(curve.sample(1.0), 1.0);
            assert_eq!(curve.sample(-3.0), 0.0);
            assert_eq!(curve.sample(7.0), 1.0);
        }
    }

    #[test]
    fn ease_front_loads_progress() {
        let mid = CubicBezier::EASE.sample(0.5);
        assert!((mid - 0.8024).abs() < 0.01, "ease(0.5) = {mid}");
    }

    #[test]
    fn linear_is_identity() {
        for i in 1..10 {
            let t = i as f64 / 10.0;
            assert!((LINEAR.sample(t) - t).abs() < 1e-6);
        }
    }

    #[test]
    fn ease_is_monotonic() {
        let mut previous = 0.0;
        for i in 1..=100 {
            let value = CubicBezier::EASE.sample(i as f64 / 100.0);
            assert!(value >= previous, "dropped at step {i}");
            previous = value;
        }
    }
}
