/// Maps normalised elapsed time in `[0, 1]` to normalised progress.
///
/// Every curve is monotonic and pinned at `ease(0) == 0`, `ease(1) == 1`,
/// so counters and transitions built on them converge exactly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    /// `1 - (1 - t)^4`
    #[default]
    QuartOut,
    /// `1 - (1 - t)^3`
    CubicOut,
    /// CSS-style cubic bezier through `(0,0)`, `(x1,y1)`, `(x2,y2)`, `(1,1)`.
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// The curve used by word reveals and card entrances.
    pub const REVEAL: Easing = Easing::CubicBezier(0.22, 1.0, 0.36, 1.0);
    pub const EASE_IN_OUT: Easing = Easing::CubicBezier(0.42, 0.0, 0.58, 1.0);

    pub fn ease(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::QuartOut => 1.0 - (1.0 - t).powi(4),
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let u = solve_bezier_x(x1, x2, t);
                bezier(y1, y2, u)
            }
        }
    }

    /// Value for a CSS `transition-timing-function`.
    pub fn css(&self) -> String {
        match *self {
            Easing::Linear => "linear".to_string(),
            Easing::QuartOut => "cubic-bezier(0.25, 1, 0.5, 1)".to_string(),
            Easing::CubicOut => "cubic-bezier(0.33, 1, 0.68, 1)".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }
}

fn bezier(p1: f64, p2: f64, u: f64) -> f64 {
    let inv = 1.0 - u;
    3.0 * inv * inv * u * p1 + 3.0 * inv * u * u * p2 + u * u * u
}

fn bezier_slope(p1: f64, p2: f64, u: f64) -> f64 {
    let inv = 1.0 - u;
    3.0 * inv * inv * p1 + 6.0 * inv * u * (p2 - p1) + 3.0 * u * u * (1.0 - p2)
}

// Newton first, bisection when the slope flattens out.
fn solve_bezier_x(x1: f64, x2: f64, x: f64) -> f64 {
    let mut u = x;
    for _ in 0..8 {
        let err = bezier(x1, x2, u) - x;
        if err.abs() < 1e-7 {
            return u;
        }
        let slope = bezier_slope(x1, x2, u);
        if slope.abs() < 1e-6 {
            break;
        }
        u -= err / slope;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    u = x;
    for _ in 0..64 {
        let value = bezier(x1, x2, u);
        if (value - x).abs() < 1e-7 {
            break;
        }
        if value < x {
            lo = u;
        } else {
            hi = u;
        }
        u = (lo + hi) / 2.0;
    }
    u
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 5] = [
        Easing::Linear,
        Easing::QuartOut,
        Easing::CubicOut,
        Easing::REVEAL,
        Easing::EASE_IN_OUT,
    ];

    #[test]
    fn curves_are_pinned_at_both_ends() {
        for curve in CURVES {
            assert_eq!(curve.ease(0.0), 0.0, "{:?}", curve);
            assert_eq!(curve.ease(1.0), 1.0, "{:?}", curve);
            assert_eq!(curve.ease(-3.0), 0.0);
            assert_eq!(curve.ease(7.5), 1.0);
        }
    }

    #[test]
    fn curves_never_go_backwards() {
        for curve in CURVES {
            let mut previous = 0.0;
            for step in 0..=200 {
                let value = curve.ease(step as f64 / 200.0);
                assert!(value + 1e-6 >= previous, "{:?} at step {}", curve, step);
                previous = value;
            }
        }
    }

    #[test]
    fn quart_out_matches_closed_form() {
        assert!((Easing::QuartOut.ease(0.5) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn ease_in_out_is_symmetric_around_the_midpoint() {
        let mid = Easing::EASE_IN_OUT.ease(0.5);
        assert!((mid - 0.5).abs() < 1e-4);
    }

    #[test]
    fn css_output() {
        assert_eq!(Easing::REVEAL.css(), "cubic-bezier(0.22, 1, 0.36, 1)");
        assert_eq!(Easing::Linear.css(), "linear");
    }
}
