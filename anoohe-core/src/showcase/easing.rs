//! Easing curves for entry animations and transitions

use serde::{Deserialize, Serialize};

/// Easing function type for animations
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingKind {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    #[default]
    EaseOutCubic,
    /// CSS-style `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier(f32, f32, f32, f32),
}

impl EasingKind {
    /// Map a linear progress in `[0, 1]` onto the curve. Inputs outside the
    /// range are clamped.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
            Self::EaseOutCubic => ease_out_cubic(t),
            Self::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, x1, y1, x2, y2),
        }
    }
}

impl std::fmt::Display for EasingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::EaseIn => write!(f, "Ease In"),
            Self::EaseOut => write!(f, "Ease Out"),
            Self::EaseInOut => write!(f, "Ease In/Out"),
            Self::EaseOutCubic => write!(f, "Ease Out (cubic)"),
            Self::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

/// `1 - (1 - t)^3`
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Solve a CSS cubic bezier from (0,0) to (1,1) for the given x progress.
///
/// Newton-Raphson on x(s), falling back to bisection when the derivative
/// flattens out.
fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 || t >= 1.0 {
        return t;
    }

    let mut s = t;
    for _ in 0..8 {
        let err = bezier_sample(s, x1, x2) - t;
        if err.abs() < 1e-5 {
            return bezier_sample(s, y1, y2);
        }
        let d = bezier_derivative(s, x1, x2);
        if d.abs() < 1e-6 {
            break;
        }
        s = (s - err / d).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = t;
    for _ in 0..32 {
        let x = bezier_sample(s, x1, x2);
        if (x - t).abs() < 1e-5 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    bezier_sample(s, y1, y2)
}

/// B(s) = 3(1-s)^2 s p1 + 3(1-s) s^2 p2 + s^3
#[inline]
fn bezier_sample(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

#[inline]
fn bezier_derivative(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingKind; 6] = [
        EasingKind::Linear,
        EasingKind::EaseIn,
        EasingKind::EaseOut,
        EasingKind::EaseInOut,
        EasingKind::EaseOutCubic,
        EasingKind::CubicBezier(0.25, 0.46, 0.45, 0.94),
    ];

    #[test]
    fn endpoints_are_fixed() {
        for kind in ALL {
            assert!(kind.apply(0.0).abs() < 1e-4, "{kind} at 0");
            assert!((kind.apply(1.0) - 1.0).abs() < 1e-4, "{kind} at 1");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for kind in ALL {
            let mut prev = 0.0;
            for step in 1..=100 {
                let v = kind.apply(step as f32 / 100.0);
                assert!(v + 1e-4 >= prev, "{kind} dipped at step {step}");
                prev = v;
            }
        }
    }

    #[test]
    fn cubic_ease_out_matches_closed_form() {
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-6);
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn bezier_ease_out_leads_linear() {
        let curve = EasingKind::CubicBezier(0.25, 0.46, 0.45, 0.94);
        assert!(curve.apply(0.5) > 0.5);
    }
}
