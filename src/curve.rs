//! Easing curves.
//!
//! Every curve maps normalized progress in `[0, 1]` to an output value. The
//! output may leave `[0, 1]` (anticipate dips below zero, overshoot rises
//! above one, cycle swings to -1).

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::EaseplotError;

/// Anything that can be sampled as an easing function.
pub trait Interpolator {
    /// Evaluate at `progress`, normally in `[0, 1]`.
    fn evaluate(&self, progress: f32) -> f32;
}

impl<F> Interpolator for F
where
    F: Fn(f32) -> f32,
{
    fn evaluate(&self, progress: f32) -> f32 {
        self(progress)
    }
}

/// Named easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Curve {
    /// Slow start and end, fast middle.
    #[default]
    AccelerateDecelerate,
    /// Starts slow and speeds up.
    Accelerate,
    /// Backs up before moving forward.
    Anticipate,
    /// Backs up, then overshoots the target before settling.
    AnticipateOvershoot,
    /// Bounces at the end.
    Bounce,
    /// One full sine cycle.
    Cycle,
    /// Starts fast and slows down.
    Decelerate,
    /// Constant rate.
    Linear,
    /// Overshoots the target and settles back.
    Overshoot,
}

const ANTICIPATE_TENSION: f32 = 2.0;
const OVERSHOOT_TENSION: f32 = 2.0;
const ANTICIPATE_OVERSHOOT_TENSION: f32 = 2.0 * 1.5;
const CYCLES: f32 = 1.0;

impl Curve {
    /// All curves, in selector order.
    pub const ALL: [Curve; 9] = [
        Curve::AccelerateDecelerate,
        Curve::Accelerate,
        Curve::Anticipate,
        Curve::AnticipateOvershoot,
        Curve::Bounce,
        Curve::Cycle,
        Curve::Decelerate,
        Curve::Linear,
        Curve::Overshoot,
    ];

    /// Get the curve name as used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Curve::AccelerateDecelerate => "accelerate-decelerate",
            Curve::Accelerate => "accelerate",
            Curve::Anticipate => "anticipate",
            Curve::AnticipateOvershoot => "anticipate-overshoot",
            Curve::Bounce => "bounce",
            Curve::Cycle => "cycle",
            Curve::Decelerate => "decelerate",
            Curve::Linear => "linear",
            Curve::Overshoot => "overshoot",
        }
    }

    /// Position in [`Curve::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&c| c == self).unwrap_or(0)
    }

    /// Get the next curve in the selector, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Get the previous curve in the selector, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Evaluate the curve at `t`.
    pub fn value(self, t: f32) -> f32 {
        match self {
            Curve::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
            Curve::Accelerate => t * t,
            Curve::Anticipate => anticipate(t, ANTICIPATE_TENSION),
            Curve::AnticipateOvershoot => {
                let tension = ANTICIPATE_OVERSHOOT_TENSION;
                if t < 0.5 {
                    0.5 * anticipate(t * 2.0, tension)
                } else {
                    0.5 * (overshoot(t * 2.0 - 2.0, tension) + 2.0)
                }
            },
            Curve::Bounce => bounce_out(t),
            Curve::Cycle => (2.0 * CYCLES * PI * t).sin(),
            Curve::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
            Curve::Linear => t,
            Curve::Overshoot => overshoot(t - 1.0, OVERSHOOT_TENSION) + 1.0,
        }
    }

    /// Evenly spaced `(progress, value)` pairs from 0 to 1 inclusive.
    pub fn sample(self, steps: usize) -> Vec<(f32, f32)> {
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| {
                let t = i as f32 / steps as f32;
                (t, self.value(t))
            })
            .collect()
    }
}

impl Interpolator for Curve {
    fn evaluate(&self, progress: f32) -> f32 {
        self.value(progress)
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Curve {
    type Err = EaseplotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| EaseplotError::unknown_curve(s))
    }
}

#[inline]
fn anticipate(t: f32, tension: f32) -> f32 {
    t * t * ((tension + 1.0) * t - tension)
}

#[inline]
fn overshoot(t: f32, tension: f32) -> f32 {
    t * t * ((tension + 1.0) * t + tension)
}

#[inline]
fn bounce(t: f32) -> f32 {
    t * t * 8.0
}

fn bounce_out(t: f32) -> f32 {
    let t = t * 1.1226;
    if t < 0.3535 {
        bounce(t)
    } else if t < 0.7408 {
        bounce(t - 0.54719) + 0.7
    } else if t < 0.9644 {
        bounce(t - 0.8526) + 0.9
    } else {
        bounce(t - 1.0435) + 0.95
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn every_curve_starts_at_zero() {
        for curve in Curve::ALL {
            assert!(curve.value(0.0).abs() < EPS, "{curve} at 0");
        }
    }

    #[test]
    fn every_curve_but_cycle_ends_at_one() {
        for curve in Curve::ALL {
            let end = curve.value(1.0);
            if curve == Curve::Cycle {
                assert!(end.abs() < EPS, "cycle returns to 0, got {end}");
            } else {
                assert!((end - 1.0).abs() < EPS, "{curve} at 1 was {end}");
            }
        }
    }

    #[test]
    fn shapes_match_their_names() {
        assert!(Curve::Accelerate.value(0.5) < 0.5);
        assert!(Curve::Decelerate.value(0.5) > 0.5);
        assert!((Curve::AccelerateDecelerate.value(0.5) - 0.5).abs() < EPS);
        assert!((Curve::Cycle.value(0.25) - 1.0).abs() < EPS);
        assert!((Curve::Cycle.value(0.75) + 1.0).abs() < EPS);
    }

    #[test]
    fn anticipate_and_overshoot_leave_unit_range() {
        let samples = |c: Curve| c.sample(200).into_iter().map(|(_, v)| v);
        assert!(samples(Curve::Anticipate).fold(f32::MAX, f32::min) < 0.0);
        assert!(samples(Curve::Overshoot).fold(f32::MIN, f32::max) > 1.0);
        let both: Vec<f32> = samples(Curve::AnticipateOvershoot).collect();
        assert!(both.iter().copied().fold(f32::MAX, f32::min) < 0.0);
        assert!(both.iter().copied().fold(f32::MIN, f32::max) > 1.0);
    }

    #[test]
    fn bounce_stays_in_unit_range() {
        for (_, v) in Curve::Bounce.sample(500) {
            assert!((-EPS..=1.0 + EPS).contains(&v), "bounce gave {v}");
        }
    }

    #[test]
    fn anticipate_overshoot_is_continuous_at_midpoint() {
        let c = Curve::AnticipateOvershoot;
        assert!((c.value(0.4999) - c.value(0.5)).abs() < 0.01);
    }

    #[test]
    fn names_parse_back() {
        for curve in Curve::ALL {
            assert_eq!(curve.name().parse::<Curve>().unwrap(), curve);
        }
        assert_eq!("Anticipate_Overshoot".parse::<Curve>().unwrap(), Curve::AnticipateOvershoot);
        assert!("wobble".parse::<Curve>().is_err());
    }

    #[test]
    fn selector_wraps() {
        assert_eq!(Curve::Overshoot.next(), Curve::AccelerateDecelerate);
        assert_eq!(Curve::AccelerateDecelerate.prev(), Curve::Overshoot);
        assert_eq!(Curve::Linear.index(), 7);
    }

    #[test]
    fn sample_includes_both_ends() {
        let s = Curve::Linear.sample(4);
        assert_eq!(s.len(), 5);
        assert_eq!(s[0], (0.0, 0.0));
        assert_eq!(s[4], (1.0, 1.0));
    }

    #[test]
    fn closures_are_interpolators() {
        let half = |t: f32| t / 2.0;
        assert_eq!(half.evaluate(0.5), 0.25);
        assert_eq!(Curve::Linear.evaluate(0.3), 0.3);
    }
}
