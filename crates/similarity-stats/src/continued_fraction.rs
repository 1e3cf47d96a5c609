//! Generic continued fraction evaluation
//!
//! Evaluates `a0 + b1 / (a1 + b2 / (a2 + ...))` from successive convergents
//! `p_n / q_n`. When a convergent overflows, the recurrence is retried with
//! the terms divided by increasing powers of the larger coefficient.

use crate::StatsError;

/// Maximum power of the larger coefficient tried when rescaling an overflowing convergent
const MAX_SCALE_POWER: u32 = 5;

/// Continued fraction defined by its coefficient functions `a(n, x)` and `b(n, x)`
pub struct ContinuedFraction<A, B> {
    a: A,
    b: B,
}

impl<A, B> ContinuedFraction<A, B>
where
    A: Fn(f64, f64) -> f64,
    B: Fn(f64, f64) -> f64,
{
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }

    /// Evaluate at `x` until the relative change between convergents drops to `epsilon`
    pub fn evaluate(&self, x: f64, epsilon: f64, max_iterations: u32) -> Result<f64, StatsError> {
        let mut p0 = 1.0;
        let mut p1 = (self.a)(0.0, x);
        let mut q0 = 0.0;
        let mut q1 = 1.0;
        let mut c = p1 / q1;
        let mut n = 0;
        let mut relative_error = f64::MAX;

        while n < max_iterations && relative_error > epsilon {
            n += 1;
            let a = (self.a)(f64::from(n), x);
            let b = (self.b)(f64::from(n), x);
            let mut p2 = a * p1 + b * p0;
            let mut q2 = a * q1 + b * q0;

            if !p2.is_finite() || !q2.is_finite() {
                let scale = a.max(b);
                if scale <= 0.0 {
                    return Err(StatsError::ContinuedFractionOverflow { x });
                }
                let mut scale_factor = 1.0;
                let mut infinite = true;
                for _ in 0..MAX_SCALE_POWER {
                    let last_scale_factor = scale_factor;
                    scale_factor *= scale;
                    if a != 0.0 && a > b {
                        p2 = p1 / last_scale_factor + (b / scale_factor * p0);
                        q2 = q1 / last_scale_factor + (b / scale_factor * q0);
                    } else if b != 0.0 {
                        p2 = (a / scale_factor * p1) + p0 / last_scale_factor;
                        q2 = (a / scale_factor * q1) + q0 / last_scale_factor;
                    }
                    infinite = !p2.is_finite() || !q2.is_finite();
                    if !infinite {
                        break;
                    }
                }
                if infinite {
                    return Err(StatsError::ContinuedFractionOverflow { x });
                }
            }

            let r = p2 / q2;
            if r.is_nan() {
                return Err(StatsError::ContinuedFractionNaN { x });
            }
            relative_error = (r / c - 1.0).abs();

            c = r;
            p0 = p1;
            p1 = p2;
            q0 = q1;
            q1 = q2;
        }

        if n >= max_iterations {
            return Err(StatsError::NonConvergence {
                iterations: max_iterations,
            });
        }

        Ok(c)
    }
}
