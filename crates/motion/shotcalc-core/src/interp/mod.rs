//! Shape-preserving curves through keyframe samples.
//!
//! [`Curve::fit`] builds a monotone piecewise cubic Hermite interpolant
//! (PCHIP) through `(frame, value)` samples. Between two consecutive samples
//! the curve stays inside the range they bracket, so a camera axis never
//! swings past the positions the operator entered.
//!
//! Outside the sampled span the first/last cubic piece is continued. Callers
//! that must not extrapolate only evaluate inside [`Curve::span`].

pub mod functions;

use thiserror::Error;

use self::functions::{
    eval_segment, eval_segment_derivative, hermite_coefficients, monotone_slopes, secants,
};

/// Reasons a sample list cannot be turned into a curve.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    #[error("at least one sample is required to build a curve")]
    InsufficientData,
    #[error("sample {index} does not come after the previous sample")]
    UnorderedSamples { index: usize },
    #[error("sample {index} is not a finite number")]
    NonFinite { index: usize },
}

/// A fitted curve. Evaluation is pure; the curve keeps no state between calls.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    knots: Vec<f64>,
    values: Vec<f64>,
    slopes: Vec<f64>,
    /// One power-form cubic per segment; empty for a single sample.
    segments: Vec<[f64; 4]>,
}

impl Curve {
    /// Fit a curve through `samples`, which must be strictly increasing in
    /// frame. A single sample gives a constant curve.
    pub fn fit(samples: &[(f64, f64)]) -> Result<Curve, CurveError> {
        if samples.is_empty() {
            return Err(CurveError::InsufficientData);
        }
        for (index, &(x, y)) in samples.iter().enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(CurveError::NonFinite { index });
            }
            if index > 0 && x <= samples[index - 1].0 {
                return Err(CurveError::UnorderedSamples { index });
            }
        }

        let knots: Vec<f64> = samples.iter().map(|s| s.0).collect();
        let values: Vec<f64> = samples.iter().map(|s| s.1).collect();

        if samples.len() == 1 {
            return Ok(Curve {
                knots,
                values,
                slopes: vec![0.0],
                segments: Vec::new(),
            });
        }

        let (widths, secant_slopes) = secants(&knots, &values);
        let slopes = monotone_slopes(&widths, &secant_slopes);
        let segments = widths
            .iter()
            .enumerate()
            .map(|(i, &h)| hermite_coefficients(values[i], values[i + 1], slopes[i], slopes[i + 1], h))
            .collect();

        Ok(Curve {
            knots,
            values,
            slopes,
            segments,
        })
    }

    /// Locate `x`: `Ok(i)` when it is exactly knot `i`, otherwise the segment
    /// to evaluate (clamped to the first/last one outside the span).
    fn locate(&self, x: f64) -> Result<usize, usize> {
        match self.knots.binary_search_by(|k| k.total_cmp(&x)) {
            Ok(i) => Ok(i),
            Err(i) => Err(i.saturating_sub(1).min(self.segments.len() - 1)),
        }
    }

    /// Value of the curve at `x`. Exact at the knots.
    pub fn eval(&self, x: f64) -> f64 {
        if self.segments.is_empty() {
            return self.values[0];
        }
        match self.locate(x) {
            Ok(i) => self.values[i],
            Err(seg) => eval_segment(&self.segments[seg], x - self.knots[seg]),
        }
    }

    /// First derivative (value per frame) at `x`.
    pub fn derivative(&self, x: f64) -> f64 {
        if self.segments.is_empty() {
            return 0.0;
        }
        match self.locate(x) {
            Ok(i) => self.slopes[i],
            Err(seg) => eval_segment_derivative(&self.segments[seg], x - self.knots[seg]),
        }
    }

    #[inline]
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// First and last sampled frame.
    pub fn span(&self) -> (f64, f64) {
        (self.knots[0], self.knots[self.knots.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(Curve::fit(&[]), Err(CurveError::InsufficientData));
    }

    #[test]
    fn unordered_and_duplicate_frames_are_rejected() {
        let err = Curve::fit(&[(0.0, 1.0), (5.0, 2.0), (5.0, 3.0)]).unwrap_err();
        assert_eq!(err, CurveError::UnorderedSamples { index: 2 });
        let err = Curve::fit(&[(3.0, 1.0), (1.0, 2.0)]).unwrap_err();
        assert_eq!(err, CurveError::UnorderedSamples { index: 1 });
    }

    #[test]
    fn non_finite_samples_are_rejected() {
        let err = Curve::fit(&[(0.0, 1.0), (1.0, f64::NAN)]).unwrap_err();
        assert_eq!(err, CurveError::NonFinite { index: 1 });
    }

    #[test]
    fn single_sample_is_constant() {
        let c = Curve::fit(&[(4.0, 12.5)]).unwrap();
        for x in [-100.0, 0.0, 4.0, 1e6] {
            assert_eq!(c.eval(x), 12.5);
            assert_eq!(c.derivative(x), 0.0);
        }
    }

    #[test]
    fn knots_are_reproduced_exactly() {
        let samples = [(32.0, 35.0), (168.0, 375.0), (240.0, 400.0)];
        let c = Curve::fit(&samples).unwrap();
        for (x, y) in samples {
            assert_eq!(c.eval(x), y);
        }
        assert_eq!(c.span(), (32.0, 240.0));
    }

    #[test]
    fn flat_run_stays_flat() {
        let c = Curve::fit(&[(0.0, 0.0), (10.0, 100.0), (20.0, 100.0)]).unwrap();
        for x in 10..=20 {
            assert!((c.eval(x as f64) - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn extrapolation_continues_end_pieces() {
        let c = Curve::fit(&[(0.0, 0.0), (10.0, 10.0)]).unwrap();
        assert!((c.eval(-5.0) + 5.0).abs() < 1e-12);
        assert!((c.eval(15.0) - 15.0).abs() < 1e-12);
    }
}
