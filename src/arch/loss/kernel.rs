use super::{Clamp, LossFn};
use crate::{NumErr, Result};

/// Evaluates losses and their derivatives over parallel expected and actual outputs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LossKernel {
    clamp: Clamp,
}

impl LossKernel {
    /// Creates a new `LossKernel`.
    ///
    /// # Arguments
    /// * `clamp` - How predictions outside `(0, 1)` are handled by the cross entropy losses.
    ///
    /// # Returns
    /// A new `LossKernel` instance, or an error if the clamp epsilon is invalid.
    pub fn new(clamp: Clamp) -> Result<Self> {
        Ok(Self {
            clamp: clamp.validate()?,
        })
    }

    pub fn clamp(&self) -> Clamp {
        self.clamp
    }

    /// Computes the per-element loss.
    ///
    /// # Arguments
    /// * `loss_fn` - The loss function.
    /// * `expected` - The targets.
    /// * `actual` - The predictions, as many as targets.
    ///
    /// # Returns
    /// The loss of every prediction, or an error if the lengths differ or a prediction falls
    /// outside the loss domain with clamping disabled.
    pub fn forward(
        &self,
        loss_fn: LossFn,
        expected: &[f64],
        actual: &[f64],
    ) -> Result<Vec<f64>> {
        let loss = loss_fn.pointwise();
        self.eval(expected, actual, loss.bounded_f(), |e, a| loss.f(e, a))
    }

    /// Computes the per-element derivative of the loss with respect to the predictions.
    ///
    /// # Returns
    /// The derivatives, with the same failure modes as `forward`.
    pub fn derivative(
        &self,
        loss_fn: LossFn,
        expected: &[f64],
        actual: &[f64],
    ) -> Result<Vec<f64>> {
        let loss = loss_fn.pointwise();
        self.eval(expected, actual, loss.bounded_df(), |e, a| loss.df(e, a))
    }

    /// Computes the mean loss over every prediction, zero when there are none.
    pub fn mean(&self, loss_fn: LossFn, expected: &[f64], actual: &[f64]) -> Result<f64> {
        let losses = self.forward(loss_fn, expected, actual)?;

        if losses.is_empty() {
            return Ok(0.);
        }

        Ok(losses.iter().sum::<f64>() / losses.len() as f64)
    }

    fn eval<F>(&self, expected: &[f64], actual: &[f64], bounded: bool, g: F) -> Result<Vec<f64>>
    where
        F: Fn(f64, f64) -> f64,
    {
        if expected.len() != actual.len() {
            return Err(NumErr::LengthMismatch {
                expected: expected.len(),
                actual: actual.len(),
            });
        }

        expected
            .iter()
            .zip(actual)
            .enumerate()
            .map(|(i, (&e, &a))| -> Result<f64> {
                let a = if bounded { self.clamp.admit(i, a)? } else { a };
                Ok(g(e, a))
            })
            .collect()
    }
}

/// Computes the per-element loss with the default clamping.
pub fn loss_forward(loss_fn: LossFn, expected: &[f64], actual: &[f64]) -> Result<Vec<f64>> {
    LossKernel::default().forward(loss_fn, expected, actual)
}

/// Computes the per-element loss derivative with the default clamping.
pub fn loss_derivative(loss_fn: LossFn, expected: &[f64], actual: &[f64]) -> Result<Vec<f64>> {
    LossKernel::default().derivative(loss_fn, expected, actual)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::LN_2;

    use super::*;
    use crate::arch::loss::DEFAULT_EPSILON;

    const ALL: [LossFn; 4] = [
        LossFn::MeanSquaredError,
        LossFn::CrossEntropy,
        LossFn::BinaryCrossEntropy,
        LossFn::CategoricalCrossEntropy,
    ];

    fn close(a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-9)
    }

    #[test]
    fn mse() {
        let e = [1., 0.];

        assert_eq!(loss_forward(LossFn::MeanSquaredError, &e, &e), Ok(vec![0., 0.]));
        assert_eq!(
            loss_forward(LossFn::MeanSquaredError, &[1., 0.], &[0.5, 2.]),
            Ok(vec![0.25, 4.])
        );
        assert_eq!(
            loss_derivative(LossFn::MeanSquaredError, &[1., 0.], &[0.5, 2.]),
            Ok(vec![-0.5, 2.])
        );
    }

    #[test]
    fn length_mismatch() {
        for loss_fn in ALL {
            assert_eq!(
                loss_forward(loss_fn, &[1., 0.], &[1., 0., 0.]),
                Err(NumErr::LengthMismatch {
                    expected: 2,
                    actual: 3
                })
            );
            assert!(loss_derivative(loss_fn, &[1.], &[]).is_err());
        }
    }

    #[test]
    fn cross_entropy() {
        let forward = loss_forward(LossFn::CrossEntropy, &[1., 0.], &[0.5, 0.5]).unwrap();
        assert!(close(&forward, &[LN_2, LN_2]));

        let derivative = loss_derivative(LossFn::CrossEntropy, &[1., 0.], &[0.5, 0.5]).unwrap();
        assert!(close(&derivative, &[-2., 2.]));
    }

    #[test]
    fn binary_matches_cross_entropy() {
        let (e, a) = ([1., 0., 0.3], [0.9, 0.2, 0.6]);

        assert_eq!(
            loss_forward(LossFn::CrossEntropy, &e, &a),
            loss_forward(LossFn::BinaryCrossEntropy, &e, &a)
        );
        assert_eq!(
            loss_derivative(LossFn::CrossEntropy, &e, &a),
            loss_derivative(LossFn::BinaryCrossEntropy, &e, &a)
        );
    }

    #[test]
    fn categorical() {
        let forward =
            loss_forward(LossFn::CategoricalCrossEntropy, &[0., 1., 0.], &[0.2, 0.5, 0.3]).unwrap();
        assert!(close(&forward, &[0., LN_2, 0.]));

        let derivative =
            loss_derivative(LossFn::CategoricalCrossEntropy, &[0., 1., 0.], &[0.2, 0.5, 0.3])
                .unwrap();
        assert!(close(&derivative, &[0.2, -0.5, 0.3]));
    }

    #[test]
    fn clamps_edges() {
        for loss_fn in [LossFn::CrossEntropy, LossFn::CategoricalCrossEntropy] {
            let forward = loss_forward(loss_fn, &[1., 0.], &[0., 1.]).unwrap();
            assert!(forward.iter().all(|x| x.is_finite()));

            let derivative = loss_derivative(loss_fn, &[1., 0.], &[0., 1.]).unwrap();
            assert!(derivative.iter().all(|x| x.is_finite()));
        }

        let forward = loss_forward(LossFn::CrossEntropy, &[1.], &[0.]).unwrap();
        assert!((forward[0] + DEFAULT_EPSILON.ln()).abs() < 1e-9);
    }

    #[test]
    fn disabled_clamp_reports_domain() {
        let kernel = LossKernel::new(Clamp::Disabled).unwrap();

        assert_eq!(
            kernel.forward(LossFn::CrossEntropy, &[1., 0., 1.], &[0.5, 1., 0.]),
            Err(NumErr::Domain {
                index: 1,
                value: 1.
            })
        );
        assert!(
            kernel
                .derivative(LossFn::BinaryCrossEntropy, &[1.], &[0.])
                .is_err()
        );
        assert!(
            kernel
                .forward(LossFn::CategoricalCrossEntropy, &[1.], &[0.])
                .is_err()
        );

        // a - e is defined everywhere.
        assert_eq!(
            kernel.derivative(LossFn::CategoricalCrossEntropy, &[1.], &[0.]),
            Ok(vec![-1.])
        );
        assert_eq!(
            kernel.forward(LossFn::MeanSquaredError, &[0.], &[3.]),
            Ok(vec![9.])
        );
    }

    #[test]
    fn invalid_epsilon() {
        assert_eq!(
            LossKernel::new(Clamp::Epsilon(-1.)),
            Err(NumErr::InvalidEpsilon(-1.))
        );
        assert_eq!(
            LossKernel::new(Clamp::Epsilon(1e-17)),
            Err(NumErr::InvalidEpsilon(1e-17))
        );
    }

    #[test]
    fn nan_prediction_reports_domain() {
        for loss_fn in [LossFn::CrossEntropy, LossFn::CategoricalCrossEntropy] {
            assert!(matches!(
                loss_forward(loss_fn, &[0., 1.], &[0.5, f64::NAN]),
                Err(NumErr::Domain { index: 1, .. })
            ));
        }
        assert!(matches!(
            loss_derivative(LossFn::CrossEntropy, &[1.], &[f64::NAN]),
            Err(NumErr::Domain { index: 0, .. })
        ));
    }

    #[test]
    fn mean() {
        let kernel = LossKernel::default();

        assert_eq!(kernel.mean(LossFn::MeanSquaredError, &[], &[]), Ok(0.));
        assert_eq!(
            kernel.mean(LossFn::MeanSquaredError, &[0., 0.], &[1., 3.]),
            Ok(5.)
        );
    }

    #[test]
    fn pure() {
        let (e, a) = ([0.1, 0.9, 0.5], [0.3, 0.7, 0.5]);

        for loss_fn in ALL {
            assert_eq!(loss_forward(loss_fn, &e, &a), loss_forward(loss_fn, &e, &a));
            assert_eq!(
                loss_derivative(loss_fn, &e, &a),
                loss_derivative(loss_fn, &e, &a)
            );
        }
    }
}
