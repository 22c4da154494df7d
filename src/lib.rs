#[cfg(test)]
mod tests;

pub mod input;

pub mod mean;

#[cfg(any(test, feature = "sequence-generator"))]
pub mod sequence_generator;

use crate::mean::MeanOperation;

pub trait Operation {
    type Item;
    type Output;

    fn create() -> Self;

    fn update(&mut self, value: Self::Item);

    fn finish(self) -> Self::Output;
}

/// Arithmetic mean of `values`: their sum, accumulated in input order,
/// divided by their count
/// An empty slice gives NaN (0 / 0)
pub fn mean(values: &[f64]) -> f64 {
    let mut state = MeanOperation::create();
    for &value in values {
        state.update(value);
    }
    state.finish()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn known_means() {
        assert_eq!(mean(&[1., 2., 3.]), 2.);
        assert_eq!(mean(&[5.]), 5.);
        assert_eq!(mean(&[-1., 1.]), 0.);
    }

    #[test]
    fn empty_is_nan() {
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn non_finite_values_propagate() {
        assert!(mean(&[1., f64::NAN, 3.]).is_nan());
        assert_eq!(mean(&[1., f64::INFINITY]), f64::INFINITY);
        assert!(mean(&[f64::INFINITY, f64::NEG_INFINITY]).is_nan());
    }
}
