use crate::Operation;
use std::iter::FromIterator;

/// Running sum and count of the values seen so far
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanOperation {
    count: usize,
    sum: f64,
}

impl MeanOperation {
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }
}

impl Operation for MeanOperation {
    type Item = f64;
    type Output = f64;

    fn create() -> Self {
        MeanOperation { count: 0, sum: 0. }
    }

    fn update(&mut self, value: Self::Item) {
        self.count += 1;
        self.sum += value;
    }

    fn finish(self) -> Self::Output {
        self.sum / (self.count as f64)
    }
}

impl Default for MeanOperation {
    fn default() -> Self {
        MeanOperation::create()
    }
}

impl Extend<f64> for MeanOperation {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.update(value);
        }
    }
}

impl FromIterator<f64> for MeanOperation {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut state = MeanOperation::create();
        state.extend(iter);
        state
    }
}
