use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator that will generate `num` evenly spaced values (step 1) centered
/// on `value`, so that their mean is exactly `value`
pub struct SequentialGenerator {
    // `value` could be simply added to `offset`, but we keep them separate to
    // avoid float imprecisions
    value: f64,
    position: usize,
    direction: f64,
    offset: f64,
    num: usize,
}

pub enum SequentialOrder {
    Ascending,
    Descending,
}

impl SequentialGenerator {
    pub fn new(value: f64, num: usize, order: SequentialOrder) -> SequentialGenerator {
        assert!(num > 0);
        let half_span = (num - 1) as f64 / 2.;
        let (direction, offset) = match order {
            SequentialOrder::Ascending => (1., -half_span),
            SequentialOrder::Descending => (-1., half_span),
        };
        SequentialGenerator {
            value,
            position: 0,
            direction,
            offset,
            num,
        }
    }
}

impl Iterator for SequentialGenerator {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        // v[i] = value + direction*i + offset
        if self.position == self.num {
            None
        } else {
            let r = self.value + (self.direction * self.position as f64 + self.offset);
            self.position += 1;
            Some(r)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.num - self.position;
        (size, Some(size))
    }
}

impl FusedIterator for SequentialGenerator {}

impl ExactSizeIterator for SequentialGenerator {}
