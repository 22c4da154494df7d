use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator that will generate `num` random values whose mean is `value`
/// Values come in mirrored pairs `value + r` and `value - r`, with `r` in [0, 1)
/// When `num` is odd, `value` itself is emitted once at a random position
pub struct RandomGenerator {
    remaining: usize, // excluding the center value
    value: f64,
    published_value: bool,
    mirror: Option<f64>,
    rng: Pcg64,
}

impl RandomGenerator {
    pub fn new(value: f64, num: usize, seed: u64) -> RandomGenerator {
        assert!(num > 0);
        let odd = num % 2 == 1;
        RandomGenerator {
            remaining: if odd { num - 1 } else { num },
            value,
            published_value: !odd,
            mirror: None,
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl RandomGenerator {
    fn next_random(&mut self) -> f64 {
        self.rng.gen()
    }
}

impl Iterator for RandomGenerator {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        // Finish the current pair first
        if let Some(mirror) = self.mirror.take() {
            self.remaining -= 1;
            return Some(mirror);
        }

        // Check end of cursor
        if self.remaining == 0 && self.published_value {
            return None;
        }

        // Publish center value, with a chance proportional to the remaining pairs
        if !self.published_value {
            let remaining_ratio = 1. / (self.remaining / 2 + 1) as f64;
            if self.remaining == 0 || self.next_random() < remaining_ratio {
                self.published_value = true;
                return Some(self.value);
            }
        }

        // Start a new pair
        let delta = self.next_random();
        let (first, second) = if self.rng.gen::<bool>() {
            (self.value + delta, self.value - delta)
        } else {
            (self.value - delta, self.value + delta)
        };
        self.remaining -= 1;
        self.mirror = Some(second);
        Some(first)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let mut size = self.remaining;
        if !self.published_value {
            size += 1;
        }
        (size, Some(size))
    }
}

impl FusedIterator for RandomGenerator {}

impl ExactSizeIterator for RandomGenerator {}
