use crate::mean;
use crate::sequence_generator::{RandomGenerator, SequentialGenerator, SequentialOrder};

#[test]
fn sequential_mean() {
    for num in vec![1, 2, 3, 10, 1000, 1001] {
        check_mean(SequentialGenerator::new(17., num, SequentialOrder::Ascending), 17., num);
        check_mean(SequentialGenerator::new(17., num, SequentialOrder::Descending), 17., num);
    }
}

#[test]
fn random_mean() {
    for num in vec![1, 2, 3, 10, 1000, 1001] {
        for seed in vec![1, 2, 17] {
            check_mean(RandomGenerator::new(17., num, seed), 17., num);
        }
    }
}

#[test]
fn negative_center() {
    check_mean(SequentialGenerator::new(-2.5, 11, SequentialOrder::Ascending), -2.5, 11);
    check_mean(RandomGenerator::new(-2.5, 11, 17), -2.5, 11);
}

fn check_mean<T>(gen: T, value: f64, num: usize)
where
    T: Iterator<Item = f64> + ExactSizeIterator,
{
    assert_eq!(gen.len(), num);

    let values: Vec<f64> = gen.collect();
    assert_eq!(values.len(), num);

    let actual = mean(&values);
    assert!(
        (actual - value).abs() < 1e-9,
        "Expected mean {} but got {} for values: {:?}",
        value,
        actual,
        values
    );
}
