//! Iterators producing sequences whose mean is known in advance, used to
//! exercise and benchmark the mean computation
mod random;
mod sequential;

pub use random::*;
pub use sequential::*;
