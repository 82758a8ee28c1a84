//! Building the array to sort
//!
//! Either a random demo array (values in `1..=n*4`, reproducible with a
//! seed) or an explicit comma-separated list.

use crate::errors::InputError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random array of `n` values in `1..=n*4`
pub fn random_values(n: usize, seed: Option<u64>) -> Result<Vec<u64>, InputError> {
    if n == 0 {
        return Err(InputError::EmptyCount);
    }
    let high = u64::try_from(n)
        .ok()
        .and_then(|n| n.checked_mul(4))
        .ok_or(InputError::CountTooLarge(n))?;
    let values = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..n).map(|_| rng.random_range(1..=high)).collect()
        }
        None => {
            let mut rng = rand::rng();
            (0..n).map(|_| rng.random_range(1..=high)).collect()
        }
    };
    Ok(values)
}

/// Parse a list such as `5,1, 4` into values
///
/// An empty list is a valid (already sorted) input.
pub fn parse_values(list: &str) -> Result<Vec<u64>, InputError> {
    list
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<u64>()
                .map_err(|_| InputError::InvalidValue(item.to_string()))
        })
        .collect()
}
