//! Digit-sum arithmetic shared by the scorer and the seed engine

/// Sums the base-10 digits of `n`
fn digit_sum_of(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduces a number to a single digit by repeatedly summing its digits
///
/// `9875` becomes `9 + 8 + 7 + 5 = 29`, then `2 + 9 = 11`, then `1 + 1 = 2`.
/// Numbers below ten are returned unchanged.
pub fn reduce_to_single_digit(mut n: u64) -> u8 {
    while n >= 10 {
        n = digit_sum_of(n);
    }
    n as u8
}

/// Sums the decimal digits appearing in `s`
///
/// Characters that are not decimal digits contribute nothing.
pub fn digit_sum(s: &str) -> u64 {
    s.chars()
        .filter_map(|c| c.to_digit(10))
        .map(u64::from)
        .sum()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_single_digits_unchanged() {
        for n in 0..10 {
            assert_eq!(u64::from(reduce_to_single_digit(n)), n);
        }
    }

    #[test]
    fn test_reduce_multi_digit() {
        assert_eq!(reduce_to_single_digit(9875), 2);
        assert_eq!(reduce_to_single_digit(10), 1);
        assert_eq!(reduce_to_single_digit(38), 2);
        assert_eq!(reduce_to_single_digit(99), 9);
        assert_eq!(reduce_to_single_digit(u64::MAX), 6);
    }

    #[test]
    fn test_reduce_always_in_range() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..1000 {
            assert!(reduce_to_single_digit(rng.u64(..)) <= 9);
        }
    }

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum("17123456789876543"), 86);
        assert_eq!(digit_sum("00000000000000005"), 5);
        assert_eq!(digit_sum(""), 0);
    }
}
