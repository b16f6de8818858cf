use std::cmp::Ordering;
use std::fmt::{Debug, Display};

///Wrapper around the [`float_cmp::approx_eq!()`] macro for comparing coordinates
///and distances with a tolerance instead of bitwise.
///Two FPAs are considered equal if they are within a certain tolerance of each other.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl<T> From<T> for FPA
where
    T: Into<f64>,
{
    fn from(n: T) -> Self {
        FPA(n.into())
    }
}

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f64, self.0, other.0)
    }
}

impl PartialOrd<Self> for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}

impl Display for FPA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulated_rounding_error_compares_equal() {
        let mut sum = 0.0;
        for _ in 0..10 {
            sum += 0.1;
        }
        assert_ne!(sum, 1.0);
        assert_eq!(FPA(sum), FPA(1.0));
    }

    #[test]
    fn ordering_collapses_near_equal_values() {
        assert_eq!(
            FPA(2.0).partial_cmp(&FPA(2.0 + f64::EPSILON)),
            Some(Ordering::Equal)
        );
        assert_eq!(FPA(1.0).partial_cmp(&FPA(2.0)), Some(Ordering::Less));
        assert_eq!(FPA(3.0).partial_cmp(&FPA(2.0)), Some(Ordering::Greater));
    }
}
