use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// # Examples
///
/// ```
/// use twine_psychro::support::constraint::NonNegative;
///
/// // A dry-air humidity ratio is allowed:
/// assert!(NonNegative::new(0.0).is_ok());
///
/// assert!(NonNegative::new(-0.001).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Ratio, ratio::ratio};

    #[test]
    fn humidity_ratios() {
        assert!(NonNegative::new(Ratio::new::<ratio>(0.0)).is_ok());
        assert!(NonNegative::new(Ratio::new::<ratio>(0.012)).is_ok());
        assert_eq!(
            NonNegative::check(&Ratio::new::<ratio>(-1e-6)),
            Err(ConstraintError::Negative)
        );
    }

    #[test]
    fn nan_is_rejected() {
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
    }
}
