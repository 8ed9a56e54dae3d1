use std::cmp::Ordering;

use crate::support::constraint::{Constrained, Constraint, ConstraintError, UnitBounds};

/// Marker type enforcing that a value lies in the closed unit interval: `0 ≤ x ≤ 1`.
///
/// With `uom::si::f64::Ratio` this is the valid range of a relative humidity,
/// 0 % to 100 %.
///
/// # Examples
///
/// ```
/// use twine_psychro::support::constraint::UnitInterval;
/// use uom::si::{f64::Ratio, ratio::percent};
///
/// assert!(UnitInterval::new(Ratio::new::<percent>(0.0)).is_ok());
/// assert!(UnitInterval::new(Ratio::new::<percent>(100.0)).is_ok());
/// assert!(UnitInterval::new(Ratio::new::<percent>(100.1)).is_err());
/// assert!(UnitInterval::new(Ratio::new::<percent>(-0.1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs `Constrained<T, UnitInterval>` if 0 ≤ value ≤ 1.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, UnitInterval>, ConstraintError> {
        Constrained::<T, UnitInterval>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::support::constraint::*;

    use uom::si::{f64::Ratio, ratio::percent};

    #[test]
    fn relative_humidity_endpoints_are_valid() {
        assert!(UnitInterval::check(&Ratio::new::<percent>(0.0)).is_ok());
        assert!(UnitInterval::check(&Ratio::new::<percent>(50.456)).is_ok());
        assert!(UnitInterval::check(&Ratio::new::<percent>(100.0)).is_ok());
    }

    #[test]
    fn relative_humidity_out_of_range() {
        assert_eq!(
            UnitInterval::check(&Ratio::new::<percent>(-1.0)),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(
            UnitInterval::check(&Ratio::new::<percent>(100.5)),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            UnitInterval::check(&Ratio::new::<percent>(f64::NAN)),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn floats() {
        assert!(UnitInterval::new(0.5).is_ok());
        assert_eq!(UnitInterval::new(1.0 + 1e-15), Err(ConstraintError::AboveMaximum));
        assert_eq!(
            UnitInterval::new(f64::NEG_INFINITY),
            Err(ConstraintError::BelowMinimum)
        );
    }
}
