//! Effective emissivity of the two cavity-facing surfaces.

use uom::si::{f64::Length, length::meter};

use super::CorrelationError;

/// Effective emissivity of two infinite parallel surfaces.
///
/// `e = 1/(1/ε1 + 1/ε2 − 1)`
///
/// # Errors
///
/// Returns [`CorrelationError::InvalidEmissivity`] if either emissivity is
/// zero, negative, or not a number.
///
/// # Example
///
/// ```
/// use twine_envelope::support::heat_transfer::effective_emissivity_parallel;
///
/// let e = effective_emissivity_parallel(0.9, 0.9).unwrap();
/// assert!((e - 0.9 / 1.1).abs() < 1e-12);
/// ```
pub fn effective_emissivity_parallel(
    emissivity_1: f64,
    emissivity_2: f64,
) -> Result<f64, CorrelationError> {
    check_emissivity(emissivity_1)?;
    check_emissivity(emissivity_2)?;

    Ok(1.0 / (1.0 / emissivity_1 + 1.0 / emissivity_2 - 1.0))
}

/// Effective emissivity of a cavity bounded by furring members.
///
/// The cavity cross-section is a `l_d × l_s` rectangle whose short sides are
/// the furring members. The view-factor term
/// `F = ½·(1 + √(1 + (l_d/l_s)²) − l_d/l_s)`
/// replaces the unit view factor of infinite plates:
///
/// `e = 1/(1/ε1 + 1/ε2 − 2 + 1/F)`
///
/// As `l_s` grows the result approaches [`effective_emissivity_parallel`].
///
/// # Errors
///
/// Returns [`CorrelationError::InvalidEmissivity`] for a non-positive
/// emissivity and [`CorrelationError::InvalidLength`] for a non-positive depth
/// or spacing.
pub fn effective_emissivity_two_dimension(
    emissivity_1: f64,
    emissivity_2: f64,
    l_d: Length,
    l_s: Length,
) -> Result<f64, CorrelationError> {
    check_emissivity(emissivity_1)?;
    check_emissivity(emissivity_2)?;
    check_length("cavity depth", l_d)?;
    check_length("furring spacing", l_s)?;

    let ratio = l_d.get::<meter>() / l_s.get::<meter>();
    let view_factor = 0.5 * (1.0 + (1.0 + ratio.powi(2)).sqrt() - ratio);

    Ok(1.0 / (1.0 / emissivity_1 + 1.0 / emissivity_2 - 2.0 + 1.0 / view_factor))
}

fn check_emissivity(value: f64) -> Result<(), CorrelationError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(CorrelationError::InvalidEmissivity { value })
    }
}

pub(super) fn check_length(name: &'static str, length: Length) -> Result<(), CorrelationError> {
    if length.get::<meter>() > 0.0 {
        Ok(())
    } else {
        Err(CorrelationError::InvalidLength { name, length })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::millimeter;

    #[test]
    fn parallel_is_symmetric() {
        for (a, b) in [(0.9, 0.1), (0.05, 0.95), (0.3, 0.7), (1.0, 0.5)] {
            assert_eq!(
                effective_emissivity_parallel(a, b).unwrap(),
                effective_emissivity_parallel(b, a).unwrap(),
            );
        }
    }

    #[test]
    fn parallel_black_bodies() {
        assert_relative_eq!(effective_emissivity_parallel(1.0, 1.0).unwrap(), 1.0);
        assert_relative_eq!(effective_emissivity_parallel(1.0, 0.4).unwrap(), 0.4);
    }

    #[test]
    fn parallel_rejects_non_positive() {
        assert_eq!(
            effective_emissivity_parallel(0.0, 0.9),
            Err(CorrelationError::InvalidEmissivity { value: 0.0 })
        );
        assert!(effective_emissivity_parallel(0.9, -0.1).is_err());
        assert!(effective_emissivity_parallel(f64::NAN, 0.9).is_err());
    }

    #[test]
    fn two_dimension_approaches_parallel_for_wide_spacing() {
        let e_2d = effective_emissivity_two_dimension(
            0.9,
            0.9,
            Length::new::<meter>(0.05),
            Length::new::<meter>(100.0),
        )
        .unwrap();
        let e_parallel = effective_emissivity_parallel(0.9, 0.9).unwrap();

        assert_relative_eq!(e_2d, e_parallel, max_relative = 1e-3);
    }

    #[test]
    fn two_dimension_is_reduced_by_close_furring() {
        let e_2d = effective_emissivity_two_dimension(
            0.9,
            0.9,
            Length::new::<millimeter>(50.0),
            Length::new::<millimeter>(455.0),
        )
        .unwrap();

        // l_d/l_s = 50/455, F = 0.5·(1 + √(1 + r²) − r)
        let r: f64 = 50.0 / 455.0;
        let f = 0.5 * (1.0 + (1.0 + r * r).sqrt() - r);
        let expected = 1.0 / (1.0 / 0.9 + 1.0 / 0.9 - 2.0 + 1.0 / f);

        assert_relative_eq!(e_2d, expected, epsilon = 1e-12);
        assert!(e_2d < effective_emissivity_parallel(0.9, 0.9).unwrap());
    }

    #[test]
    fn two_dimension_rejects_zero_spacing() {
        let err = effective_emissivity_two_dimension(
            0.9,
            0.9,
            Length::new::<meter>(0.05),
            Length::new::<meter>(0.0),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CorrelationError::InvalidLength {
                name: "furring spacing",
                ..
            }
        ));
    }
}
