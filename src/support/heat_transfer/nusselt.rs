//! Nusselt number correlations for enclosed air layers.
//!
//! Each function takes the Rayleigh number `Ra` of the layer, based on its
//! depth `l_d`, and returns the mean Nusselt number across it. [`cavity`]
//! selects the correlation by inclination:
//!
//! | Inclination | Correlation                                             |
//! |-------------|---------------------------------------------------------|
//! | 0°          | [`horizontal`], heated from below                       |
//! | (0°, 60°]   | [`inclined`], tilted Hollands form                      |
//! | (60°, 90°)  | linear in angle between the 60° anchor and [`vertical`] |
//! | 90°         | [`vertical`]                                            |

use uom::si::{
    angle::{degree, radian},
    f64::Angle,
};

use super::CorrelationError;

/// Tolerance on inclination comparisons, in degrees.
///
/// Degree/radian round trips through [`Angle`] are not exact.
const ANGLE_TOL_DEG: f64 = 1e-9;

/// Critical Rayleigh number of a horizontal layer heated from below.
const RA_CRITICAL: f64 = 1708.0;

/// Which 60° value anchors the interpolation between 60° and 90°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SixtyDegreeAnchor {
    /// The [`inclined`] correlation evaluated at 60°.
    ///
    /// The Nusselt number is continuous in inclination.
    #[default]
    Hollands,

    /// The dedicated 60° correlation, [`sixty_degree`].
    ///
    /// Jumps at 60° by up to about 20 % for typical wall cavities.
    ElSherbiny,
}

/// Horizontal layer heated from below.
///
/// - `Nu = 1` for `Ra ≤ 1708`
/// - `Nu = 1 + 1.44·(1 − 1708/Ra)` for `1708 < Ra ≤ 5830`
/// - `Nu = 1.44·(1 − 1708/Ra) + (Ra/5830)^(1/3)` above
#[must_use]
pub fn horizontal(ra: f64) -> f64 {
    inclined(ra, 0.0)
}

/// Layer tilted by `tilt` radians from horizontal, for tilts up to 60°.
///
/// With `x = Ra·cos(tilt)` and `s = sin(1.8·tilt)^1.6`:
///
/// - `Nu = 1` for `x ≤ 1708`
/// - `Nu = 1 + 1.44·(1 − 1708/x)·(1 − 1708·s/x)` for `1708 < x ≤ 5830`
/// - `Nu = 1.44·(1 − 1708/x)·(1 − 1708·s/x) + (x/5830)^(1/3)` above
#[must_use]
pub fn inclined(ra: f64, tilt: f64) -> f64 {
    let x = ra * tilt.cos();
    if x <= RA_CRITICAL {
        return 1.0;
    }

    let s = (1.8 * tilt).sin().powf(1.6);
    let k = 1.44 * (1.0 - RA_CRITICAL / x) * (1.0 - RA_CRITICAL * s / x);

    if x <= 5830.0 {
        1.0 + k
    } else {
        k + (x / 5830.0).cbrt()
    }
}

/// Vertical layer with depth-to-height ratio `aspect = l_d/l_h`.
///
/// The largest of a combined laminar/transition correlation, a
/// boundary-layer correlation in `Ra·aspect`, and a turbulent correlation.
#[must_use]
pub fn vertical(ra: f64, aspect: f64) -> f64 {
    let nu_ct = (1.0 + (0.104 * ra.powf(0.293) / (1.0 + (6310.0 / ra).powf(1.36))).powi(3)).cbrt();
    let nu_u1 = 0.242 * (ra * aspect).powf(0.273);
    let nu_ut = 0.0605 * ra.cbrt();

    nu_ct.max(nu_u1).max(nu_ut)
}

/// Layer inclined at exactly 60°, with `aspect = l_d/l_h`.
#[must_use]
pub fn sixty_degree(ra: f64, aspect: f64) -> f64 {
    let g = 0.5 / (1.0 + (ra / 3165.0).powf(20.6)).powf(0.1);
    let nu_1 = (1.0 + (0.0936 * ra.powf(0.314)).powi(7) / (1.0 + g)).powf(1.0 / 7.0);
    let nu_2 = (0.1044 + 0.1759 * aspect) * ra.powf(0.283);

    nu_1.max(nu_2)
}

/// Nusselt number of a cavity at inclination `angle` (0° horizontal, 90° vertical).
///
/// # Errors
///
/// Returns [`CorrelationError::UnsupportedGeometry`] if `angle` is outside
/// `[0°, 90°]` or not a number.
pub fn cavity(
    ra: f64,
    angle: Angle,
    aspect: f64,
    anchor: SixtyDegreeAnchor,
) -> Result<f64, CorrelationError> {
    let deg = check_inclination(angle)?;

    if deg.abs() <= ANGLE_TOL_DEG {
        return Ok(horizontal(ra));
    }
    if (deg - 90.0).abs() <= ANGLE_TOL_DEG {
        return Ok(vertical(ra, aspect));
    }
    if deg <= 60.0 {
        return Ok(inclined(ra, angle.get::<radian>()));
    }

    let nu_60 = match anchor {
        SixtyDegreeAnchor::Hollands => inclined(ra, 60.0_f64.to_radians()),
        SixtyDegreeAnchor::ElSherbiny => sixty_degree(ra, aspect),
    };
    let nu_90 = vertical(ra, aspect);

    Ok(nu_60 * (90.0 - deg) / 30.0 + nu_90 * (deg - 60.0) / 30.0)
}

/// Returns the inclination in degrees if a correlation covers it.
///
/// # Errors
///
/// Returns [`CorrelationError::UnsupportedGeometry`] outside `[0°, 90°]`.
pub fn check_inclination(angle: Angle) -> Result<f64, CorrelationError> {
    let deg = angle.get::<degree>();
    if (-ANGLE_TOL_DEG..=90.0 + ANGLE_TOL_DEG).contains(&deg) {
        Ok(deg)
    } else {
        Err(CorrelationError::UnsupportedGeometry { angle })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn deg(value: f64) -> Angle {
        Angle::new::<degree>(value)
    }

    #[test]
    fn horizontal_branches() {
        assert_eq!(horizontal(0.0), 1.0);
        assert_eq!(horizontal(1708.0), 1.0);

        let ra = 3000.0;
        assert_relative_eq!(horizontal(ra), 1.0 + 1.44 * (1.0 - 1708.0 / ra));

        let ra = 1e5;
        assert_relative_eq!(
            horizontal(ra),
            1.44 * (1.0 - 1708.0 / ra) + (ra / 5830.0).cbrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn horizontal_is_continuous_at_branch_bounds() {
        for bound in [1708.0, 5830.0] {
            assert_relative_eq!(
                horizontal(bound * (1.0 - 1e-12)),
                horizontal(bound * (1.0 + 1e-12)),
                epsilon = 1e-8
            );
        }
    }

    #[test]
    fn vertical_takes_largest_branch() {
        // Reference wall cavity: l_d = 0.05 m, l_h = 3.5 m.
        let aspect = 0.05 / 3.5;

        // Low Ra: conduction regime, Nu_ct is close to one.
        let nu = vertical(100.0, aspect);
        assert!((1.0..1.01).contains(&nu), "Nu = {nu}");

        // High Ra: turbulent branch dominates.
        let ra = 1e9;
        assert_relative_eq!(vertical(ra, aspect), 0.0605 * ra.cbrt(), epsilon = 1e-9);
    }

    #[test]
    fn vertical_handles_zero_rayleigh() {
        assert_relative_eq!(vertical(0.0, 0.1), 1.0);
    }

    #[test]
    fn sixty_degree_correlation() {
        let ra = 1e6;
        let aspect = 0.05 / 3.5;
        let nu = sixty_degree(ra, aspect);

        let g = 0.5 / (1.0 + (ra / 3165.0_f64).powf(20.6)).powf(0.1);
        let nu_1 = (1.0 + (0.0936 * ra.powf(0.314)).powi(7) / (1.0 + g)).powf(1.0 / 7.0);
        let nu_2 = (0.1044 + 0.1759 * aspect) * ra.powf(0.283);
        assert_relative_eq!(nu, nu_1.max(nu_2));
        assert!(nu > inclined(ra, 60.0_f64.to_radians()));
    }

    #[test]
    fn continuous_across_inclination_boundaries() {
        let aspect = 0.05 / 3.5;
        let anchor = SixtyDegreeAnchor::Hollands;

        for ra in [500.0, 4000.0, 2e4, 1e6] {
            let nu = |a: f64| cavity(ra, deg(a), aspect, anchor).unwrap();

            for boundary in [0.0, 60.0, 90.0] {
                let eps = 1e-7;
                let below = if boundary > 0.0 { nu(boundary - eps) } else { nu(boundary) };
                let above = if boundary < 90.0 { nu(boundary + eps) } else { nu(boundary) };

                assert_relative_eq!(below, nu(boundary), epsilon = 1e-5);
                assert_relative_eq!(above, nu(boundary), epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn el_sherbiny_anchor_is_used_above_sixty() {
        let ra = 1e6;
        let aspect = 0.05 / 3.5;

        let at_61 = |anchor| cavity(ra, deg(61.0), aspect, anchor).unwrap();
        let nu_90 = vertical(ra, aspect);

        assert_relative_eq!(
            at_61(SixtyDegreeAnchor::ElSherbiny),
            sixty_degree(ra, aspect) * 29.0 / 30.0 + nu_90 / 30.0,
            epsilon = 1e-12
        );
        assert!(at_61(SixtyDegreeAnchor::ElSherbiny) > at_61(SixtyDegreeAnchor::Hollands));
    }

    #[test]
    fn interpolates_linearly_between_sixty_and_ninety() {
        let ra = 2e5;
        let aspect = 0.02;
        let anchor = SixtyDegreeAnchor::Hollands;

        let nu_60 = inclined(ra, 60.0_f64.to_radians());
        let nu_90 = vertical(ra, aspect);
        let nu_75 = cavity(ra, deg(75.0), aspect, anchor).unwrap();

        assert_relative_eq!(nu_75, 0.5 * (nu_60 + nu_90), epsilon = 1e-9);
    }

    #[test]
    fn rejects_unsupported_inclinations() {
        for angle in [-1.0, 90.5, 180.0, f64::NAN] {
            let result = cavity(1e4, deg(angle), 0.01, SixtyDegreeAnchor::default());
            assert!(
                matches!(result, Err(CorrelationError::UnsupportedGeometry { .. })),
                "angle {angle} should be rejected"
            );
        }
    }

    #[test]
    fn accepts_round_tripped_vertical() {
        let angle = Angle::new::<radian>(std::f64::consts::FRAC_PI_2);
        let nu = cavity(1e6, angle, 0.01, SixtyDegreeAnchor::default()).unwrap();
        assert_relative_eq!(nu, vertical(1e6, 0.01));
    }
}
