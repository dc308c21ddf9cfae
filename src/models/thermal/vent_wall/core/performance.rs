//! Effective U-value and solar heat gain of a ventilated wall.

use uom::si::{
    f64::{HeatFluxDensity, HeatTransfer, ThermodynamicTemperature},
    heat_flux_density::watt_per_square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use super::{Node, WallStatusValues, resolved::Resolved};

/// Below this, `h_cv + h_rv` is treated as no cavity exchange, W/(m²·K).
const MIN_CAVITY_CONDUCTANCE: f64 = 0.001;

/// Below this, `θ_SAT − θr` is treated as no driving difference, K.
const MIN_DRIVING_DIFFERENCE: f64 = 0.001;

/// Standard surface resistances `(outdoor, indoor)`, in m²·K/W.
const WALL_SURFACE_RESISTANCES: (f64, f64) = (0.11, 0.11);
const ROOF_SURFACE_RESISTANCES: (f64, f64) = (0.09, 0.09);

/// Performance of the wall as seen from the room.
///
/// Values that are undefined for the given state are NaN: `θ_as,e` and
/// `U'_s` when the cavity exchanges no heat, and `k_e` (with `U_e`, `η_e`)
/// when the sol-air and indoor temperatures coincide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceFactors {
    /// Sol-air temperature, `θ_SAT = θe + a_surf·J_surf/h_out`.
    pub theta_sat: ThermodynamicTemperature,

    /// Equivalent cavity temperature seen by the inner leaf.
    ///
    /// `θ_as,e = (θ_as·h_cv + θ1·h_rv)/(h_cv + h_rv)`.
    pub theta_as_e: ThermodynamicTemperature,

    /// Correction factor `k_e = (θ_as,e − θr)/(θ_SAT − θr)`.
    pub k_e: f64,

    /// Code baseline U-value from `C2` and standard surface resistances.
    pub u_s: HeatTransfer,

    /// U-value from the cavity to the room using the solved `h_cv` and `h_rv`.
    pub u_s_dash: HeatTransfer,

    /// Effective U-value, `U_e = U'_s·k_e`.
    pub u_e: HeatTransfer,

    /// Solar heat gain coefficient, `η_e = U_e·a_surf/h_out`.
    pub eta_e: f64,

    /// Heat flow into the room, `U'_s·(θ_as,e − θr)`.
    pub q_room_side: HeatFluxDensity,
}

impl PerformanceFactors {
    pub(super) fn new(resolved: &Resolved<'_>, values: &WallStatusValues) -> Self {
        let r = resolved;
        let t = &values.temperatures;
        let h_cv = values.h_cv.get::<watt_per_square_meter_kelvin>();
        let h_rv = values.h_rv.get::<watt_per_square_meter_kelvin>();
        let h_cavity = h_cv + h_rv;

        let theta_as_e = if h_cavity.abs() < MIN_CAVITY_CONDUCTANCE {
            f64::NAN
        } else {
            (t[Node::CavityAir] * h_cv + t[Node::CavityOuter] * h_rv) / h_cavity
        };

        let k_e = if (r.theta_sat - r.theta_r).abs() < MIN_DRIVING_DIFFERENCE {
            f64::NAN
        } else {
            (theta_as_e - r.theta_r) / (r.theta_sat - r.theta_r)
        };

        let (r_se, r_si) = if r.is_vertical() {
            WALL_SURFACE_RESISTANCES
        } else {
            ROOF_SURFACE_RESISTANCES
        };
        let u_s = 1.0 / (r_se + 1.0 / r.c_2 + r_si);

        let u_s_dash = if h_cavity.abs() < MIN_CAVITY_CONDUCTANCE {
            f64::NAN
        } else {
            1.0 / (1.0 / u_s - r_se + 1.0 / h_cavity)
        };

        let u_e = u_s_dash * k_e;

        Self {
            theta_sat: ThermodynamicTemperature::new::<degree_celsius>(r.theta_sat),
            theta_as_e: ThermodynamicTemperature::new::<degree_celsius>(theta_as_e),
            k_e,
            u_s: HeatTransfer::new::<watt_per_square_meter_kelvin>(u_s),
            u_s_dash: HeatTransfer::new::<watt_per_square_meter_kelvin>(u_s_dash),
            u_e: HeatTransfer::new::<watt_per_square_meter_kelvin>(u_e),
            eta_e: u_e * r.params.a_surf / r.h_out,
            q_room_side: HeatFluxDensity::new::<watt_per_square_meter>(
                u_s_dash * (theta_as_e - r.theta_r),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        angle::degree,
        f64::{Angle, HeatFluxDensity},
    };

    use crate::models::thermal::vent_wall::core::{
        Parameters, WallConfig, solve::solve, test_support::reference_parameters,
    };

    fn factors(params: &Parameters) -> PerformanceFactors {
        let config = WallConfig::default();
        let resolved = Resolved::new(params, &config).unwrap();
        let values = solve(&resolved, |_| {}).unwrap();
        assert!(values.is_success());
        PerformanceFactors::new(&resolved, &values)
    }

    #[test]
    fn reference_wall() {
        let pf = factors(&reference_parameters());

        assert_relative_eq!(pf.theta_sat.get::<degree_celsius>(), 16.0, epsilon = 1e-12);
        assert_relative_eq!(pf.theta_as_e.get::<degree_celsius>(), 5.3276, epsilon = 1e-3);
        assert_relative_eq!(pf.k_e, 3.6681, epsilon = 1e-3);
        assert_relative_eq!(
            pf.u_s.get::<watt_per_square_meter_kelvin>(),
            1.0 / 2.22,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            pf.u_s_dash.get::<watt_per_square_meter_kelvin>(),
            0.44788,
            epsilon = 1e-4
        );
        assert_relative_eq!(
            pf.u_e.get::<watt_per_square_meter_kelvin>(),
            1.64287,
            epsilon = 1e-3
        );
        assert_relative_eq!(pf.eta_e, 0.052572, epsilon = 1e-4);
    }

    #[test]
    fn room_side_flow_matches_indoor_film() {
        let pf = factors(&reference_parameters());

        // Close to the solved indoor-surface flow of about -6.57 W/m².
        let q = pf.q_room_side.get::<watt_per_square_meter>();
        assert_relative_eq!(q, -6.5715, epsilon = 1e-3);
        assert_relative_eq!(
            q,
            pf.u_e.get::<watt_per_square_meter_kelvin>() * (16.0 - 20.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn roof_uses_roof_surface_resistances() {
        let params = Parameters {
            angle: Angle::new::<degree>(30.0),
            ..reference_parameters()
        };
        let pf = factors(&params);

        assert_relative_eq!(
            pf.u_s.get::<watt_per_square_meter_kelvin>(),
            1.0 / 2.18,
            epsilon = 1e-12
        );
    }

    #[test]
    fn no_driving_difference_gives_nan_correction() {
        let twenty = ThermodynamicTemperature::new::<degree_celsius>(20.0);
        let params = Parameters {
            theta_e: twenty,
            theta_r: twenty,
            a_surf: 0.0,
            j_surf: HeatFluxDensity::new::<watt_per_square_meter>(500.0),
            ..reference_parameters()
        };
        let pf = factors(&params);

        assert!(pf.k_e.is_nan());
        assert!(pf.u_e.value.is_nan());
        assert!(pf.eta_e.is_nan());
        assert!(pf.u_s_dash.value.is_finite());
        assert_relative_eq!(pf.q_room_side.get::<watt_per_square_meter>(), 0.0, epsilon = 1e-9);
    }
}
