//! Heat flows through a solved wall, per unit wall area.
//!
//! Positive flows run from outdoors toward the room.

use uom::si::{
    f64::{HeatFluxDensity, ThermodynamicTemperature},
    heat_flux_density::watt_per_square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use super::{Node, WallStatusValues, resolved::Resolved};

/// Heat flow breakdown of a solved ventilated wall.
///
/// At a converged state the outdoor-surface flow equals the indoor-surface
/// flow plus the exhaust, and the exhaust equals the cavity air gain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatFlows {
    /// Outdoor film, `h_out·(θ_SAT − θ0)`.
    pub outdoor_surface: HeatFluxDensity,

    /// Conduction through the outer leaf, `C1·(θ0 − θ1)`.
    pub outer_leaf: HeatFluxDensity,

    /// Convection across the cavity, `h_cv·(θ1 − θ2)`.
    pub cavity_convective: HeatFluxDensity,

    /// Radiation across the cavity, `h_rv·(θ1 − θ2)`.
    pub cavity_radiative: HeatFluxDensity,

    /// Convective gain of the cavity air from both facing surfaces.
    pub cavity_air_gain: HeatFluxDensity,

    /// Conduction through the inner leaf, `C2·(θ2 − θ3)`.
    pub inner_leaf: HeatFluxDensity,

    /// Indoor film, `h_in·(θ3 − θr)`.
    pub indoor_surface: HeatFluxDensity,

    /// Enthalpy carried out by the ventilation air. Zero for a sealed cavity.
    pub exhaust: HeatFluxDensity,

    /// Air temperature at the cavity outlet.
    ///
    /// For a sealed cavity this is the cavity air temperature.
    pub outlet_temperature: ThermodynamicTemperature,
}

impl HeatFlows {
    pub(super) fn new(resolved: &Resolved<'_>, values: &WallStatusValues) -> Self {
        let t = &values.temperatures;
        let [t0, t1, t2, t3, t4] = Node::ALL.map(|node| t[node]);
        let h_cv = values.h_cv.get::<watt_per_square_meter_kelvin>();
        let h_rv = values.h_rv.get::<watt_per_square_meter_kelvin>();
        let r = resolved;

        let (exhaust, outlet) = if r.is_ventilated() {
            // Exponential approach of the air toward the mean surface temperature.
            let t_m = 0.5 * (t1 + t2);
            let outlet = t_m + (r.theta_e - t_m) * (-r.beta(h_cv) * r.l_h).exp();
            let v_vent = r.v_a * r.l_d * r.l_w;
            let exhaust = r.rho_c * v_vent * (outlet - r.theta_e) / (r.l_h * r.l_w);
            (exhaust, outlet)
        } else {
            (0.0, t4)
        };

        Self {
            outdoor_surface: flux(r.h_out * (r.theta_sat - t0)),
            outer_leaf: flux(r.c_1 * (t0 - t1)),
            cavity_convective: flux(h_cv * (t1 - t2)),
            cavity_radiative: flux(h_rv * (t1 - t2)),
            cavity_air_gain: flux(h_cv * (t1 - t4) + h_cv * (t2 - t4)),
            inner_leaf: flux(r.c_2 * (t2 - t3)),
            indoor_surface: flux(r.h_in * (t3 - r.theta_r)),
            exhaust: flux(exhaust),
            outlet_temperature: ThermodynamicTemperature::new::<degree_celsius>(outlet),
        }
    }
}

fn flux(value: f64) -> HeatFluxDensity {
    HeatFluxDensity::new::<watt_per_square_meter>(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Velocity, velocity::meter_per_second};

    use crate::models::thermal::vent_wall::core::{
        Parameters, WallConfig, solve::solve, test_support::reference_parameters,
    };

    fn flows(params: &Parameters) -> HeatFlows {
        let config = WallConfig::default();
        let resolved = Resolved::new(params, &config).unwrap();
        let values = solve(&resolved, |_| {}).unwrap();
        assert!(values.is_success());
        HeatFlows::new(&resolved, &values)
    }

    fn w(q: HeatFluxDensity) -> f64 {
        q.get::<watt_per_square_meter>()
    }

    #[test]
    fn reference_wall_global_balance() {
        let q = flows(&reference_parameters());

        assert_relative_eq!(w(q.outdoor_surface), 32.33, epsilon = 0.01);
        assert_relative_eq!(w(q.indoor_surface), -6.568, epsilon = 0.01);
        assert_relative_eq!(w(q.exhaust), 38.90, epsilon = 0.01);

        assert_relative_eq!(
            w(q.outdoor_surface),
            w(q.indoor_surface) + w(q.exhaust),
            epsilon = 1e-6
        );
        assert_relative_eq!(w(q.exhaust), w(q.cavity_air_gain), epsilon = 1e-6);
    }

    #[test]
    fn node_flows_are_continuous() {
        let q = flows(&reference_parameters());

        assert_relative_eq!(w(q.outdoor_surface), w(q.outer_leaf), epsilon = 1e-8);
        assert_relative_eq!(w(q.inner_leaf), w(q.indoor_surface), epsilon = 1e-8);
        assert_relative_eq!(
            w(q.outer_leaf),
            w(q.inner_leaf) + w(q.cavity_air_gain),
            epsilon = 1e-6
        );
    }

    #[test]
    fn sealed_cavity_has_no_exhaust() {
        let params = Parameters {
            v_a: Velocity::new::<meter_per_second>(0.0),
            ..reference_parameters()
        };
        let q = flows(&params);

        assert_eq!(w(q.exhaust), 0.0);
        assert_relative_eq!(
            w(q.outdoor_surface),
            w(q.indoor_surface),
            epsilon = 1e-6
        );
    }

    #[test]
    fn outlet_air_is_between_inlet_and_surfaces() {
        let q = flows(&reference_parameters());
        let outlet = q.outlet_temperature.get::<degree_celsius>();

        // Inlet at 0 °C, cavity surfaces near 6 and 8 °C.
        assert!(outlet > 0.0 && outlet < 6.0);
    }
}
