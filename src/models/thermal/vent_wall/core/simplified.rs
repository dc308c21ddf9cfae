//! Closed-form approximations of the ventilated wall.
//!
//! These methods use the seasonal simplified coefficients, so they need no
//! iteration. They trade accuracy for transparency and are useful as a
//! cross-check of the detailed solve.

use nalgebra::{SMatrix, SVector};
use uom::si::{
    f64::{HeatFluxDensity, HeatTransfer, ThermodynamicTemperature},
    heat_flux_density::watt_per_square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::heat_transfer::Season;

use super::resolved::Resolved;

/// Cavity temperatures from the three-node linear approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CavityTemperatures {
    /// Cavity surface of the outer leaf, `θ1`.
    pub surface_outer: ThermodynamicTemperature,
    /// Mean cavity air temperature, `θ_as`.
    pub air: ThermodynamicTemperature,
    /// Cavity surface of the inner leaf, `θ2`.
    pub surface_inner: ThermodynamicTemperature,
    pub h_cv: HeatTransfer,
    pub h_rv: HeatTransfer,
}

/// Mean cavity air temperature from outdoor and indoor transmittances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanCavityAir {
    pub air: ThermodynamicTemperature,
    /// Transmittance from the sol-air temperature to the cavity, `U_o`.
    pub u_o: HeatTransfer,
    /// Transmittance from the room to the cavity, `U_i`.
    pub u_i: HeatTransfer,
}

/// Corrected U-value and solar heat gain of the whole wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectedPerformance {
    pub h_cv: HeatTransfer,
    pub h_rv: HeatTransfer,
    /// Corrected U-value, `U'`.
    pub u_dash: HeatTransfer,
    /// Corrected solar heat gain coefficient, `η'`.
    pub eta_dash: f64,
    /// Room-side heat flow, `U'·(θe − θr) + η'·J_surf`.
    pub q_room_side: HeatFluxDensity,
}

/// Seasonal coefficients and the resistances shared by every method.
struct Setup {
    h_cv: f64,
    h_rv: f64,
    /// Outdoor air to outer cavity surface, m²·K/W.
    r_o: f64,
    /// Inner cavity surface to room air, m²·K/W.
    r_i: f64,
    /// `β` for a ventilated cavity, `None` when sealed.
    beta: Option<f64>,
}

impl Setup {
    fn new(resolved: &Resolved<'_>, season: Season) -> Self {
        let r = resolved;
        let coeffs = r.config.correlations.simplified.season(season);
        let h_cv = coeffs
            .convective(r.params.v_a)
            .get::<watt_per_square_meter_kelvin>();
        let h_rv = coeffs
            .radiative(r.emissivity)
            .get::<watt_per_square_meter_kelvin>();

        Self {
            h_cv,
            h_rv,
            r_o: 1.0 / r.h_out + 1.0 / r.c_1,
            r_i: 1.0 / r.h_in + 1.0 / r.c_2,
            beta: r.is_ventilated().then(|| r.beta(h_cv)),
        }
    }

    /// Cavity-mean advection weight `(e^{−β·l_h} − 1)/(β·l_h)`, in `(−1, 0)`.
    /// Zero for a sealed cavity.
    fn mean_weight(&self, l_h: f64) -> f64 {
        self.beta
            .map_or(0.0, |beta| ((-beta * l_h).exp() - 1.0) / (beta * l_h))
    }

    /// Ventilation conductance `−2·h_cv·ε_s/(1 + ε_s)` of the cavity air to
    /// the inlet, W/(m²·K).
    fn ventilation_conductance(&self, l_h: f64) -> Option<f64> {
        self.beta.map(|_| {
            let eps = self.mean_weight(l_h);
            -2.0 * self.h_cv * eps / (1.0 + eps)
        })
    }

    fn h_cv(&self) -> HeatTransfer {
        HeatTransfer::new::<watt_per_square_meter_kelvin>(self.h_cv)
    }

    fn h_rv(&self) -> HeatTransfer {
        HeatTransfer::new::<watt_per_square_meter_kelvin>(self.h_rv)
    }
}

/// Solves the two cavity surfaces and the cavity air as a 3×3 linear system.
///
/// Temperatures are NaN if the system is singular.
pub(super) fn cavity_temperatures(resolved: &Resolved<'_>, season: Season) -> CavityTemperatures {
    let r = resolved;
    let s = Setup::new(r, season);
    let eps = s.mean_weight(r.l_h);
    let mid = 0.5 * (1.0 + eps);

    #[rustfmt::skip]
    let a = SMatrix::<f64, 3, 3>::new(
        1.0 / s.r_o + s.h_cv + s.h_rv, -s.h_cv, -s.h_rv,
        mid,                           -1.0,    mid,
        -s.h_rv,                       -s.h_cv, 1.0 / s.r_i + s.h_cv + s.h_rv,
    );
    let b = SVector::<f64, 3>::new(r.theta_sat / s.r_o, eps * r.theta_e, r.theta_r / s.r_i);

    let t = a
        .lu()
        .solve(&b)
        .map_or([f64::NAN; 3], |t| [t[0], t[1], t[2]]);

    CavityTemperatures {
        surface_outer: celsius(t[0]),
        air: celsius(t[1]),
        surface_inner: celsius(t[2]),
        h_cv: s.h_cv(),
        h_rv: s.h_rv(),
    }
}

/// Mean cavity air temperature as a blend of the inlet air and the
/// transmittance-weighted temperature `θ_we` of the cavity's surroundings.
pub(super) fn mean_cavity_air(resolved: &Resolved<'_>, season: Season) -> MeanCavityAir {
    let r = resolved;
    let s = Setup::new(r, season);
    let h_cavity = s.h_cv + s.h_rv;

    let u_o = 1.0 / (1.0 / r.h_out + 1.0 / r.c_1 + 1.0 / h_cavity);
    let u_i = 1.0 / (1.0 / h_cavity + 1.0 / r.c_2 + 1.0 / r.h_in);
    let theta_we = (u_o * r.theta_sat + u_i * r.theta_r) / (u_o + u_i);

    let x = if r.is_ventilated() {
        let w_h = (u_o + u_i) * r.l_w / (r.rho_c * r.v_a * r.l_d * r.l_w);
        let efficiency = 1.0 - (-w_h * r.l_h).exp();
        1.0 - efficiency / (w_h * r.l_h)
    } else {
        1.0
    };

    MeanCavityAir {
        air: celsius((1.0 - x) * r.theta_e + x * theta_we),
        u_o: HeatTransfer::new::<watt_per_square_meter_kelvin>(u_o),
        u_i: HeatTransfer::new::<watt_per_square_meter_kelvin>(u_i),
    }
}

/// Corrected U-value and η from a reduced resistance network.
pub(super) fn corrected_performance(
    resolved: &Resolved<'_>,
    season: Season,
) -> CorrectedPerformance {
    let r = resolved;
    let s = Setup::new(r, season);
    let h_v = 2.0 * s.h_rv + s.h_cv;
    let u_o = 1.0 / s.r_o;
    let u_i = 1.0 / s.r_i;

    // Resistance of the ventilation branch, absent for a sealed cavity.
    let r_vent = s
        .ventilation_conductance(r.l_h)
        .map(|g| 1.0 / g + s.h_rv / (h_v * s.h_cv));

    let h_v_dash = r_vent.map_or(h_v, |r_vent| h_v + 1.0 / r_vent);
    let buf = h_v_dash - h_v.powi(2) / (u_o + h_v);
    let u_dash = 1.0 / (1.0 / buf + 1.0 / h_v + 1.0 / u_i);

    let r_l = 1.0 / u_o + 1.0 / h_v;
    let r_r = 1.0 / u_i + 1.0 / h_v;
    let solar = r.params.a_surf / r.h_out;
    let eta_dash = match r_vent {
        Some(r_v) => r_v / (r_l * r_r + r_l * r_v + r_r * r_v) * solar,
        None => solar / (r_l + r_r),
    };

    performance(r, &s, u_dash, eta_dash)
}

/// Further-reduced variant of [`corrected_performance`] built from
/// series and parallel resistances only.
pub(super) fn reduced_performance(resolved: &Resolved<'_>, season: Season) -> CorrectedPerformance {
    let r = resolved;
    let s = Setup::new(r, season);
    let u_o = 1.0 / s.r_o;
    let u_i = 1.0 / s.r_i;

    // Conductance from the cavity to the ventilation air.
    let g_air = match s.ventilation_conductance(r.l_h) {
        Some(g) => 1.0 / (1.0 / g + 1.0 / s.h_cv),
        None => s.h_cv,
    };

    let r_u = 1.0 / (1.0 / (1.0 / u_o + 1.0 / s.h_rv) + g_air) + 1.0 / u_i;
    let r_eta = 1.0 / (1.0 / (1.0 / u_i + 1.0 / s.h_rv) + g_air) + 1.0 / u_o;

    let u_dash = 1.0 / r_u;
    let eta_dash = r.params.a_surf / (r.h_out * r_eta);

    performance(r, &s, u_dash, eta_dash)
}

fn performance(r: &Resolved<'_>, s: &Setup, u_dash: f64, eta_dash: f64) -> CorrectedPerformance {
    let j = r.params.j_surf.get::<watt_per_square_meter>();

    CorrectedPerformance {
        h_cv: s.h_cv(),
        h_rv: s.h_rv(),
        u_dash: HeatTransfer::new::<watt_per_square_meter_kelvin>(u_dash),
        eta_dash,
        q_room_side: HeatFluxDensity::new::<watt_per_square_meter>(
            u_dash * (r.theta_e - r.theta_r) + eta_dash * j,
        ),
    }
}

fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}
