//! Parameters and configuration reduced to plain SI numbers.

use uom::si::{
    angle::degree,
    f64::HeatTransfer,
    heat_flux_density::watt_per_square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::{StrictlyPositive, UnitIntervalLowerOpen},
    heat_transfer::{
        CorrelationError, effective_emissivity_parallel, effective_emissivity_two_dimension,
        nusselt,
    },
};

use super::{EmissivityModel, InputError, NodeTemperatures, Parameters, SolveError, WallConfig};

/// Validated inputs of one wall evaluation.
///
/// Temperatures are in °C, lengths in m, conductances in W/(m²·K).
#[derive(Debug, Clone, Copy)]
pub(super) struct Resolved<'a> {
    pub params: &'a Parameters,
    pub config: &'a WallConfig,
    pub theta_e: f64,
    pub theta_r: f64,
    /// Sol-air temperature `θe + a·J/h_out`.
    pub theta_sat: f64,
    pub h_out: f64,
    pub h_in: f64,
    pub c_1: f64,
    pub c_2: f64,
    pub l_h: f64,
    pub l_w: f64,
    pub l_d: f64,
    pub v_a: f64,
    pub emissivity: f64,
    /// Volumetric heat capacity of the inlet (outdoor) air, J/(m³·K).
    pub rho_c: f64,
}

impl<'a> Resolved<'a> {
    /// Validates the inputs and evaluates the temperature-independent values.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Input`] for out-of-bounds parameters, film
    /// coefficients or relaxation, and [`SolveError::Correlation`] for an
    /// inclination outside `[0°, 90°]` or unavailable inlet air properties.
    pub fn new(params: &'a Parameters, config: &'a WallConfig) -> Result<Self, SolveError> {
        params.validate()?;
        nusselt::check_inclination(params.angle)?;
        StrictlyPositive::new(config.films.outdoor)
            .map_err(|err| InputError::new("films.outdoor", err))?;
        StrictlyPositive::new(config.films.indoor)
            .map_err(|err| InputError::new("films.indoor", err))?;
        UnitIntervalLowerOpen::new(config.solver.relaxation)
            .map_err(|err| InputError::new("solver.relaxation", err))?;

        let emissivity = match config.emissivity {
            EmissivityModel::Parallel => {
                effective_emissivity_parallel(params.emissivity_1, params.emissivity_2)?
            }
            EmissivityModel::TwoDimensional => effective_emissivity_two_dimension(
                params.emissivity_1,
                params.emissivity_2,
                params.l_d,
                params.l_s,
            )?,
        };

        let rho_c = config
            .correlations
            .air
            .properties(params.theta_e)
            .map_err(CorrelationError::from)?
            .volumetric_heat_capacity();

        let theta_e = params.theta_e.get::<degree_celsius>();
        let h_out = w_m2k(config.films.outdoor);

        Ok(Self {
            params,
            config,
            theta_e,
            theta_r: params.theta_r.get::<degree_celsius>(),
            theta_sat: theta_e
                + params.a_surf * params.j_surf.get::<watt_per_square_meter>() / h_out,
            h_out,
            h_in: w_m2k(config.films.indoor),
            c_1: w_m2k(params.c_1),
            c_2: w_m2k(params.c_2),
            l_h: params.l_h.get::<meter>(),
            l_w: params.l_w.get::<meter>(),
            l_d: params.l_d.get::<meter>(),
            v_a: params.v_a.get::<meter_per_second>(),
            emissivity,
            rho_c,
        })
    }

    /// Cavity coefficients `(h_cv, h_rv)` at the given node temperatures.
    ///
    /// # Errors
    ///
    /// Returns a [`CorrelationError`] if the convective correlation fails.
    pub fn coefficients(&self, t: &NodeTemperatures) -> Result<(f64, f64), CorrelationError> {
        let surfaces = t.cavity_surfaces();
        let corr = &self.config.correlations;
        let modes = self.config.modes;

        let h_cv = corr.convective_coefficient(
            modes.convective,
            self.params.v_a,
            surfaces,
            self.params.angle,
            self.params.l_h,
            self.params.l_d,
        )?;
        let h_rv = corr.radiative_coefficient(modes.radiative, surfaces, self.emissivity);

        Ok((w_m2k(h_cv), w_m2k(h_rv)))
    }

    /// Advection weight `β = 2·h_cv·l_w/(ρ·c·v_a·l_d·l_w)`, in 1/m.
    ///
    /// Only meaningful for a ventilated cavity.
    pub fn beta(&self, h_cv: f64) -> f64 {
        let v_vent = self.v_a * self.l_d * self.l_w;
        2.0 * h_cv * self.l_w / (self.rho_c * v_vent)
    }

    pub fn is_ventilated(&self) -> bool {
        self.v_a > 0.0
    }

    /// Whether the cavity is vertical, which selects the wall (rather than
    /// roof) standard surface resistances.
    pub fn is_vertical(&self) -> bool {
        (self.params.angle.get::<degree>() - 90.0).abs() < 1e-9
    }
}

fn w_m2k(h: HeatTransfer) -> f64 {
    h.get::<watt_per_square_meter_kelvin>()
}
