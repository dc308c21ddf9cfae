//! Natural-convection coefficients of single surfaces.
//!
//! Reference correlations from building-physics handbooks, used to
//! cross-check the cavity coefficients. Each takes the surface temperature
//! `t_w`, the far-field air temperature `t_f` and a characteristic length.
//! Air properties are evaluated at the film temperature `(t_w + t_f)/2`.
//!
//! Outside a correlation's validity range the Nusselt number is taken as
//! zero, so the coefficient is zero.

use uom::si::{
    f64::{Acceleration, HeatTransfer, Length, TemperatureInterval, ThermodynamicTemperature},
    acceleration::meter_per_second_squared,
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    thermo::{AirModel, AirProperties},
    units::TemperatureDifference,
};

use super::{CorrelationError, emissivity::check_length};

/// Orientation of a heated or cooled surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceOrientation {
    Vertical,
    /// Horizontal, with the exchanging face pointing up.
    FacingUp,
    /// Horizontal, with the exchanging face pointing down.
    FacingDown,
}

/// Reference natural-convection correlations for single surfaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceConvection {
    pub air: AirModel,
    pub gravity: Acceleration,
}

impl Default for SurfaceConvection {
    fn default() -> Self {
        Self {
            air: AirModel::default(),
            gravity: Acceleration::new::<meter_per_second_squared>(9.8),
        }
    }
}

/// Dimensionless state of a surface film.
struct Film {
    air: AirProperties,
    pr: f64,
    gr: f64,
    /// Absolute surface-to-air difference, K.
    delta_t: f64,
    length: f64,
}

impl Film {
    fn h(&self, nu: f64) -> HeatTransfer {
        HeatTransfer::new::<watt_per_square_meter_kelvin>(
            nu * self.air.conductivity.get::<watt_per_meter_kelvin>() / self.length,
        )
    }
}

impl SurfaceConvection {
    /// Dimensional correlation `h = k·|ΔT|^0.25` from an architectural
    /// environmental engineering textbook (Takeda et al.).
    ///
    /// `k` is 1.98 for vertical, 2.67 for facing up and 0.755 for facing down.
    #[must_use]
    pub fn takeda(delta_t: TemperatureInterval, orientation: SurfaceOrientation) -> HeatTransfer {
        let k = match orientation {
            SurfaceOrientation::Vertical => 1.98,
            SurfaceOrientation::FacingUp => 2.67,
            SurfaceOrientation::FacingDown => (0.64 + 0.87) / 2.0,
        };

        HeatTransfer::new::<watt_per_square_meter_kelvin>(
            k * delta_t.get::<delta_kelvin>().abs().powf(0.25),
        )
    }

    /// Correlation of the SHASE (air-conditioning and sanitary engineering) handbook.
    ///
    /// # Errors
    ///
    /// Fails if `length` is not positive or air properties are unavailable.
    pub fn shase(
        &self,
        t_w: ThermodynamicTemperature,
        t_f: ThermodynamicTemperature,
        length: Length,
        orientation: SurfaceOrientation,
    ) -> Result<HeatTransfer, CorrelationError> {
        let film = self.film(t_w, t_f, length)?;
        let ra = film.gr * film.pr;

        let nu = match orientation {
            SurfaceOrientation::Vertical if ra < 1e9 => {
                let pr = film.pr;
                let f_pr = 0.75 * (pr / (2.4 + 4.9 * pr.sqrt() + 5.0 * pr)).powf(0.25);
                4.0 / 3.0 * f_pr * ra.powf(0.25)
            }
            SurfaceOrientation::Vertical => 0.13 * film.gr.cbrt(),
            SurfaceOrientation::FacingUp if 3e5 < ra && ra < 3e10 => 0.27 * ra.powf(0.25),
            SurfaceOrientation::FacingDown if 1e5 < ra && ra < 2e7 => 0.54 * ra.powf(0.25),
            SurfaceOrientation::FacingDown if 2e7 < ra && ra < 3e10 => 0.14 * ra.cbrt(),
            SurfaceOrientation::FacingUp | SurfaceOrientation::FacingDown => 0.0,
        };

        Ok(film.h(nu))
    }

    /// Dimensional correlation of a building services textbook (Kimura).
    ///
    /// # Errors
    ///
    /// Fails if `length` is not positive or air properties are unavailable.
    pub fn kimura(
        &self,
        t_w: ThermodynamicTemperature,
        t_f: ThermodynamicTemperature,
        length: Length,
        orientation: SurfaceOrientation,
    ) -> Result<HeatTransfer, CorrelationError> {
        let film = self.film(t_w, t_f, length)?;
        let ra = film.gr * film.pr;
        let laminar = (film.delta_t / film.length).powf(0.25);
        let turbulent = film.delta_t.cbrt();

        let h = match orientation {
            SurfaceOrientation::Vertical if ra < 1e9 => 1.42 * laminar,
            SurfaceOrientation::Vertical => 1.31 * turbulent,
            SurfaceOrientation::FacingUp if ra < 2e7 => 2.64 * laminar,
            SurfaceOrientation::FacingUp => 0.966 * turbulent,
            SurfaceOrientation::FacingDown => 1.31 * laminar,
        };

        Ok(HeatTransfer::new::<watt_per_square_meter_kelvin>(h))
    }

    /// Correlation of the ASHRAE Handbook of Fundamentals.
    ///
    /// `length` is the height for vertical surfaces and area over perimeter
    /// for horizontal ones.
    ///
    /// # Errors
    ///
    /// Fails if `length` is not positive or air properties are unavailable.
    pub fn ashrae(
        &self,
        t_w: ThermodynamicTemperature,
        t_f: ThermodynamicTemperature,
        length: Length,
        orientation: SurfaceOrientation,
    ) -> Result<HeatTransfer, CorrelationError> {
        let film = self.film(t_w, t_f, length)?;
        let pr = film.pr;
        let ra = film.gr * pr;
        let shape = 1.0 + (0.492 / pr).powf(9.0 / 16.0);

        let nu = match orientation {
            SurfaceOrientation::Vertical if 0.1 < ra && ra < 1e9 => {
                0.68 + 0.67 * ra.powf(0.25) / shape.powf(4.0 / 9.0)
            }
            SurfaceOrientation::Vertical if 1e9 < ra && ra < 1e12 => {
                (0.825 + 0.387 * ra.powf(1.0 / 6.0) / shape.powf(8.0 / 27.0)).powi(2)
            }
            SurfaceOrientation::FacingUp if 1.0 < ra && ra < 200.0 => 0.96 * ra.powf(1.0 / 6.0),
            SurfaceOrientation::FacingUp if 200.0 < ra && ra < 1e4 => 0.59 * ra.powf(0.25),
            SurfaceOrientation::FacingUp if 2.2e4 < ra && ra < 8e6 => 0.54 * ra.powf(0.25),
            SurfaceOrientation::FacingUp if 8e6 < ra && ra < 1.5e9 => 0.15 * ra.cbrt(),
            SurfaceOrientation::FacingDown if 1e5 < ra && ra < 1e10 => 0.27 * ra.powf(0.25),
            _ => 0.0,
        };

        Ok(film.h(nu))
    }

    /// Vertical parallel plates, from the JSME heat transfer data book.
    ///
    /// `height` is the plate height and `gap` the plate spacing. Uses the
    /// modified Rayleigh number `Ra' = Pr·Gr_b·b/L`.
    ///
    /// # Errors
    ///
    /// Fails if a length is not positive or air properties are unavailable.
    pub fn jsme_parallel_plates(
        &self,
        t_w: ThermodynamicTemperature,
        t_f: ThermodynamicTemperature,
        height: Length,
        gap: Length,
    ) -> Result<HeatTransfer, CorrelationError> {
        check_length("plate height", height)?;
        let film = self.film(t_w, t_f, gap)?;
        let pr = film.pr;
        let l = height.get::<meter>();

        let ra = pr * film.gr * film.length / l;
        let shape = 1.0 + (0.492 / pr).powf(9.0 / 16.0);
        let nu = ra / 24.0
            / (1.0 + (1.0_f64 / 18.0).powf(1.5) * shape.powf(2.0 / 3.0) * ra.powf(9.0 / 8.0))
                .powf(2.0 / 3.0);

        Ok(HeatTransfer::new::<watt_per_square_meter_kelvin>(
            nu * film.air.conductivity.get::<watt_per_meter_kelvin>() / l,
        ))
    }

    fn film(
        &self,
        t_w: ThermodynamicTemperature,
        t_f: ThermodynamicTemperature,
        length: Length,
    ) -> Result<Film, CorrelationError> {
        check_length("characteristic length", length)?;

        let t_film =
            ThermodynamicTemperature::new::<kelvin>(0.5 * (t_w.get::<kelvin>() + t_f.get::<kelvin>()));
        let air = self.air.properties(t_film)?;
        let delta_t = t_w.minus(t_f);

        Ok(Film {
            pr: air.prandtl(),
            gr: air.grashof(self.gravity, delta_t, length),
            air,
            delta_t: delta_t.get::<delta_kelvin>().abs(),
            length: length.get::<meter>(),
        })
    }
}
