use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{
        Acceleration, Angle, HeatTransfer, Length, ThermodynamicTemperature, Velocity,
    },
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::{
    thermo::AirModel,
    units::{StefanBoltzmannConstant, TemperatureDifference, stefan_boltzmann},
};

use super::{
    ConvectiveMode, CorrelationError, RadiativeMode, SimplifiedCoefficients,
    emissivity::check_length,
    nusselt::{self, SixtyDegreeAnchor},
};

/// Forced-convection increment of `h_cv` per unit cavity air velocity, W/(m²·K) per m/s.
const FORCED_CONVECTION_SLOPE: f64 = 4.0;

/// Physical constants and options shared by the cavity coefficient correlations.
///
/// The cavity-facing surfaces are passed as `[θ1, θ2]`: the surface on the
/// outer-leaf side first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correlations {
    pub sigma: StefanBoltzmannConstant,
    pub gravity: Acceleration,
    pub air: AirModel,
    pub simplified: SimplifiedCoefficients,
    pub sixty_degree: SixtyDegreeAnchor,
}

impl Default for Correlations {
    fn default() -> Self {
        Self {
            sigma: stefan_boltzmann(5.67e-8),
            gravity: Acceleration::new::<meter_per_second_squared>(9.8),
            air: AirModel::default(),
            simplified: SimplifiedCoefficients::default(),
            sixty_degree: SixtyDegreeAnchor::default(),
        }
    }
}

impl Correlations {
    /// Rayleigh number of the air layer between the two surfaces.
    ///
    /// `Ra = g·β·|θ1 − θ2|·l_d³·ρ²·c/(μ·λ)` with air properties at the mean
    /// surface temperature.
    ///
    /// # Errors
    ///
    /// Fails if `l_d` is not positive or the air properties are unavailable.
    pub fn rayleigh_number(
        &self,
        surfaces: [ThermodynamicTemperature; 2],
        l_d: Length,
    ) -> Result<f64, CorrelationError> {
        check_length("cavity depth", l_d)?;

        let air = self.air.properties(mean(surfaces))?;
        Ok(air.rayleigh(self.gravity, surfaces[0].minus(surfaces[1]), l_d))
    }

    /// Nusselt number of the cavity, selected by inclination.
    ///
    /// See [`nusselt::cavity`] for the correlation in each range.
    ///
    /// # Errors
    ///
    /// Returns [`CorrelationError::UnsupportedGeometry`] for an inclination
    /// outside `[0°, 90°]`, or another error if the lengths or air properties
    /// are invalid.
    pub fn nusselt_number(
        &self,
        surfaces: [ThermodynamicTemperature; 2],
        angle: Angle,
        l_h: Length,
        l_d: Length,
    ) -> Result<f64, CorrelationError> {
        nusselt::check_inclination(angle)?;
        check_length("cavity length", l_h)?;

        let ra = self.rayleigh_number(surfaces, l_d)?;
        let aspect = l_d.get::<meter>() / l_h.get::<meter>();

        nusselt::cavity(ra, angle, aspect, self.sixty_degree)
    }

    /// Convective heat transfer coefficient `h_cv` at the cavity surfaces.
    ///
    /// In detailed mode the natural-convection coefficient of the sealed
    /// layer is `h_base = Nu·λ/l_d`. A sealed cavity uses it directly; a
    /// ventilated one doubles it and adds `4·v_a`.
    /// Surfaces at exactly the same temperature have no buoyant driving
    /// force, so `h_base = 0`.
    ///
    /// # Errors
    ///
    /// Every mode returns [`CorrelationError::UnsupportedGeometry`] for an
    /// inclination outside `[0°, 90°]`. Detailed mode may also fail as
    /// [`Self::nusselt_number`] does.
    pub fn convective_coefficient(
        &self,
        mode: ConvectiveMode,
        v_a: Velocity,
        surfaces: [ThermodynamicTemperature; 2],
        angle: Angle,
        l_h: Length,
        l_d: Length,
    ) -> Result<HeatTransfer, CorrelationError> {
        nusselt::check_inclination(angle)?;

        if let ConvectiveMode::Simplified(season) = mode {
            return Ok(self.simplified.season(season).convective(v_a));
        }

        let h_base = if surfaces[0] == surfaces[1] {
            0.0
        } else {
            let nu = self.nusselt_number(surfaces, angle, l_h, l_d)?;
            let air = self.air.properties(mean(surfaces))?;
            nu * air.conductivity.get::<watt_per_meter_kelvin>() / l_d.get::<meter>()
        };

        let v_a = v_a.get::<meter_per_second>();
        let h = if v_a == 0.0 {
            h_base
        } else {
            2.0 * h_base + FORCED_CONVECTION_SLOPE * v_a
        };

        Ok(HeatTransfer::new::<watt_per_square_meter_kelvin>(h))
    }

    /// Radiative heat transfer coefficient `h_rv` across the cavity.
    ///
    /// In detailed mode `h_rv = 4·σ·e·T_m³` with `T_m` the mean absolute
    /// temperature of the two surfaces.
    #[must_use]
    pub fn radiative_coefficient(
        &self,
        mode: RadiativeMode,
        surfaces: [ThermodynamicTemperature; 2],
        effective_emissivity: f64,
    ) -> HeatTransfer {
        match mode {
            RadiativeMode::Detailed => {
                let t_m = mean(surfaces).get::<kelvin>();
                HeatTransfer::new::<watt_per_square_meter_kelvin>(
                    4.0 * self.sigma.value * effective_emissivity * t_m.powi(3),
                )
            }
            RadiativeMode::Simplified(season) => {
                self.simplified.season(season).radiative(effective_emissivity)
            }
            RadiativeMode::Zero => HeatTransfer::new::<watt_per_square_meter_kelvin>(0.0),
        }
    }
}

fn mean(surfaces: [ThermodynamicTemperature; 2]) -> ThermodynamicTemperature {
    let [t1, t2] = surfaces.map(|t| t.get::<kelvin>());
    ThermodynamicTemperature::new::<kelvin>(0.5 * (t1 + t2))
}
