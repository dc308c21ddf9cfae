use uom::si::{
    f64::{
        Acceleration, DynamicViscosity, Length, MassDensity, SpecificHeatCapacity,
        TemperatureCoefficient, TemperatureInterval, ThermalConductivity,
        ThermodynamicTemperature,
    },
    acceleration::meter_per_second_squared,
    dynamic_viscosity::pascal_second,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    temperature_coefficient::per_kelvin,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use super::PropertyError;

/// Transport and thermodynamic properties of dry air at one temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirProperties {
    pub conductivity: ThermalConductivity,
    /// Volumetric thermal expansion coefficient.
    pub expansion: TemperatureCoefficient,
    pub density: MassDensity,
    pub cp: SpecificHeatCapacity,
    pub viscosity: DynamicViscosity,
}

impl AirProperties {
    /// Evaluates dry-air properties at atmospheric pressure.
    ///
    /// Linear fits in the Celsius temperature `θ`, valid for roughly
    /// -30 °C to 80 °C:
    ///
    /// - `λ = 0.0241 + 7.7e-5·θ` W/(m·K)
    /// - `ρ = 353.25 / (θ + 273.15)` kg/m³
    /// - `c = 1005.7 + 0.066·θ` J/(kg·K)
    /// - `μ = (1.718 + 0.0049·θ)·1e-5` Pa·s
    /// - `β = 1 / (θ + 273.15)` 1/K (ideal gas)
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfDomain`] if the temperature is not finite
    /// or is at or below absolute zero.
    pub fn at(temperature: ThermodynamicTemperature) -> Result<Self, PropertyError> {
        let t_abs = temperature.get::<kelvin>();
        if !t_abs.is_finite() || t_abs <= 0.0 {
            return Err(PropertyError::OutOfDomain {
                context: format!("air temperature {t_abs} K"),
            });
        }

        let theta = temperature.get::<degree_celsius>();

        Ok(Self {
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(
                0.0241 + 7.7e-5 * theta,
            ),
            expansion: TemperatureCoefficient::new::<per_kelvin>(1.0 / t_abs),
            density: MassDensity::new::<kilogram_per_cubic_meter>(353.25 / t_abs),
            cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1005.7 + 0.066 * theta),
            viscosity: DynamicViscosity::new::<pascal_second>((1.718 + 0.0049 * theta) * 1e-5),
        })
    }

    /// Returns the fixed property set historically used for cavity walls.
    ///
    /// `λ = 0.026`, `β = 3.7e-3`, `ρ = 1.2`, `c = 1006`, `μ = 1.8e-5` (SI).
    #[must_use]
    pub fn reference() -> Self {
        Self {
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.026),
            expansion: TemperatureCoefficient::new::<per_kelvin>(3.7e-3),
            density: MassDensity::new::<kilogram_per_cubic_meter>(1.2),
            cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1006.0),
            viscosity: DynamicViscosity::new::<pascal_second>(1.8e-5),
        }
    }

    /// Volumetric heat capacity `ρ·c` in J/(m³·K).
    #[must_use]
    pub fn volumetric_heat_capacity(&self) -> f64 {
        self.density.get::<kilogram_per_cubic_meter>()
            * self.cp.get::<joule_per_kilogram_kelvin>()
    }

    /// Prandtl number `μ·c/λ`.
    #[must_use]
    pub fn prandtl(&self) -> f64 {
        self.viscosity.get::<pascal_second>() * self.cp.get::<joule_per_kilogram_kelvin>()
            / self.conductivity.get::<watt_per_meter_kelvin>()
    }

    /// Grashof number `g·β·|ΔT|·L³/ν²` with `ν = μ/ρ`.
    #[must_use]
    pub fn grashof(
        &self,
        gravity: Acceleration,
        delta_t: TemperatureInterval,
        length: Length,
    ) -> f64 {
        let nu = self.viscosity.get::<pascal_second>()
            / self.density.get::<kilogram_per_cubic_meter>();

        gravity.get::<meter_per_second_squared>()
            * self.expansion.get::<per_kelvin>()
            * delta_t.get::<delta_kelvin>().abs()
            * length.get::<meter>().powi(3)
            / nu.powi(2)
    }

    /// Rayleigh number `Gr·Pr`.
    #[must_use]
    pub fn rayleigh(
        &self,
        gravity: Acceleration,
        delta_t: TemperatureInterval,
        length: Length,
    ) -> f64 {
        self.grashof(gravity, delta_t, length) * self.prandtl()
    }

    fn check(self) -> Result<Self, PropertyError> {
        let values = [
            ("conductivity", self.conductivity.get::<watt_per_meter_kelvin>()),
            ("expansion", self.expansion.get::<per_kelvin>()),
            ("density", self.density.get::<kilogram_per_cubic_meter>()),
            ("cp", self.cp.get::<joule_per_kilogram_kelvin>()),
            ("viscosity", self.viscosity.get::<pascal_second>()),
        ];

        match values.iter().find(|(_, v)| !(v.is_finite() && *v > 0.0)) {
            Some((name, v)) => Err(PropertyError::InvalidProperty {
                context: format!("air {name} = {v}"),
            }),
            None => Ok(self),
        }
    }
}

/// Selects how air properties are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AirModel {
    /// Properties follow the cavity or film temperature.
    #[default]
    TemperatureDependent,

    /// The same property set at every temperature.
    Constant(AirProperties),
}

impl AirModel {
    /// Returns the air properties at `temperature`.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the temperature is outside the model's
    /// domain or a constant property set is non-physical.
    pub fn properties(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<AirProperties, PropertyError> {
        match self {
            Self::TemperatureDependent => AirProperties::at(temperature),
            Self::Constant(props) => props.check(),
        }
    }
}
