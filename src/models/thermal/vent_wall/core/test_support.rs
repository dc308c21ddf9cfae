use uom::si::{
    angle::degree,
    f64::{Angle, HeatFluxDensity, HeatTransfer, Length, ThermodynamicTemperature, Velocity},
    heat_flux_density::watt_per_square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

use super::Parameters;

/// A vertical wall on a winter day with a ventilated 50 mm cavity.
pub(crate) fn reference_parameters() -> Parameters {
    Parameters {
        theta_e: ThermodynamicTemperature::new::<degree_celsius>(0.0),
        theta_r: ThermodynamicTemperature::new::<degree_celsius>(20.0),
        j_surf: HeatFluxDensity::new::<watt_per_square_meter>(500.0),
        a_surf: 0.8,
        c_1: HeatTransfer::new::<watt_per_square_meter_kelvin>(5.0),
        c_2: HeatTransfer::new::<watt_per_square_meter_kelvin>(0.5),
        l_h: Length::new::<meter>(3.5),
        l_w: Length::new::<meter>(0.455),
        l_d: Length::new::<meter>(0.05),
        angle: Angle::new::<degree>(90.0),
        v_a: Velocity::new::<meter_per_second>(0.5),
        l_s: Length::new::<meter>(100.0),
        emissivity_1: 0.9,
        emissivity_2: 0.9,
    }
}
