use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N3, N4, P1, Z0},
};

/// Stefan–Boltzmann constant dimension, W/(m²·K⁴) in SI.
pub type StefanBoltzmannConstant = Quantity<ISQ<Z0, P1, N3, Z0, N4, Z0, Z0>, SI<f64>, f64>;

/// Builds a [`StefanBoltzmannConstant`] from a value in W/(m²·K⁴).
///
/// Custom quantity aliases have no unit types of their own, so the value is
/// interpreted in base SI units.
#[must_use]
pub fn stefan_boltzmann(value: f64) -> StefanBoltzmannConstant {
    StefanBoltzmannConstant {
        dimension: std::marker::PhantomData,
        units: std::marker::PhantomData,
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::HeatTransfer, heat_transfer::watt_per_square_meter_kelvin};

    #[test]
    fn scales_to_heat_transfer_units() {
        let sigma = stefan_boltzmann(5.67e-8);
        let t_cubed = 280.0_f64.powi(3);

        // Base SI value of σ·T³ is W/(m²·K).
        let h = HeatTransfer::new::<watt_per_square_meter_kelvin>(4.0 * sigma.value * t_cubed);

        assert_relative_eq!(h.get::<watt_per_square_meter_kelvin>(), 4.978_713_6, epsilon = 1e-9);
    }
}
