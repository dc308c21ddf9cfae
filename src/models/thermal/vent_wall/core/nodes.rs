use std::ops::Index;

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};

/// Nodes of the wall's thermal network, ordered from outdoors to indoors
/// with the cavity air last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    /// Weather-exposed surface of the outer leaf.
    OuterSurface = 0,
    /// Cavity surface of the outer leaf, `θ1`.
    CavityOuter = 1,
    /// Cavity surface of the inner leaf, `θ2`.
    CavityInner = 2,
    /// Room-side surface of the inner leaf.
    InnerSurface = 3,
    /// Mean cavity air temperature, `θ_as`.
    CavityAir = 4,
}

impl Node {
    pub const ALL: [Node; 5] = [
        Node::OuterSurface,
        Node::CavityOuter,
        Node::CavityInner,
        Node::InnerSurface,
        Node::CavityAir,
    ];
}

/// Temperatures of the five network nodes, in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeTemperatures([f64; 5]);

impl NodeTemperatures {
    #[must_use]
    pub fn from_celsius(values: [f64; 5]) -> Self {
        Self(values)
    }

    #[must_use]
    pub fn celsius(&self) -> [f64; 5] {
        self.0
    }

    /// Returns the temperature of `node`.
    #[must_use]
    pub fn get(&self, node: Node) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(self[node])
    }

    /// Seeds the nodes between the outdoor and indoor temperatures.
    ///
    /// The surfaces sit at 0, 1/12, 1/8 and 1/4 of the way from `θe` to `θr`,
    /// and the cavity air at the mean of the two cavity surfaces.
    #[must_use]
    pub fn initial_guess(theta_e: f64, theta_r: f64) -> Self {
        let span = theta_r - theta_e;
        let t1 = theta_e + span / 12.0;
        let t2 = theta_e + span / 8.0;

        Self([theta_e, t1, t2, theta_e + span / 4.0, 0.5 * (t1 + t2)])
    }

    /// All nodes marked invalid.
    pub(super) fn nan() -> Self {
        Self([f64::NAN; 5])
    }

    /// Cavity surfaces `[θ1, θ2]`.
    #[must_use]
    pub fn cavity_surfaces(&self) -> [ThermodynamicTemperature; 2] {
        [self.get(Node::CavityOuter), self.get(Node::CavityInner)]
    }

    pub(super) fn is_finite(&self) -> bool {
        self.0.iter().all(|t| t.is_finite())
    }
}

impl Index<Node> for NodeTemperatures {
    type Output = f64;

    fn index(&self, node: Node) -> &f64 {
        &self.0[node as usize]
    }
}
