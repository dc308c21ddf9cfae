//! Thermal models of building envelope assemblies.

pub mod vent_wall;
