//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Exact floating-point evaluation order in the integrator
//! - No rendering, timing or platform dependencies

pub mod collision;
pub mod driver;
pub mod params;
pub mod state;
pub mod step;

pub use collision::{attenuated_reflection, resolve_far_wall, resolve_floor, resolve_near_wall};
pub use driver::{RunSummary, Simulation, StepObserver};
pub use params::SimParams;
pub use state::{SimEvent, SimState, Wall};
pub use step::{integrate, step};
