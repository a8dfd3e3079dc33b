// src/math/mod.rs

pub mod verlet;
pub mod error;

pub use verlet::verlet;
pub use verlet::{RightHandSide, VerletSolution};
pub use error::IntegrationError;
