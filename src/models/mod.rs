// src/models/mod.rs

pub mod free_fall;
pub mod harmonic;
pub mod problem;

pub use free_fall::FreeFall;
pub use harmonic::HarmonicOscillator;
pub use problem::Problem;
