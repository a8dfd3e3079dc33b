// src/lib.rs

//! y'' = F(y) 型の二階常微分方程式を Verlet 法で解くライブラリ

pub mod config;
pub mod math;
pub mod models;
pub mod simulation;

pub use math::{verlet, IntegrationError, RightHandSide, VerletSolution};
