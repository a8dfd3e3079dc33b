// src/simulation/mod.rs

pub mod load_parameters;
pub mod csv;
pub mod framework;

use crate::math::VerletSolution;
use crate::models::Problem;

/// 一回の実行結果
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub problem: Problem,
    pub solution: VerletSolution,           // 数値解
    pub reference: Vec<(f64, f64)>,         // 解析解 (t, y)
    pub max_abs_deviation: f64,             // 数値解と解析解の最大誤差
}
