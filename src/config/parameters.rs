// src/config/parameters.rs

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct VerletParameters {
    pub initial_position: f64, // 初期位置 y(0)
    pub initial_velocity: f64, // 初速度 y'(0)
    pub endpoint: f64,         // 積分区間の終端 xf
    pub iterations: usize,     // 点数 n（開始点を含む）
}
