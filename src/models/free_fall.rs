// src/models/free_fall.rs

use crate::math::RightHandSide;

/// 一様重力場での自由落下 y'' = -g
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeFall {
    pub gravity: f64, // 重力加速度の大きさ (m/s²)
}

impl FreeFall {
    pub fn new(gravity: f64) -> Self {
        FreeFall { gravity }
    }

    /// 解析解 y(t) = y0 + v0·t - g·t²/2
    ///
    /// # 引数
    /// - `y0`: 初期位置
    /// - `v0`: 初速度
    /// - `t`: 時刻
    pub fn exact(&self, y0: f64, v0: f64, t: f64) -> f64 {
        y0 + v0 * t - 0.5 * self.gravity * t * t
    }
}

impl RightHandSide for FreeFall {
    fn eval(&self, _y: f64) -> f64 {
        -self.gravity
    }
}
