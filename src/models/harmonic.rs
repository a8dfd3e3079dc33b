// src/models/harmonic.rs

use crate::math::RightHandSide;

/// 単振動 y'' = -ω²y
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicOscillator {
    pub omega: f64, // 角振動数 (rad/s)
}

impl HarmonicOscillator {
    pub fn new(omega: f64) -> Self {
        HarmonicOscillator { omega }
    }

    /// 解析解 y(t) = y0·cos(ωt) + (v0/ω)·sin(ωt)
    pub fn exact(&self, y0: f64, v0: f64, t: f64) -> f64 {
        let phase = self.omega * t;
        y0 * phase.cos() + v0 / self.omega * phase.sin()
    }
}

impl RightHandSide for HarmonicOscillator {
    fn eval(&self, y: f64) -> f64 {
        -self.omega * self.omega * y
    }
}
