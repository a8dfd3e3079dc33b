// src/models/problem.rs

use crate::math::RightHandSide;
use crate::models::{FreeFall, HarmonicOscillator};

/// シナリオで選択される問題（右辺関数と解析解の組）
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Problem {
    FreeFall(FreeFall),
    Harmonic(HarmonicOscillator),
}

impl Problem {
    /// 解析解の値
    ///
    /// # 引数
    /// - `y0`: 初期位置
    /// - `v0`: 初速度
    /// - `t`: 時刻
    pub fn exact(&self, y0: f64, v0: f64, t: f64) -> f64 {
        match self {
            Problem::FreeFall(model) => model.exact(y0, v0, t),
            Problem::Harmonic(model) => model.exact(y0, v0, t),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Problem::FreeFall(_) => "free_fall",
            Problem::Harmonic(_) => "harmonic_oscillator",
        }
    }
}

impl RightHandSide for Problem {
    fn eval(&self, y: f64) -> f64 {
        match self {
            Problem::FreeFall(model) => model.eval(y),
            Problem::Harmonic(model) => model.eval(y),
        }
    }
}
