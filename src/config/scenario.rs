// src/config/scenario.rs

use serde::Deserialize;

use crate::config::error::ConfigError;
use crate::models::{FreeFall, HarmonicOscillator, Problem};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Scenario {
    pub model: ModelConfig,
    pub reference_step: f64, // 解析解を評価する刻み
    pub output_path: String, // CSVの出力先
}

/// 右辺関数の選択
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelConfig {
    FreeFall { gravity: f64 },
    HarmonicOscillator { omega: f64 },
}

impl ModelConfig {
    /// 設定値を検証して問題を構築する
    pub fn build(&self) -> Result<Problem, ConfigError> {
        match *self {
            ModelConfig::FreeFall { gravity } => {
                if !gravity.is_finite() {
                    return Err(ConfigError::InvalidGravity(gravity));
                }
                Ok(Problem::FreeFall(FreeFall::new(gravity)))
            }
            ModelConfig::HarmonicOscillator { omega } => {
                if !(omega.is_finite() && omega > 0.0) {
                    return Err(ConfigError::InvalidOmega(omega));
                }
                Ok(Problem::Harmonic(HarmonicOscillator::new(omega)))
            }
        }
    }
}

impl Scenario {
    pub fn validated_reference_step(&self) -> Result<f64, ConfigError> {
        if self.reference_step.is_finite() && self.reference_step > 0.0 {
            Ok(self.reference_step)
        } else {
            Err(ConfigError::InvalidReferenceStep(self.reference_step))
        }
    }
}
