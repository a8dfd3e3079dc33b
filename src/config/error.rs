// src/config/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("重力加速度が有限値ではありません (gravity = {0})")]
    InvalidGravity(f64),
    #[error("角振動数は正の有限値である必要があります (omega = {0})")]
    InvalidOmega(f64),
    #[error("解析解の刻み幅は正の有限値である必要があります (reference_step = {0})")]
    InvalidReferenceStep(f64),
}
