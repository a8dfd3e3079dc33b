// src/math/error.rs

use thiserror::Error;

/// Verlet積分で発生するエラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntegrationError {
    /// 計算開始前に検出される引数の不正
    #[error("引数が不正です: {reason}")]
    InvalidArgument { reason: String },

    /// 右辺関数 F または漸化式の結果が有限値でない
    #[error("右辺関数の評価に失敗しました (index = {index}, y = {input}, 値 = {value})")]
    EvaluationFailure { index: usize, input: f64, value: f64 },
}

impl IntegrationError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        IntegrationError::InvalidArgument {
            reason: reason.into(),
        }
    }
}
