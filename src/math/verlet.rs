// src/math/verlet.rs

use crate::math::error::IntegrationError;

/// 点数 n の上限（xs と ys を確保できる範囲）
pub const MAX_ITERATIONS: usize = 50_000_000;

/// 自励系の二階常微分方程式 y'' = F(y) の右辺
///
/// 独立変数や一階微分には依存しない。
pub trait RightHandSide {
    /// 現在の位置 y における二階微分 F(y)
    fn eval(&self, y: f64) -> f64;
}

impl<F> RightHandSide for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, y: f64) -> f64 {
        self(y)
    }
}

/// Verlet積分の結果
///
/// `ys[0]` は初期条件の一歩手前の人工的な値、`ys[1]` は初期位置。
#[derive(Debug, Clone, PartialEq)]
pub struct VerletSolution {
    xs: Vec<f64>,
    ys: Vec<f64>,
    dx: f64,
}

impl VerletSolution {
    /// 独立変数の列 (xs[i] = i·dx)
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// 解の列
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// 刻み幅 dx
    pub fn step(&self) -> f64 {
        self.dx
    }

    /// 点数 n
    pub fn len(&self) -> usize {
        self.ys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ys.is_empty()
    }

    /// (xs, ys) の組に分解する
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.xs, self.ys)
    }

    /// 物理的な時刻に揃えた (t, y) の組
    ///
    /// `ys[i]` (i ≥ 1) は時刻 `xs[i-1]` の値に対応する。
    /// 解析解との比較はこちらを使う。
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().skip(1).copied())
    }
}

/// 刻み幅 dx = xf / (n - 1) を計算する
///
/// # 引数
/// - `xf`: 積分区間の終端
/// - `n`: 点数（人工的な開始点を含む）
///
/// # 戻り値
/// - 刻み幅、または `InvalidArgument`
pub fn step_size(xf: f64, n: usize) -> Result<f64, IntegrationError> {
    if n < 2 {
        return Err(IntegrationError::invalid(format!(
            "点数 n は 2 以上が必要です (n = {n})"
        )));
    }
    if n > MAX_ITERATIONS {
        return Err(IntegrationError::invalid(format!(
            "点数 n が上限 {MAX_ITERATIONS} を超えています (n = {n})"
        )));
    }
    if !xf.is_finite() {
        return Err(IntegrationError::invalid(format!(
            "終端 xf が有限値ではありません (xf = {xf})"
        )));
    }
    let dx = xf / (n - 1) as f64;
    if dx == 0.0 || !dx.is_finite() {
        return Err(IntegrationError::invalid(format!(
            "刻み幅 dx が不正です (dx = {dx})"
        )));
    }
    Ok(dx)
}

/// 独立変数の列を添字から直接構成する
///
/// 累積加算による点数のずれを避けるため `xs[i] = i·dx` とする。
pub fn domain_sequence(dx: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 * dx).collect()
}

/// 起動ステップ: 初期条件の一歩手前の値を後退テイラー展開で求める
///
/// y₋₁ = a - dx·b + ½·dx²·F(a)
pub fn startup_value<F>(f: &F, a: f64, b: f64, dx: f64) -> Result<f64, IntegrationError>
where
    F: RightHandSide + ?Sized,
{
    let acceleration = evaluate(f, a, 0)?;
    let y_prev = a - dx * b + 0.5 * dx * dx * acceleration;
    ensure_finite(y_prev, 0, a)
}

/// Verlet法による y'' = F(y) の数値解
///
/// # 引数
/// - `f`: 右辺関数 F
/// - `a`: 初期位置 y(0)
/// - `b`: 初速度 y'(0)
/// - `xf`: 積分区間の終端
/// - `n`: 点数
///
/// # 戻り値
/// - 長さ `n` の (xs, ys)
/// - 途中で有限値でない値が現れた場合は部分的な結果を返さずエラー
pub fn verlet<F>(
    f: &F,
    a: f64,
    b: f64,
    xf: f64,
    n: usize,
) -> Result<VerletSolution, IntegrationError>
where
    F: RightHandSide + ?Sized,
{
    if !a.is_finite() || !b.is_finite() {
        return Err(IntegrationError::invalid(format!(
            "初期条件が有限値ではありません (a = {a}, b = {b})"
        )));
    }
    let dx = step_size(xf, n)?;
    let dx2 = dx * dx;

    let xs = domain_sequence(dx, n);
    let mut ys = vec![0.0; n];

    ys[0] = startup_value(f, a, b, dx)?;
    ys[1] = a;

    for i in 1..n - 1 {
        let acceleration = evaluate(f, ys[i], i + 1)?;
        let next = 2.0 * ys[i] - ys[i - 1] + acceleration * dx2;
        ys[i + 1] = ensure_finite(next, i + 1, ys[i])?;
    }

    Ok(VerletSolution { xs, ys, dx })
}

fn evaluate<F>(f: &F, y: f64, index: usize) -> Result<f64, IntegrationError>
where
    F: RightHandSide + ?Sized,
{
    let value = f.eval(y);
    ensure_finite(value, index, y)
}

fn ensure_finite(value: f64, index: usize, input: f64) -> Result<f64, IntegrationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(IntegrationError::EvaluationFailure {
            index,
            input,
            value,
        })
    }
}
