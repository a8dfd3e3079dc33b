// src/simulation/framework.rs

use std::error::Error;

use crate::config::{Scenario, VerletParameters};
use crate::math::{verlet, VerletSolution};
use crate::models::Problem;
use crate::simulation::SimulationResult;

/// 解析解を独自の格子 0, step, 2·step, … で評価する
///
/// 格子点は添字から直接求め、終端に届かない場合は `xf` を最後に加える。
///
/// # 引数
/// - `problem`: 問題
/// - `y0`, `v0`: 初期条件
/// - `xf`: 終端
/// - `step`: 評価の刻み（正）
///
/// # 戻り値
/// - (t, y) の列
pub fn sample_reference(problem: &Problem, y0: f64, v0: f64, xf: f64, step: f64) -> Vec<(f64, f64)> {
    let count = (xf.abs() / step + 1e-9).floor() as usize;
    let direction = xf.signum();
    let mut samples: Vec<(f64, f64)> = (0..=count)
        .map(|k| {
            let t = direction * k as f64 * step;
            (t, problem.exact(y0, v0, t))
        })
        .collect();

    let last = direction * count as f64 * step;
    if (xf - last).abs() > 1e-9 * step {
        samples.push((xf, problem.exact(y0, v0, xf)));
    }
    samples
}

/// 時刻を揃えた数値解と解析解の最大絶対誤差
pub fn max_abs_deviation(solution: &VerletSolution, problem: &Problem, y0: f64, v0: f64) -> f64 {
    solution
        .samples()
        .map(|(t, y)| (y - problem.exact(y0, v0, t)).abs())
        .fold(0.0, f64::max)
}

/// パラメータとシナリオから積分を実行する
pub fn run_simulation(
    params: &VerletParameters,
    scenario: &Scenario,
) -> Result<SimulationResult, Box<dyn Error>> {
    let problem = scenario.model.build()?;
    let reference_step = scenario.validated_reference_step()?;

    let solution = verlet(
        &problem,
        params.initial_position,
        params.initial_velocity,
        params.endpoint,
        params.iterations,
    )?;

    let reference = sample_reference(
        &problem,
        params.initial_position,
        params.initial_velocity,
        params.endpoint,
        reference_step,
    );
    let max_abs_deviation = max_abs_deviation(
        &solution,
        &problem,
        params.initial_position,
        params.initial_velocity,
    );

    Ok(SimulationResult {
        problem,
        solution,
        reference,
        max_abs_deviation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelConfig;
    use crate::math::IntegrationError;
    use crate::config::ConfigError;
    use crate::models::{FreeFall, HarmonicOscillator};
    use approx::assert_abs_diff_eq;

    fn free_fall_params() -> VerletParameters {
        VerletParameters {
            initial_position: 50.0,
            initial_velocity: 0.0,
            endpoint: 4.0,
            iterations: 100,
        }
    }

    fn free_fall_scenario() -> Scenario {
        Scenario {
            model: ModelConfig::FreeFall { gravity: 9.8 },
            reference_step: 0.1,
            output_path: "unused.csv".to_string(),
        }
    }

    #[test]
    fn test_sample_reference_grid() {
        let problem = Problem::FreeFall(FreeFall::new(9.8));
        let samples = sample_reference(&problem, 50.0, 0.0, 4.0, 0.1);

        assert_eq!(samples.len(), 41);
        assert_eq!(samples[0], (0.0, 50.0));
        let (t_last, y_last) = samples[40];
        assert_abs_diff_eq!(t_last, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y_last, 50.0 - 4.9 * 16.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sample_reference_appends_endpoint() {
        let problem = Problem::FreeFall(FreeFall::new(9.8));
        let samples = sample_reference(&problem, 0.0, 0.0, 1.05, 0.1);

        assert_eq!(samples.len(), 12);
        assert_eq!(samples[11].0, 1.05);
    }

    #[test]
    fn test_sample_reference_negative_endpoint() {
        let problem = Problem::Harmonic(HarmonicOscillator::new(1.0));
        let samples = sample_reference(&problem, 1.0, 0.0, -1.0, 0.25);

        assert_eq!(samples.len(), 5);
        assert_abs_diff_eq!(samples[4].0, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(samples[4].1, (1.0_f64).cos(), epsilon = 1e-12);
    }

    #[test]
    fn test_run_free_fall_scenario() {
        let result = run_simulation(&free_fall_params(), &free_fall_scenario()).unwrap();

        assert_eq!(result.solution.len(), 100);
        assert_eq!(result.reference.len(), 41);
        assert!(result.max_abs_deviation < 0.05);
    }

    #[test]
    fn test_run_harmonic_scenario() {
        let scenario = Scenario {
            model: ModelConfig::HarmonicOscillator { omega: 2.0 },
            reference_step: 0.05,
            output_path: "unused.csv".to_string(),
        };
        let params = VerletParameters {
            initial_position: 1.0,
            initial_velocity: 0.0,
            endpoint: 3.0,
            iterations: 601,
        };
        let result = run_simulation(&params, &scenario).unwrap();

        assert_eq!(result.problem, Problem::Harmonic(HarmonicOscillator::new(2.0)));
        assert!(result.max_abs_deviation < 1e-3);
    }

    #[test]
    fn test_run_propagates_integration_error() {
        let mut params = free_fall_params();
        params.iterations = 1;
        let error = run_simulation(&params, &free_fall_scenario()).unwrap_err();

        assert!(matches!(
            error.downcast_ref::<IntegrationError>(),
            Some(IntegrationError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_run_propagates_config_error() {
        let mut scenario = free_fall_scenario();
        scenario.reference_step = -0.1;
        let error = run_simulation(&free_fall_params(), &scenario).unwrap_err();

        assert_eq!(
            error.downcast_ref::<ConfigError>(),
            Some(&ConfigError::InvalidReferenceStep(-0.1))
        );
    }
}
