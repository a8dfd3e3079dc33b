// src/main.rs

use std::error::Error;

use verletsim::simulation::csv::{setup_csv_output, Plotter};
use verletsim::simulation::framework::run_simulation;
use verletsim::simulation::load_parameters::{load_scenario, load_verlet_parameters};

fn main() -> Result<(), Box<dyn Error>> {
    // 設定とシナリオの読み込み
    let params = load_verlet_parameters("config/verlet_parameters.yaml")?;
    let scenario = load_scenario("config/scenario.yaml")?;

    // 数値積分と解析解の評価
    let result = run_simulation(&params, &scenario)?;

    // CSV出力
    let numerical: Vec<(f64, f64)> = result.solution.samples().collect();
    let mut plotter = setup_csv_output(&scenario.output_path)?;
    plotter.plot(&numerical, &result.reference)?;

    println!(
        "{}: n = {}, dx = {}, 最大誤差 = {:e}, 出力 = {}",
        result.problem.name(),
        result.solution.len(),
        result.solution.step(),
        result.max_abs_deviation,
        scenario.output_path,
    );

    Ok(())
}
