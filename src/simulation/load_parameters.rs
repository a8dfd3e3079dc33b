// src/simulation/load_parameters.rs

use std::error::Error;
use std::fs::File;
use std::path::Path;
use serde::de::DeserializeOwned;
use serde_yaml::from_reader;

use crate::config::{VerletParameters, Scenario};

fn load_yaml<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, Box<dyn Error>> {
    let file = File::open(path)?;
    let value: T = from_reader(file)?;
    Ok(value)
}

/// 積分パラメータの読み込み
pub fn load_verlet_parameters<P: AsRef<Path>>(path: P) -> Result<VerletParameters, Box<dyn Error>> {
    load_yaml(path)
}

/// シナリオの読み込み
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario, Box<dyn Error>> {
    load_yaml(path)
}
