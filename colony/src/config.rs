use std::time::Duration;

use crate::worker::GrowthCurve;

const DEFAULT_COLONY_COUNT: u32 = 2;
const DEFAULT_STEP_COUNT: u32 = 10;
const DEFAULT_STEP_INTERVAL_MS: u64 = 1000;
const DEFAULT_INITIAL_POPULATION: f64 = 100.0;
const DEFAULT_GROWTH_RATE: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SimConfig {
    pub colony_count: u32,
    pub step_count: u32,
    pub step_interval_ms: u64,
    pub initial_population: f64,
    pub growth_rate: f64,
}

impl SimConfig {
    pub fn new() -> SimConfig {
        SimConfig {
            colony_count: DEFAULT_COLONY_COUNT,
            step_count: DEFAULT_STEP_COUNT,
            step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
            initial_population: DEFAULT_INITIAL_POPULATION,
            growth_rate: DEFAULT_GROWTH_RATE,
        }
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }

    pub fn curve(&self) -> GrowthCurve {
        GrowthCurve {
            initial_population: self.initial_population,
            growth_rate: self.growth_rate,
        }
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &str) -> anyhow::Result<SimConfig> {
        let json = std::fs::read_to_string(path)?;
        let config = serde_json::from_str::<SimConfig>(&json)?;
        Ok(config)
    }
}
