use std::sync::Arc;
use std::time::Duration;

use crate::reporter::{GrowthRecord, Reporter};
use crate::resources::ResourcePair;

/// Pure exponential growth model: population after `step` time units.
#[derive(Debug, Clone, Copy)]
pub struct GrowthCurve {
    pub initial_population: f64,
    pub growth_rate: f64,
}

impl GrowthCurve {
    pub fn population_at(&self, step: u32) -> f64 {
        self.initial_population * (self.growth_rate * step as f64).exp()
    }
}

/// One simulated colony: a fixed number of timed growth steps, each taking
/// both shared resources around the compute-and-report section.
pub struct Colony {
    pub id: u32,
    pub steps: u32,
    pub step_interval: Duration,
    pub curve: GrowthCurve,
}

impl Colony {
    pub async fn run(&self, resources: Arc<ResourcePair>, reporter: Arc<dyn Reporter>) {
        for step in 0..self.steps {
            let hold = resources.acquire_all().await;
            let population = self.curve.population_at(step);
            reporter.report(GrowthRecord {
                colony_id: self.id,
                step,
                population,
            });
            hold.release_all();

            // Pacing happens with both resources released.
            tokio::time::sleep(self.step_interval).await;
        }
    }
}
