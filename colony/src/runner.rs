use std::sync::Arc;

use anyhow::Context;

use crate::config::SimConfig;
use crate::reporter::Reporter;
use crate::resources::ResourcePair;
use crate::worker::Colony;

/// Runs one full simulation: spawns a task per colony and waits for all of
/// them. The resource pair exists before the first spawn and is dropped
/// only after the last colony has joined.
pub async fn run_simulation(config: &SimConfig, reporter: Arc<dyn Reporter>) -> anyhow::Result<()> {
    run_simulation_on(config, reporter, Arc::new(ResourcePair::new())).await
}

/// Like `run_simulation`, but on a caller-supplied resource pair, so an
/// instrumented pair can be watched from outside.
pub async fn run_simulation_on(
    config: &SimConfig,
    reporter: Arc<dyn Reporter>,
    resources: Arc<ResourcePair>,
) -> anyhow::Result<()> {
    let mut handles = Vec::new();
    for id in 1..=config.colony_count {
        let colony = Colony {
            id,
            steps: config.step_count,
            step_interval: config.step_interval(),
            curve: config.curve(),
        };
        let resources = resources.clone();
        let reporter = reporter.clone();
        handles.push(tokio::spawn(async move {
            colony.run(resources, reporter).await;
        }));
    }

    // A crashed colony must not leave the others unjoined, so every handle
    // is drained before the first failure surfaces.
    let mut first_failure = None;
    for (index, handle) in handles.into_iter().enumerate() {
        if let Err(e) = handle.await {
            if first_failure.is_none() {
                first_failure = Some((index as u32 + 1, e));
            }
        }
    }

    match first_failure {
        Some((id, e)) => Err(e).context(format!("colony {id} terminated abnormally")),
        None => Ok(()),
    }
}
