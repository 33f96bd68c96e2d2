use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use colony::config::SimConfig;
use colony::reporter::{GrowthRecord, Reporter};
use colony::runner::run_simulation;

struct OverlapProbe {
    active: AtomicUsize,
    max_active: AtomicUsize,
}

impl Reporter for OverlapProbe {
    fn report(&self, _record: GrowthRecord) {
        let active = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_active.fetch_max(active, Ordering::SeqCst);
        // Stay in the critical section long enough for an overlap to show.
        std::thread::sleep(Duration::from_millis(2));
        self.active.fetch_sub(1, Ordering::SeqCst);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn critical_sections_never_overlap() {
    let probe = Arc::new(OverlapProbe {
        active: AtomicUsize::new(0),
        max_active: AtomicUsize::new(0),
    });

    let mut config = SimConfig::new();
    config.colony_count = 4;
    config.step_count = 5;
    config.step_interval_ms = 1;

    run_simulation(&config, probe.clone()).await.unwrap();

    assert_eq!(probe.max_active.load(Ordering::SeqCst), 1);
}
