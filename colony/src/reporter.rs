use tokio::sync::mpsc;

/// One colony's population at one step. Produced inside the critical
/// section and handed straight to the reporter, never retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthRecord {
    pub colony_id: u32,
    pub step: u32,
    pub population: f64,
}

/// Receives every record a colony produces while it holds both resources.
/// Records from one colony arrive in step order; nothing is guaranteed
/// across colonies. Non-finite populations are passed through as-is.
pub trait Reporter: Send + Sync {
    fn report(&self, record: GrowthRecord);
}

pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, record: GrowthRecord) {
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
        println!(
            "[{timestamp}] Colony {} - Step {}: population = {:.2}",
            record.colony_id, record.step, record.population
        );
    }
}

/// Forwards records to whoever holds the receiving end. A dropped receiver
/// just loses the records, it never fails the simulation.
pub struct ChannelReporter {
    pub tx: mpsc::UnboundedSender<GrowthRecord>,
}

impl Reporter for ChannelReporter {
    fn report(&self, record: GrowthRecord) {
        let _ = self.tx.send(record);
    }
}
