use super::evolution_engine::ProgressCallback;
use log::info;
use std::sync::mpsc::Sender;

/// Logs run progress through the `log` facade
pub struct LogProgressCallback {
    label: String,
}

impl LogProgressCallback {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

impl ProgressCallback for LogProgressCallback {
    fn on_run_start(&mut self, population_size: usize, iterations: usize) {
        info!(
            "[{}] Evolving population of {} for {} iterations",
            self.label, population_size, iterations
        );
    }

    fn on_epoch_complete(&mut self, epoch: usize, best_fitness: f64, mean_fitness: f64, replacements: usize) {
        info!(
            "[{}] Epoch {}: best = {:.4}, mean = {:.4}, replacements = {}",
            self.label, epoch, best_fitness, mean_fitness, replacements
        );
    }

    fn on_run_complete(&mut self, best_fitness: f64) {
        info!("[{}] Evolution complete. Best fitness: {:.4}", self.label, best_fitness);
    }
}

/// Discards every progress event
pub struct SilentProgressCallback;

impl ProgressCallback for SilentProgressCallback {
    fn on_epoch_complete(&mut self, _epoch: usize, _best: f64, _mean: f64, _replacements: usize) {}
}

pub enum ProgressMessage {
    RunStart { population_size: usize, iterations: usize },
    EpochComplete { epoch: usize, best_fitness: f64, mean_fitness: f64, replacements: usize },
    RunComplete { best_fitness: f64 },
}

/// Forwards progress over a channel, e.g. to a thread driving a display
pub struct ChannelProgressCallback {
    sender: Sender<ProgressMessage>,
}

impl ChannelProgressCallback {
    pub fn new(sender: Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_run_start(&mut self, population_size: usize, iterations: usize) {
        let _ = self.sender.send(ProgressMessage::RunStart {
            population_size,
            iterations,
        });
    }

    fn on_epoch_complete(&mut self, epoch: usize, best_fitness: f64, mean_fitness: f64, replacements: usize) {
        let _ = self.sender.send(ProgressMessage::EpochComplete {
            epoch,
            best_fitness,
            mean_fitness,
            replacements,
        });
    }

    fn on_run_complete(&mut self, best_fitness: f64) {
        let _ = self.sender.send(ProgressMessage::RunComplete { best_fitness });
    }
}
