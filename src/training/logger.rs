//! Training progress output.

use serde::{Deserialize, Serialize};

/// Verbosity level for training output.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Verbosity {
    /// No output. The default, so library users and tests stay quiet.
    #[default]
    Silent,
    /// Progress roughly every tenth of the epoch budget.
    Info,
    /// Cost and learning rate for every epoch.
    Debug,
}

/// Logs epoch-level training progress to stdout, gated by [`Verbosity`].
#[derive(Debug)]
pub struct TrainingLogger {
    verbosity: Verbosity,
    log_every: usize,
}

impl TrainingLogger {
    /// Create a logger for one `train()` call.
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            log_every: 1,
        }
    }

    /// Announce the start of training and fix the reporting interval.
    pub fn start_training(&mut self, n_epochs: usize) {
        self.log_every = match self.verbosity {
            Verbosity::Debug => 1,
            _ => (n_epochs / 10).max(1),
        };
        if self.verbosity >= Verbosity::Info {
            println!("training for {} epochs", n_epochs);
        }
    }

    /// Report one completed epoch.
    pub fn log_epoch(&self, epoch: usize, cost: f64, learning_rate: f64) {
        if self.verbosity >= Verbosity::Info && epoch % self.log_every == 0 {
            println!(
                "[{:>5}] cost {:>12.6}  lr {:>10.6}",
                epoch, cost, learning_rate
            );
        }
    }

    /// Report the end of training.
    pub fn finish_training(&self, final_cost: Option<f64>) {
        if self.verbosity >= Verbosity::Info {
            match final_cost {
                Some(cost) => println!("training finished, final cost {:.6}", cost),
                None => println!("training finished"),
            }
        }
    }
}
