use meter_core::SystemSnapshot;
use sysinfo::System;

/// Synchronous system sampler.
///
/// The polling collaborator calls [`refresh`] on its own cadence and hands
/// the resulting [`SystemSnapshot`] to the usage sources — no background
/// task, everything runs on the caller's thread.
///
/// CPU usage is a delta measurement: the first snapshot after construction
/// reports zero until a second refresh has happened.
///
/// [`refresh`]: Sampler::refresh
#[derive(Debug)]
pub struct Sampler {
    sys: System,
}

impl Sampler {
    pub fn new() -> Self {
        Self {
            sys: System::new_all(),
        }
    }

    /// Re-read CPU and memory state from the kernel.
    pub fn refresh(&mut self) {
        self.sys.refresh_all();
    }

    /// Copy the current readings into an immutable snapshot.
    pub fn snapshot(&self) -> SystemSnapshot {
        let cpu_per_core: Vec<f32> = self.sys.cpus().iter().map(|c| c.cpu_usage()).collect();
        let cpu_average = if cpu_per_core.is_empty() {
            0.0
        } else {
            cpu_per_core.iter().sum::<f32>() / cpu_per_core.len() as f32
        };

        tracing::debug!(cores = cpu_per_core.len(), "system snapshot taken");

        SystemSnapshot {
            cpu_per_core,
            cpu_average,
            ram_used: self.sys.used_memory(),
            ram_free: self.sys.free_memory(),
            ram_total: self.sys.total_memory(),
        }
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}
