/// A point-in-time snapshot of system resource usage.
///
/// Produced by `meter-system`'s sampler; usage sources turn it into the
/// per-bar fractions the renderer consumes.
#[derive(Debug, Clone, Default)]
pub struct SystemSnapshot {
    /// Per-core CPU usage (0.0 – 100.0).
    pub cpu_per_core: Vec<f32>,
    /// Average CPU usage across all cores.
    pub cpu_average: f32,
    /// RAM used in bytes.
    pub ram_used: u64,
    /// RAM completely free (not even cache/buffers) in bytes.
    pub ram_free: u64,
    /// Total RAM in bytes.
    pub ram_total: u64,
}

impl SystemSnapshot {
    /// RAM usage as a fraction in `[0, 1]`.
    #[must_use]
    pub fn ram_fraction(&self) -> f32 {
        if self.ram_total == 0 {
            return 0.0;
        }
        self.ram_used as f32 / self.ram_total as f32
    }

    /// Memory that is allocated but reclaimable (cache, buffers) as a
    /// fraction in `[0, 1]`. Never negative, even on odd kernel accounting.
    #[must_use]
    pub fn ram_reclaimable_fraction(&self) -> f32 {
        if self.ram_total == 0 {
            return 0.0;
        }
        let reclaimable = self
            .ram_total
            .saturating_sub(self.ram_free)
            .saturating_sub(self.ram_used);
        reclaimable as f32 / self.ram_total as f32
    }
}
