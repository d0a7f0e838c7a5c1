use meter_core::{LayerUsage, SystemSnapshot, UsageFrame, UsageSource};

/// One bar per CPU core, single layer: total usage of that core.
#[derive(Debug, Default)]
pub struct CpuSource;

impl UsageSource for CpuSource {
    fn id(&self) -> &str {
        "cpu"
    }

    fn usage_frame(&self, snapshot: &SystemSnapshot) -> UsageFrame {
        let bars = snapshot
            .cpu_per_core
            .iter()
            .map(|usage| vec![LayerUsage::new(0, (usage / 100.0).clamp(0.0, 1.0))])
            .collect();
        UsageFrame::new(bars)
    }
}

/// A single memory bar with two stacked layers: memory actually in use,
/// then allocated-but-reclaimable memory (cache, buffers) on top.
#[derive(Debug, Default)]
pub struct MemorySource;

impl UsageSource for MemorySource {
    fn id(&self) -> &str {
        "memory"
    }

    fn usage_frame(&self, snapshot: &SystemSnapshot) -> UsageFrame {
        let used = snapshot.ram_fraction().clamp(0.0, 1.0);
        let reclaimable = snapshot.ram_reclaimable_fraction().clamp(0.0, 1.0);

        UsageFrame::new(vec![vec![
            LayerUsage::new(0, used),
            LayerUsage::new(1, reclaimable),
        ]])
    }
}
