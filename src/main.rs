//! meter — multi-layer proportional usage bars for a desktop shell panel.
//!
//! One-shot demo: samples the system, lays out a per-core CPU indicator
//! and a memory-breakdown indicator, and logs the computed geometry.
//!
//! Run with:  `RUST_LOG=info meter`

use std::time::Duration;

use anyhow::Result;
use meter_config::{default_path, load as load_config, ConfigNotifier};
use meter_core::{Orientation, UsageSource};
use meter_render::{BarRenderer, RenderParams, Viewport};
use meter_system::{CpuSource, MemorySource, Sampler};
use meter_theme::{parse_palette, ThemeMode};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("meter v{} starting", env!("CARGO_PKG_VERSION"));

    let config = load_config(default_path())?;
    let mode = ThemeMode::from_name(&config.theme.style);
    let notifier = ConfigNotifier::new();

    let mut sampler = Sampler::new();
    sampler.refresh();
    // CPU usage is a delta; only the second refresh yields real numbers
    std::thread::sleep(Duration::from_millis(250));
    sampler.refresh();
    let snapshot = sampler.snapshot();

    let cpu = CpuSource;
    let cpu_params = RenderParams {
        orientation: Orientation::Vertical,
        num_bars: snapshot.cpu_per_core.len().max(1),
        layers: 1,
        width: 24.0,
        mini: config.cpu.mini,
        header: config.cpu.header,
        colors: parse_palette(&config.cpu.colors),
        breakdown: config.cpu.breakdown.clone(),
        ..Default::default()
    };
    let mut cpu_bars = BarRenderer::new(cpu_params, mode, &notifier);

    let memory = MemorySource;
    let memory_params = RenderParams {
        orientation: Orientation::Horizontal,
        num_bars: 1,
        layers: 2,
        height: 8.0,
        mini: config.memory.mini,
        colors: parse_palette(&config.memory.colors),
        breakdown: config.memory.breakdown.clone(),
        ..Default::default()
    };
    let mut memory_bar = BarRenderer::new(memory_params, mode, &notifier);

    let viewport = Viewport {
        width: 120.0,
        height: 30.0,
        parent_height: 30.0,
        scale_factor: 1.0,
    };

    cpu_bars.update_bars(&cpu.usage_frame(&snapshot), Some(&viewport));
    memory_bar.update_bars(&memory.usage_frame(&snapshot), Some(&viewport));

    dump(cpu.id(), &cpu_bars);
    dump(memory.id(), &memory_bar);

    Ok(())
}

fn dump(id: &str, renderer: &BarRenderer) {
    tracing::info!(id, class = renderer.style_class(), "indicator");
    for (bar, slot) in renderer.bars().iter().enumerate() {
        for (layer, cell) in slot.cells.iter().enumerate() {
            if cell.visible {
                tracing::info!(
                    bar,
                    layer,
                    x = cell.x,
                    y = cell.y,
                    length = cell.style.length,
                    "cell"
                );
            }
        }
    }
}
