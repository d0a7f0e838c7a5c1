pub mod sampler;
pub mod sources;

pub use sampler::Sampler;
pub use sources::{CpuSource, MemorySource};
