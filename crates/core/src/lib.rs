pub mod error;
pub mod layout;
pub mod snapshot;
pub mod usage;

pub use error::{MeterError, Result};
pub use layout::{Align, Orientation};
pub use snapshot::SystemSnapshot;
pub use usage::{LayerUsage, UsageFrame, UsageSource};
