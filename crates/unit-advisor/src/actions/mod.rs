//! Conversion actions registered with the agent

pub mod conversion;
pub mod memory;

pub use conversion::ApplyConversionAction;
pub use memory::ModelMemoryAction;
