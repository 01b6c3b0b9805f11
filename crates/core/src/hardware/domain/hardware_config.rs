use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Accelerated,
    CpuOnly,
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Accelerated => write!(f, "accelerated"),
            Device::CpuOnly => write!(f, "cpu-only"),
        }
    }
}

/// Numeric precision of the model weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    HalfFloat,
    Int8,
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::HalfFloat => write!(f, "half-precision"),
            Precision::Int8 => write!(f, "8-bit integer"),
        }
    }
}

/// Execution settings handed to the recognition engine loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardwareConfig {
    pub device: Device,
    pub precision: Precision,
    pub threads: usize,
}

/// Host facts read once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    pub accelerator_available: bool,
    /// `None` when the core count could not be determined.
    pub cpu_cores: Option<usize>,
}
