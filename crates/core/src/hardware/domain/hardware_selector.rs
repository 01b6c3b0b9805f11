use super::hardware_config::{Device, HardwareConfig, HostCapabilities, Precision};

/// Worker threads used when the host core count is unknown.
pub const DEFAULT_CPU_THREADS: usize = 4;

pub struct HardwareSelector;

impl HardwareSelector {
    /// Pick device, precision and worker threads for `host`.
    ///
    /// Accelerated runs use half precision and a single worker. CPU-only runs
    /// use 8-bit weights and half the available cores.
    pub fn select(host: &HostCapabilities, model_size: &str) -> HardwareConfig {
        let config = if host.accelerator_available {
            HardwareConfig {
                device: Device::Accelerated,
                precision: Precision::HalfFloat,
                threads: 1,
            }
        } else {
            HardwareConfig {
                device: Device::CpuOnly,
                precision: Precision::Int8,
                threads: cpu_threads(host.cpu_cores),
            }
        };

        log::info!(
            "Device: {}, model: {model_size}, precision: {}, threads: {}",
            config.device,
            config.precision,
            config.threads
        );

        config
    }
}

fn cpu_threads(cores: Option<usize>) -> usize {
    match cores {
        Some(n) => (n / 2).max(1),
        None => DEFAULT_CPU_THREADS,
    }
}
