use crate::hardware::domain::hardware_config::HostCapabilities;

/// Read accelerator availability and core count from the running host.
///
/// An accelerator is only usable when whisper.cpp was built with a GPU
/// backend, so availability follows the enabled cargo features.
pub fn probe_host() -> HostCapabilities {
    HostCapabilities {
        accelerator_available: accelerator_compiled_in(),
        cpu_cores: std::thread::available_parallelism()
            .map(|n| n.get())
            .ok(),
    }
}

fn accelerator_compiled_in() -> bool {
    #[cfg(any(feature = "cuda", feature = "metal"))]
    {
        true
    }
    #[cfg(not(any(feature = "cuda", feature = "metal")))]
    {
        false
    }
}
