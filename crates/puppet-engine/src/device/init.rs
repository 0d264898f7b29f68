/// Surface and adapter preferences for [`Gpu::new`](super::Gpu::new).
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick `*Srgb` 8-bit formats when the surface offers them.
    pub prefer_srgb: bool,

    pub present_mode: wgpu::PresentMode,

    /// Ignored when the surface does not support it.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Two shapes on a white background; an integrated GPU is plenty.
    pub power_preference: wgpu::PowerPreference,

    /// Retry with a software adapter when no hardware one matches.
    pub allow_fallback_adapter: bool,

    /// Latency hint passed through to the surface configuration.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            power_preference: wgpu::PowerPreference::LowPower,
            allow_fallback_adapter: true,
            desired_maximum_frame_latency: 2,
        }
    }
}
