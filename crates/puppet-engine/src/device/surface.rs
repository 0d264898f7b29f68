/// What happened to a frame whose surface texture could not be acquired.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceRecovery {
    /// Surface lost or outdated and reconfigured; try again next iteration.
    Reconfigured,
    /// Nothing to draw into right now (timeout, zero-sized window).
    Skip,
    /// Out of memory. Drawing cannot continue.
    Fatal,
}

/// Picks the surface format: an sRGB 8-bit format when preferred and offered,
/// otherwise the surface's first (preferred) format.
pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if prefer_srgb {
        let srgb = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        if let Some(f) = srgb.into_iter().find(|f| formats.contains(f)) {
            return Some(f);
        }
    }

    formats.first().copied()
}

pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Maps an acquisition error to its recovery. `Reconfigured` is a promise the
/// caller must keep before retrying.
pub(crate) fn classify_surface_error(err: &wgpu::SurfaceError) -> SurfaceRecovery {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceRecovery::Reconfigured,
        wgpu::SurfaceError::OutOfMemory => SurfaceRecovery::Fatal,
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceRecovery::Skip,
    }
}

#[cfg(test)]
mod tests {
    use wgpu::{CompositeAlphaMode, SurfaceError, TextureFormat};

    use super::*;

    #[test]
    fn srgb_is_preferred_when_offered() {
        let formats = [TextureFormat::Bgra8Unorm, TextureFormat::Bgra8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(TextureFormat::Bgra8UnormSrgb));
    }

    #[test]
    fn first_format_wins_without_srgb_preference() {
        let formats = [TextureFormat::Bgra8Unorm, TextureFormat::Bgra8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, false), Some(TextureFormat::Bgra8Unorm));
    }

    #[test]
    fn no_formats_means_no_surface() {
        assert_eq!(choose_surface_format(&[], true), None);
    }

    #[test]
    fn unsupported_alpha_mode_falls_back() {
        let supported = [CompositeAlphaMode::Opaque];
        assert_eq!(
            choose_alpha_mode(&supported, Some(CompositeAlphaMode::PreMultiplied)),
            CompositeAlphaMode::Opaque
        );
        assert_eq!(choose_alpha_mode(&[], None), CompositeAlphaMode::Auto);
    }

    #[test]
    fn surface_errors_are_classified() {
        assert_eq!(classify_surface_error(&SurfaceError::Lost), SurfaceRecovery::Reconfigured);
        assert_eq!(classify_surface_error(&SurfaceError::Outdated), SurfaceRecovery::Reconfigured);
        assert_eq!(classify_surface_error(&SurfaceError::Timeout), SurfaceRecovery::Skip);
        assert_eq!(classify_surface_error(&SurfaceError::OutOfMemory), SurfaceRecovery::Fatal);
    }
}
