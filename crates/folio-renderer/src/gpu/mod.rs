mod context;
mod types;

pub use context::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use folio_common::Rect;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_surface_display() {
        let err = RendererError::SurfaceError("timeout".to_string());
        assert_eq!(err.to_string(), "surface error: timeout");
    }

    #[test]
    fn renderer_error_device_display() {
        let err = RendererError::DeviceError("out of memory".to_string());
        assert_eq!(err.to_string(), "device error: out of memory");
    }

    #[test]
    fn renderer_error_text_display() {
        let err = RendererError::TextError("atlas full".to_string());
        assert_eq!(err.to_string(), "text rendering error: atlas full");
    }

    #[test]
    fn physical_size_logical_conversion() {
        let size = PhysicalSize {
            width: 1600,
            height: 1200,
        };
        assert_eq!(size.logical(2.0), (800.0, 600.0));
        assert_eq!(size.logical(0.0), (1600.0, 1200.0));
    }

    #[test]
    fn scissor_is_clamped_to_target() {
        let target = PhysicalSize {
            width: 800,
            height: 600,
        };
        let s = scissor_rect(Rect::new(-50.0, 500.0, 200.0, 300.0), 1.0, target).unwrap();
        assert_eq!(
            s,
            ScissorRect {
                x: 0,
                y: 500,
                width: 150,
                height: 100
            }
        );
    }

    #[test]
    fn scissor_scales_to_physical_pixels() {
        let target = PhysicalSize {
            width: 1600,
            height: 1200,
        };
        let s = scissor_rect(Rect::new(10.0, 20.0, 100.0, 50.0), 2.0, target).unwrap();
        assert_eq!((s.x, s.y, s.width, s.height), (20, 40, 200, 100));
    }

    #[test]
    fn offscreen_scissor_is_none() {
        let target = PhysicalSize {
            width: 800,
            height: 600,
        };
        assert!(scissor_rect(Rect::new(0.0, 700.0, 100.0, 100.0), 1.0, target).is_none());
    }

    #[test]
    fn uniform_stride_rounds_up() {
        assert_eq!(aligned_stride(240, 256), 256);
        assert_eq!(aligned_stride(256, 256), 256);
        assert_eq!(aligned_stride(300, 256), 512);
        assert_eq!(aligned_stride(48, 0), 48);
    }
}
