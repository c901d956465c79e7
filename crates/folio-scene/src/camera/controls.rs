/// Which orbit inputs are enabled and how they respond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitControls {
    pub enable_rotate: bool,
    pub enable_zoom: bool,
    pub enable_pan: bool,
    pub auto_rotate: bool,
    /// 1.0 is one full turn per minute.
    pub auto_rotate_speed: f32,
    /// Fraction of the pending motion applied per 60 Hz frame. Zero disables
    /// damping.
    pub damping: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl OrbitControls {
    /// Zoom and pan disabled, slow auto-rotation.
    pub fn backdrop(auto_rotate_speed: f32) -> Self {
        Self {
            enable_zoom: false,
            enable_pan: false,
            auto_rotate: true,
            auto_rotate_speed,
            ..Self::default()
        }
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            enable_rotate: true,
            enable_zoom: true,
            enable_pan: true,
            auto_rotate: false,
            auto_rotate_speed: 2.0,
            damping: 0.05,
            min_distance: 1.0,
            max_distance: 50.0,
        }
    }
}
