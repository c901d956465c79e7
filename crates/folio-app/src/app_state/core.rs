//! FolioApp struct definition and constructor.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::keyboard::ModifiersState;
use winit::window::{CursorIcon, Window};

use folio_common::{DrawList, SceneId};
use folio_config::schema::FolioConfig;
use folio_config::ReloadManager;
use folio_renderer::{FrameTimer, RenderState};
use folio_ui::Page;

use super::pointer::OrbitDrag;
use super::types::frame_interval;
use crate::clipboard::Clipboard;

/// Top-level application state.
pub struct FolioApp {
    pub(super) config: FolioConfig,
    /// `--config` override, used for manual reloads when live reload is off.
    pub(super) config_override: Option<PathBuf>,
    /// File watched for live reload.
    pub(super) watch_path: Option<PathBuf>,
    pub(super) reload: Option<ReloadManager>,

    // Page state and the draw list it fills each frame
    pub(super) page: Page,
    pub(super) list: DrawList,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,
    pub(super) timer: FrameTimer,

    // Input tracking (winit sends modifiers separately)
    pub(super) modifiers: ModifiersState,
    /// Pointer position in logical pixels.
    pub(super) cursor: Option<(f32, f32)>,
    pub(super) cursor_icon: CursorIcon,
    pub(super) drag: Option<OrbitDrag>,

    // Created on first use; not every session has a clipboard.
    pub(super) clipboard: Option<Clipboard>,

    // Frame pacing
    pub(super) frame_interval: Duration,
    pub(super) next_frame: Instant,

    pub(super) should_exit: bool,
}

impl FolioApp {
    pub fn new(
        config: FolioConfig,
        scene: SceneId,
        config_override: Option<PathBuf>,
        watch_path: Option<PathBuf>,
    ) -> Self {
        let page = Page::new(&config, scene);
        let frame_interval = frame_interval(config.performance.frame_rate);
        Self {
            config,
            config_override,
            watch_path,
            reload: None,
            page,
            list: DrawList::new(),
            window: None,
            render_state: None,
            timer: FrameTimer::new(),
            modifiers: ModifiersState::empty(),
            cursor: None,
            cursor_icon: CursorIcon::Default,
            drag: None,
            clipboard: None,
            frame_interval,
            next_frame: Instant::now(),
            should_exit: false,
        }
    }

    /// Request a redraw from the window.
    pub(super) fn request_redraw(&self) {
        if let Some(ref w) = self.window {
            w.request_redraw();
        }
    }

    /// Window scale factor, 1.0 before the window exists.
    pub(super) fn scale_factor(&self) -> f64 {
        self.window.as_ref().map_or(1.0, |w| w.scale_factor())
    }
}
