//! Default TOML config template with inline documentation comments.

pub(crate) fn default_config_toml() -> &'static str {
    r##"# Folio configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# Edits are applied live while the window is open.

[colors]
# primary = "#3b82f6"
# accent = "#8b5cf6"
# success = "#10b981"
# warning = "#f59e0b"
# error = "#ef4444"
# background = "#0b0f1a"
# surface = "#111827"
# secondary = "#1e293b"
# text = "#f8fafc"
# text_muted = "#94a3b8"
# border = "rgba(148,163,184,0.18)"

[font]
# family = "sans-serif"
# mono_family = "monospace"
# size = 16              # 10-32
# line_height = 1.5      # 1.0-3.0

[window]
# title = "TEMO | Portfolio"
# width = 1280           # 480-7680
# height = 800           # 360-4320
# startup_mode = "windowed"   # windowed, maximized, fullscreen

[hero]
# name = "TEMO"
# typed_text = "Full-Stack Developer"
# type_interval_ms = 100 # 10-2000
# cursor_blink_ms = 500  # 100-5000
# star_count = 5000      # 0-20000
# auto_rotate_speed = 0.5

[playground]
default_scene = "text"   # text, spheres, geometry
# star_count = 3000      # 0-20000
# fov = 75.0             # 30-120 degrees
# auto_rotate_speed = 0.5
# enable_zoom = true
# enable_pan = true

[animation]
# reveal_duration = 0.6  # seconds
# stagger = 0.1          # seconds per item
# reveal_offset = 30     # pixels
# skill_bar_duration = 1.0
# scroll_duration = 0.6
# wheel_line_px = 60
# reduced_motion = false

[notifications]
# capacity = 3           # 1-10
# ttl_secs = 5           # 1-60

[performance]
# frame_rate = 60        # 30-240
# vsync = true

[logging]
# level = "info"         # trace, debug, info, warn, error

[advanced]
# live_reload = true

[advanced.developer]
# show_fps = false
# show_hit_regions = false
"##
}
