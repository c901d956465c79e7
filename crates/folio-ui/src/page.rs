//! The whole page: owns every view's state and lays the sections out in
//! order each frame.

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use folio_common::{
    DrawList, FormField, Notification, NotificationQueue, QuickActionKind, Rect, SceneId,
    SectionId, SurfaceId,
};
use folio_config::{validation, FolioConfig, Palette};
use folio_scene::{HeroScene, PlaygroundOptions, PlaygroundScene};
use tracing::{debug, info, warn};

use crate::content::QuickAction;
use crate::form::{ContactForm, EnterOutcome, FormError};
use crate::layout::{Painter, SmoothScroll};
use crate::motion::{RevealTracker, Typewriter};
use crate::sections::{about, contact, footer, hero, nav, playground, projects, skills, toasts};
use crate::theme::Theme;

/// Fraction of the viewport moved by Page Up / Page Down.
const PAGE_STEP: f32 = 0.9;

/// Timing values taken from the config that the layout needs each frame.
#[derive(Debug, Clone, PartialEq)]
struct Timing {
    stagger: f32,
    skill_bar: f32,
    wheel_line: f32,
}

impl Timing {
    fn from_config(config: &FolioConfig) -> Self {
        Self {
            stagger: config.animation.stagger as f32,
            skill_bar: config.animation.skill_bar_duration as f32,
            wheel_line: config.animation.wheel_line_px as f32,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct HeroSettings {
    name: String,
    typed_text: String,
    type_interval: Duration,
    cursor_blink: Duration,
    star_count: u32,
    auto_rotate_speed: f32,
}

impl HeroSettings {
    fn from_config(config: &FolioConfig) -> Self {
        let hero = &config.hero;
        Self {
            name: hero.name.clone(),
            typed_text: hero.typed_text.clone(),
            type_interval: Duration::from_millis(u64::from(hero.type_interval_ms)),
            cursor_blink: Duration::from_millis(u64::from(hero.cursor_blink_ms)),
            star_count: hero.star_count,
            auto_rotate_speed: hero.auto_rotate_speed as f32,
        }
    }
}

/// Copy of `config` with every range-checked value pulled into bounds.
fn clamped(config: &FolioConfig) -> FolioConfig {
    let mut config = config.clone();
    if let Err(e) = validation::sanitize(&mut config) {
        warn!("{e}; clamped");
    }
    config
}

fn playground_options(config: &FolioConfig) -> PlaygroundOptions {
    let pg = &config.playground;
    PlaygroundOptions {
        star_count: pg.star_count,
        fov: pg.fov as f32,
        auto_rotate_speed: pg.auto_rotate_speed as f32,
        enable_zoom: pg.enable_zoom,
        enable_pan: pg.enable_pan,
    }
}

/// Every piece of mutable UI state.
pub struct Page {
    theme: Theme,
    reveal: RevealTracker,
    typewriter: Typewriter,
    hero_settings: HeroSettings,
    hero: HeroScene,
    playground: PlaygroundScene,
    playground_options: PlaygroundOptions,
    form: ContactForm,
    toasts: NotificationQueue,
    scroll: SmoothScroll,
    timing: Timing,
    /// Page clock in seconds, advanced by frame time.
    clock: f32,
    /// Document y of each section, in [`SectionId::ALL`] order.
    section_tops: [f32; 6],
    page_height: f32,
    viewport: (f32, f32),
    pointer: Option<(f32, f32)>,
    /// Where the 3D surfaces were placed in the last frame, window coordinates.
    surfaces: Vec<(SurfaceId, Rect)>,
}

impl Page {
    pub fn new(config: &FolioConfig, scene: SceneId) -> Self {
        let config = &clamped(config);
        let hero_settings = HeroSettings::from_config(config);
        let typewriter = Typewriter::new(
            &hero_settings.typed_text,
            hero_settings.type_interval,
            hero_settings.cursor_blink,
        );
        let hero = HeroScene::new(hero_settings.star_count, hero_settings.auto_rotate_speed);
        let options = playground_options(config);
        let anim = &config.animation;
        let reveal = RevealTracker::new(
            anim.reveal_duration as f32,
            anim.reveal_offset as f32,
            anim.reduced_motion,
        );
        let toasts = NotificationQueue::new(config.notifications.capacity as usize)
            .with_default_ttl(Duration::from_secs(u64::from(config.notifications.ttl_secs)));

        info!(scene = %scene, "page created");
        Self {
            theme: Theme::new(Palette::resolve(&config.colors), &config.font),
            reveal,
            typewriter,
            hero_settings,
            hero,
            playground: PlaygroundScene::new(scene, options),
            playground_options: options,
            form: ContactForm::new(),
            toasts,
            scroll: SmoothScroll::new(anim.scroll_duration as f32),
            timing: Timing::from_config(config),
            clock: 0.0,
            section_tops: [0.0; 6],
            page_height: 0.0,
            viewport: (0.0, 0.0),
            pointer: None,
            surfaces: Vec::new(),
        }
    }

    /// Applies a reloaded config. View state (form contents, scroll
    /// position, selected scene) survives; the hero and playground are
    /// rebuilt only when their settings changed.
    pub fn apply_config(&mut self, config: &FolioConfig) {
        let config = &clamped(config);
        self.theme = Theme::new(Palette::resolve(&config.colors), &config.font);
        let anim = &config.animation;
        self.reveal.set_timing(
            anim.reveal_duration as f32,
            anim.reveal_offset as f32,
            anim.reduced_motion,
        );
        self.scroll.set_duration(anim.scroll_duration as f32);
        self.toasts.set_limits(
            config.notifications.capacity as usize,
            Duration::from_secs(u64::from(config.notifications.ttl_secs)),
        );
        self.timing = Timing::from_config(config);

        let hero_settings = HeroSettings::from_config(config);
        if hero_settings != self.hero_settings {
            self.typewriter.reset(
                &hero_settings.typed_text,
                hero_settings.type_interval,
                hero_settings.cursor_blink,
            );
            self.hero = HeroScene::new(hero_settings.star_count, hero_settings.auto_rotate_speed);
            self.hero_settings = hero_settings;
            debug!("hero rebuilt from config");
        }

        let options = playground_options(config);
        if options != self.playground_options {
            self.playground = PlaygroundScene::new(self.playground.current(), options);
            self.playground_options = options;
            debug!("playground rebuilt from config");
        }
        info!("config applied to page");
    }

    /// Advances every animation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.clock += dt;
        for state in self.typewriter.advance(dt) {
            debug!(typed = %state, "typewriter");
        }
        self.hero.update(dt);
        self.playground.update(dt);
        self.scroll.update(self.clock);
    }

    /// Lays out the page for a `width` x `height` window and appends the
    /// result to `list`.
    pub fn build(
        &mut self,
        list: &mut DrawList,
        width: f32,
        height: f32,
        now: Instant,
        today: NaiveDate,
    ) {
        self.viewport = (width, height);
        let mut p = Painter {
            list: &mut *list,
            theme: &self.theme,
            reveal: &mut self.reveal,
            scroll: self.scroll.offset(),
            width,
            height,
            now: self.clock,
            stagger: self.timing.stagger,
            pointer: self.pointer,
        };

        let mut tops = [0.0f32; 6];
        let mut y = 0.0;
        tops[0] = y;
        y += hero::build(&mut p, y, &self.hero_settings.name, &self.typewriter);
        tops[1] = y;
        y += about::build(&mut p, y);
        tops[2] = y;
        y += projects::build(&mut p, y);
        tops[3] = y;
        y += skills::build(&mut p, y, self.timing.skill_bar);
        tops[4] = y;
        y += playground::build(&mut p, y, self.playground.current());
        tops[5] = y;
        y += contact::build(&mut p, y, &self.form);
        y += footer::build(&mut p, y, today);

        p.list.cull(Rect::new(0.0, 0.0, width, height));
        nav::build(&mut p);
        let visible = self.toasts.visible_at(now);
        toasts::build(&mut p, &visible, now);

        self.surfaces = list.surfaces.iter().map(|s| (s.id, s.rect)).collect();
        self.section_tops = tops;
        self.page_height = y;
        self.scroll.set_extent(y, height);
    }

    // -- Scrolling --

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset()
    }

    pub fn page_height(&self) -> f32 {
        self.page_height
    }

    pub fn section_top(&self, section: SectionId) -> f32 {
        SectionId::ALL
            .iter()
            .position(|s| *s == section)
            .map_or(0.0, |i| self.section_tops[i])
    }

    /// Smooth-scrolls so `section` starts at the top of the window.
    pub fn scroll_to_section(&mut self, section: SectionId) {
        let target = self.section_top(section);
        debug!(%section, target, "scroll to section");
        self.scroll.scroll_to(target, self.clock);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll.scroll_to(0.0, self.clock);
    }

    pub fn scroll_by(&mut self, pixels: f32) {
        self.scroll.scroll_by(pixels);
    }

    /// Wheel scroll measured in lines.
    pub fn scroll_lines(&mut self, lines: f32) {
        self.scroll.scroll_by(lines * self.timing.wheel_line);
    }

    pub fn page_down(&mut self) {
        let target = self.scroll.offset() + self.viewport.1 * PAGE_STEP;
        self.scroll.scroll_to(target, self.clock);
    }

    pub fn page_up(&mut self) {
        let target = self.scroll.offset() - self.viewport.1 * PAGE_STEP;
        self.scroll.scroll_to(target, self.clock);
    }

    // -- Playground --

    /// Returns `true` when the scene changed.
    pub fn select_scene(&mut self, scene: SceneId) -> bool {
        self.playground.select(scene)
    }

    pub fn playground(&self) -> &PlaygroundScene {
        &self.playground
    }

    pub fn playground_mut(&mut self) -> &mut PlaygroundScene {
        &mut self.playground
    }

    pub fn hero(&self) -> &HeroScene {
        &self.hero
    }

    pub fn hero_mut(&mut self) -> &mut HeroScene {
        &mut self.hero
    }

    /// Window rectangle of a 3D surface in the last built frame, if visible.
    pub fn surface_rect(&self, id: SurfaceId) -> Option<Rect> {
        self.surfaces
            .iter()
            .find(|(sid, _)| *sid == id)
            .map(|(_, rect)| *rect)
    }

    // -- Contact --

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn focus_field(&mut self, field: FormField) {
        self.form.set_focus(field);
    }

    pub fn blur_form(&mut self) {
        self.form.blur();
    }

    pub fn focus_next_field(&mut self) {
        self.form.focus_next();
    }

    pub fn focus_prev_field(&mut self) {
        self.form.focus_prev();
    }

    /// Returns `true` when a form field consumed the text.
    pub fn type_text(&mut self, text: &str) -> bool {
        if self.form.focus().is_none() {
            return false;
        }
        self.form.insert_text(text);
        true
    }

    pub fn backspace(&mut self) -> bool {
        if self.form.focus().is_none() {
            return false;
        }
        self.form.backspace();
        true
    }

    /// Enter inside the form: submits from single-line fields, inserts a
    /// newline in the message. Returns `false` when no field is focused.
    pub fn enter(&mut self) -> bool {
        match self.form.enter() {
            EnterOutcome::Submit => {
                // Validation errors stay inline.
                let _ = self.submit_contact();
                true
            }
            EnterOutcome::Newline => true,
            EnterOutcome::Ignored => false,
        }
    }

    /// Validates the form. On success it is cleared and one confirmation
    /// toast is shown; on failure the form is untouched apart from focus
    /// and the inline error.
    pub fn submit_contact(&mut self) -> Result<(), FormError> {
        self.form.submit()?;
        self.toasts.push(Notification::success(
            "Message Sent!",
            "Thank you for your message. I'll get back to you soon!",
        ));
        Ok(())
    }

    pub fn quick_action(&mut self, kind: QuickActionKind) {
        let action = QuickAction::find(kind);
        let (title, body) = action.toast;
        self.toasts.push(Notification::info(title, body));
    }

    // -- Toasts and pointer --

    pub fn notify(&mut self, notification: Notification) {
        self.toasts.push(notification);
    }

    pub fn toasts(&self) -> &NotificationQueue {
        &self.toasts
    }

    pub fn set_pointer(&mut self, pointer: Option<(f32, f32)>) {
        self.pointer = pointer;
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }
}
