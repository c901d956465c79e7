//! Validation for hero timing, playground, and animation settings.

use folio_common::SceneId;

use crate::schema::FolioConfig;

use super::helpers::{check_range, check_range_f64};

pub(crate) fn validate_hero(errors: &mut Vec<String>, config: &mut FolioConfig) {
    let hero = &mut config.hero;
    check_range(errors, "hero.type_interval_ms", &mut hero.type_interval_ms, 10, 2000);
    check_range(errors, "hero.cursor_blink_ms", &mut hero.cursor_blink_ms, 100, 5000);
    check_range(errors, "hero.star_count", &mut hero.star_count, 0, 20_000);
    check_range_f64(
        errors,
        "hero.auto_rotate_speed",
        &mut hero.auto_rotate_speed,
        0.0,
        10.0,
    );
}

pub(crate) fn validate_playground(errors: &mut Vec<String>, config: &mut FolioConfig) {
    let pg = &mut config.playground;
    if pg.default_scene.parse::<SceneId>().is_err() {
        errors.push(format!(
            "playground.default_scene = '{}' is not one of text, spheres, geometry",
            pg.default_scene
        ));
    }
    check_range(errors, "playground.star_count", &mut pg.star_count, 0, 20_000);
    check_range_f64(errors, "playground.fov", &mut pg.fov, 30.0, 120.0);
    check_range_f64(
        errors,
        "playground.auto_rotate_speed",
        &mut pg.auto_rotate_speed,
        0.0,
        10.0,
    );
}

pub(crate) fn validate_animation(errors: &mut Vec<String>, config: &mut FolioConfig) {
    let a = &mut config.animation;
    check_range_f64(errors, "animation.reveal_duration", &mut a.reveal_duration, 0.0, 5.0);
    check_range_f64(errors, "animation.stagger", &mut a.stagger, 0.0, 2.0);
    check_range(errors, "animation.reveal_offset", &mut a.reveal_offset, 0, 200);
    check_range_f64(
        errors,
        "animation.skill_bar_duration",
        &mut a.skill_bar_duration,
        0.0,
        5.0,
    );
    check_range_f64(errors, "animation.scroll_duration", &mut a.scroll_duration, 0.0, 3.0);
    check_range(errors, "animation.wheel_line_px", &mut a.wheel_line_px, 10, 400);
}
