//! Validation for notifications and performance.

use crate::schema::FolioConfig;

use super::helpers::check_range;

pub(crate) fn validate_notifications(errors: &mut Vec<String>, config: &mut FolioConfig) {
    check_range(
        errors,
        "notifications.capacity",
        &mut config.notifications.capacity,
        1,
        10,
    );
    check_range(
        errors,
        "notifications.ttl_secs",
        &mut config.notifications.ttl_secs,
        1,
        60,
    );
}

pub(crate) fn validate_performance(errors: &mut Vec<String>, config: &mut FolioConfig) {
    check_range(
        errors,
        "performance.frame_rate",
        &mut config.performance.frame_rate,
        30,
        240,
    );
}
