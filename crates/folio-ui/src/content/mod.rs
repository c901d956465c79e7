//! Static page content.
//!
//! Everything here is defined at compile time and never mutated.

mod about;
mod contact;
mod projects;
mod skills;

pub use about::{FUN_FACTS, SKILL_GROUPS, TIMELINE, WHAT_I_DO};
pub use contact::{AVAILABILITY, CONTACT_INFO, FOOTER_LINKS, QUICK_ACTIONS, SOCIAL_LINKS};
pub use projects::{PROJECTS, PROJECTS_URL};
pub use skills::{LEARNING_PATH, PLAYGROUND_TECH, SKILL_CATEGORIES, TECHNOLOGIES};

use folio_common::{QuickActionKind, SectionId};

/// Owner name shown in the hero headline and the footer.
pub const OWNER: &str = "TEMO";
pub const BRAND: &str = "<TEMO/>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Featured,
    New,
    Popular,
    Classic,
    Active,
    Tool,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Featured => "Featured",
            ProjectStatus::New => "New",
            ProjectStatus::Popular => "Popular",
            ProjectStatus::Classic => "Classic",
            ProjectStatus::Active => "Active",
            ProjectStatus::Tool => "Tool",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub github: &'static str,
    pub live: &'static str,
    pub status: ProjectStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Badge group in the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Percent, 0..=100.
    pub level: u8,
    /// Bar gradient endpoints as hex colours.
    pub gradient: (&'static str, &'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technology {
    pub name: &'static str,
    pub glyph: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub label: &'static str,
    pub value: &'static str,
    pub link: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub kind: QuickActionKind,
    pub title: &'static str,
    pub description: &'static str,
    /// Toast shown when the action is triggered.
    pub toast: (&'static str, &'static str),
}

impl QuickAction {
    pub fn find(kind: QuickActionKind) -> &'static QuickAction {
        match kind {
            QuickActionKind::ScheduleCall => &QUICK_ACTIONS[0],
            QuickActionKind::DownloadCv => &QUICK_ACTIONS[1],
            QuickActionKind::QuickChat => &QUICK_ACTIONS[2],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// A row of the availability card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityRow {
    pub label: &'static str,
    pub value: &'static str,
    /// Highlighted with a status dot.
    pub live: bool,
}

/// A footer quick link and the section it scrolls to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub name: &'static str,
    pub section: SectionId,
}

/// `true` for `#` links that have no real destination.
pub fn is_placeholder_link(href: &str) -> bool {
    href.trim() == "#"
}
