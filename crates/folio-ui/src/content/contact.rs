use folio_common::{QuickActionKind, SectionId};

use super::{AvailabilityRow, ContactInfo, FooterLink, QuickAction, SocialLink};

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        label: "Email",
        value: "temo@example.com",
        link: Some("mailto:temo@example.com"),
    },
    ContactInfo {
        label: "GitHub",
        value: "@TemoTemo12",
        link: Some("https://github.com/TemoTemo12"),
    },
    ContactInfo {
        label: "Facebook",
        value: "Connect on Facebook",
        link: Some("#"),
    },
    ContactInfo {
        label: "Location",
        value: "Available Remotely",
        link: None,
    },
];

pub const QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction {
        kind: QuickActionKind::ScheduleCall,
        title: "Schedule a Call",
        description: "Book a free consultation",
        toast: ("Calendar", "Calendar booking would open here"),
    },
    QuickAction {
        kind: QuickActionKind::DownloadCv,
        title: "Download CV",
        description: "Get my latest resume",
        toast: ("Download", "CV download would start here"),
    },
    QuickAction {
        kind: QuickActionKind::QuickChat,
        title: "Quick Chat",
        description: "Immediate response",
        toast: ("Chat", "Chat widget would open here"),
    },
];

pub const AVAILABILITY: &[AvailabilityRow] = &[
    AvailabilityRow {
        label: "Status",
        value: "Available",
        live: true,
    },
    AvailabilityRow {
        label: "Response Time",
        value: "Within 24 hours",
        live: false,
    },
    AvailabilityRow {
        label: "Time Zone",
        value: "UTC+4",
        live: false,
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/TemoTemo12",
    },
    SocialLink {
        label: "Email",
        href: "mailto:temo@example.com",
    },
    SocialLink {
        label: "Facebook",
        href: "#",
    },
];

pub const FOOTER_LINKS: &[FooterLink] = &[
    FooterLink {
        name: "About",
        section: SectionId::About,
    },
    FooterLink {
        name: "Projects",
        section: SectionId::Projects,
    },
    FooterLink {
        name: "Skills",
        section: SectionId::Skills,
    },
    FooterLink {
        name: "Contact",
        section: SectionId::Contact,
    },
];
