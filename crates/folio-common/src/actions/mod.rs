mod action_enum;
mod dispatch;

pub use action_enum::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FormField, QuickActionKind, SceneId, SectionId};

    #[test]
    fn every_section_has_a_label() {
        for section in SectionId::ALL {
            let label = Action::ScrollToSection(section).label();
            assert!(label.ends_with(section.label()), "{label}");
        }
    }

    #[test]
    fn scene_labels() {
        assert_eq!(
            Action::SelectScene(SceneId::Spheres).label(),
            "Show Spheres Scene"
        );
    }

    #[test]
    fn none_is_not_interactive() {
        assert!(!Action::None.is_interactive());
        assert!(Action::SubmitContact.is_interactive());
    }

    #[test]
    fn action_serde_roundtrip() {
        let actions = vec![
            Action::ScrollToSection(SectionId::Contact),
            Action::SelectScene(SceneId::Geometry),
            Action::FocusField(FormField::Email),
            Action::QuickAction(QuickActionKind::DownloadCv),
            Action::OpenLink("https://github.com/TemoTemo12".into()),
        ];

        for action in &actions {
            let json = serde_json::to_string(action).unwrap();
            let deserialized: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(*action, deserialized);
        }
    }
}
