//! Canned "AI suggestion" texts. A static table, not an inference call.

use crate::models::{ContentPatch, SectionKind};

pub const ABOUT_SUGGESTION: &str =
    "Целеустремленный разработчик с 5+ годами опыта в создании современных веб-приложений";
pub const EXPERIENCE_SUGGESTION: &str =
    "Разработал масштабируемые веб-приложения, оптимизировал производительность на 30%";

/// Partial content to merge into a section of `kind`. Empty for kinds without a suggestion.
pub fn suggestion(kind: SectionKind) -> ContentPatch {
    let description = match kind {
        SectionKind::About => ABOUT_SUGGESTION,
        SectionKind::Experience => EXPERIENCE_SUGGESTION,
        SectionKind::Education | SectionKind::Skills | SectionKind::Certificates => {
            return ContentPatch::new()
        }
    };
    ContentPatch::from([("description".to_string(), description.to_string())])
}

/// Lookup by raw type name; unknown names yield an empty mapping.
pub fn suggestion_for(type_name: &str) -> ContentPatch {
    type_name
        .parse::<SectionKind>()
        .map(suggestion)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SectionContent;

    #[test]
    fn test_about_and_experience_have_description_only() {
        for kind in [SectionKind::About, SectionKind::Experience] {
            let patch = suggestion(kind);
            assert!(!patch.is_empty());
            assert_eq!(patch.keys().collect::<Vec<_>>(), vec!["description"]);
        }
    }

    #[test]
    fn test_suggestion_keys_belong_to_their_kind() {
        for kind in SectionKind::ALL {
            let content = SectionContent::default_for(kind);
            for key in suggestion(kind).keys() {
                assert!(content.field(key).is_some(), "{key} is not a {kind} field");
            }
        }
    }

    #[test]
    fn test_other_kinds_are_empty() {
        assert!(suggestion(SectionKind::Skills).is_empty());
        assert!(suggestion(SectionKind::Education).is_empty());
        assert!(suggestion(SectionKind::Certificates).is_empty());
    }

    #[test]
    fn test_unknown_type_name_is_empty() {
        assert!(suggestion_for("hobbies").is_empty());
        assert_eq!(
            suggestion_for("about").get("description").map(String::as_str),
            Some(ABOUT_SUGGESTION)
        );
    }
}
