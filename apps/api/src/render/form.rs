//! Form descriptors: which inputs a client draws for each section type.

use serde::Serialize;

use crate::editor::suggestions::suggestion;
use crate::models::SectionKind;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub placeholder: &'static str,
    /// Textarea rather than a single-line input.
    pub multiline: bool,
}

const fn input(name: &'static str, placeholder: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        placeholder,
        multiline: false,
    }
}

const fn textarea(name: &'static str, placeholder: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        placeholder,
        multiline: true,
    }
}

const ABOUT_FIELDS: &[FieldSpec] = &[
    input("title", "Заголовок"),
    textarea("description", "Описание"),
];

const EXPERIENCE_FIELDS: &[FieldSpec] = &[
    input("position", "Должность"),
    input("company", "Компания"),
    input("period", "Период"),
    textarea("description", "Описание"),
];

const EDUCATION_FIELDS: &[FieldSpec] = &[
    input("institution", "Учебное заведение"),
    input("degree", "Специальность"),
    input("period", "Период"),
];

const SKILLS_FIELDS: &[FieldSpec] = &[textarea("skills", "Навыки (через запятую)")];

const CERTIFICATES_FIELDS: &[FieldSpec] = &[
    input("name", "Название сертификата"),
    input("issuer", "Организация"),
    input("date", "Дата"),
];

pub fn fields(kind: SectionKind) -> &'static [FieldSpec] {
    match kind {
        SectionKind::About => ABOUT_FIELDS,
        SectionKind::Experience => EXPERIENCE_FIELDS,
        SectionKind::Education => EDUCATION_FIELDS,
        SectionKind::Skills => SKILLS_FIELDS,
        SectionKind::Certificates => CERTIFICATES_FIELDS,
    }
}

/// Label shown in the "add section" picker.
pub fn kind_label(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::About => "О себе",
        SectionKind::Experience => "Опыт",
        SectionKind::Education => "Образование",
        SectionKind::Skills => "Навыки",
        SectionKind::Certificates => "Сертификаты",
    }
}

/// Whether the form shows the suggestion button.
pub fn supports_suggestion(kind: SectionKind) -> bool {
    !suggestion(kind).is_empty()
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionKindDescriptor {
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub label: &'static str,
    pub fields: &'static [FieldSpec],
    pub suggestion: bool,
}

/// Descriptors for every section type, in picker order.
pub fn describe_kinds() -> Vec<SectionKindDescriptor> {
    SectionKind::ALL
        .into_iter()
        .map(|kind| SectionKindDescriptor {
            kind,
            label: kind_label(kind),
            fields: fields(kind),
            suggestion: supports_suggestion(kind),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SectionContent;

    #[test]
    fn test_fields_cover_exactly_the_content_shape() {
        for kind in SectionKind::ALL {
            let content = SectionContent::default_for(kind);
            let specs = fields(kind);
            for spec in specs {
                assert!(
                    content.field(spec.name).is_some(),
                    "{} is not a {kind} field",
                    spec.name
                );
            }
            let value = serde_json::to_value(&content).unwrap();
            let shape = value["content"].as_object().unwrap();
            assert_eq!(shape.len(), specs.len(), "field count for {kind}");
        }
    }

    #[test]
    fn test_only_about_and_experience_offer_suggestions() {
        let with_button: Vec<SectionKind> = describe_kinds()
            .into_iter()
            .filter(|d| d.suggestion)
            .map(|d| d.kind)
            .collect();
        assert_eq!(
            with_button,
            vec![SectionKind::About, SectionKind::Experience]
        );
    }

    #[test]
    fn test_descriptions_are_multiline() {
        assert!(fields(SectionKind::Experience)
            .iter()
            .any(|f| f.name == "description" && f.multiline));
        assert!(fields(SectionKind::Skills)[0].multiline);
        assert!(!fields(SectionKind::Certificates)[0].multiline);
    }
}
