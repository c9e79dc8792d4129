use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

/// Label every fresh `about` section starts with.
pub const DEFAULT_ABOUT_TITLE: &str = "О себе";

/// Partial field mapping used by form edits and suggestions.
/// Keys that do not belong to the target section's kind are ignored on merge.
pub type ContentPatch = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    About,
    Experience,
    Education,
    Skills,
    Certificates,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown section type '{0}'")]
pub struct UnknownSectionKind(pub String);

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::About,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Certificates,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::About => "about",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Certificates => "certificates",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = UnknownSectionKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownSectionKind(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AboutContent {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExperienceContent {
    pub position: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EducationContent {
    pub institution: String,
    pub degree: String,
    pub period: String,
}

/// Free text; the comma-separated convention is never parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillsContent {
    pub skills: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CertificatesContent {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

/// Variant-shaped section content. Serialized adjacently tagged so a section reads
/// `{"id": .., "type": "experience", "content": {..}}` on disk and on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum SectionContent {
    About(AboutContent),
    Experience(ExperienceContent),
    Education(EducationContent),
    Skills(SkillsContent),
    Certificates(CertificatesContent),
}

impl SectionContent {
    /// Default shape for a freshly added section: empty fields, except the about title.
    pub fn default_for(kind: SectionKind) -> Self {
        match kind {
            SectionKind::About => SectionContent::About(AboutContent {
                title: DEFAULT_ABOUT_TITLE.to_string(),
                description: String::new(),
            }),
            SectionKind::Experience => SectionContent::Experience(ExperienceContent::default()),
            SectionKind::Education => SectionContent::Education(EducationContent::default()),
            SectionKind::Skills => SectionContent::Skills(SkillsContent::default()),
            SectionKind::Certificates => {
                SectionContent::Certificates(CertificatesContent::default())
            }
        }
    }

    pub fn kind(&self) -> SectionKind {
        match self {
            SectionContent::About(_) => SectionKind::About,
            SectionContent::Experience(_) => SectionKind::Experience,
            SectionContent::Education(_) => SectionKind::Education,
            SectionContent::Skills(_) => SectionKind::Skills,
            SectionContent::Certificates(_) => SectionKind::Certificates,
        }
    }

    /// Builds content of `kind` from a bare field object, as sent by form clients.
    /// Every field of the kind must be present and no foreign field is accepted.
    pub fn from_fields(kind: SectionKind, fields: Value) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            SectionKind::About => SectionContent::About(serde_json::from_value(fields)?),
            SectionKind::Experience => {
                SectionContent::Experience(serde_json::from_value(fields)?)
            }
            SectionKind::Education => SectionContent::Education(serde_json::from_value(fields)?),
            SectionKind::Skills => SectionContent::Skills(serde_json::from_value(fields)?),
            SectionKind::Certificates => {
                SectionContent::Certificates(serde_json::from_value(fields)?)
            }
        })
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match self {
            SectionContent::About(c) => match name {
                "title" => &c.title,
                "description" => &c.description,
                _ => return None,
            },
            SectionContent::Experience(c) => match name {
                "position" => &c.position,
                "company" => &c.company,
                "period" => &c.period,
                "description" => &c.description,
                _ => return None,
            },
            SectionContent::Education(c) => match name {
                "institution" => &c.institution,
                "degree" => &c.degree,
                "period" => &c.period,
                _ => return None,
            },
            SectionContent::Skills(c) => match name {
                "skills" => &c.skills,
                _ => return None,
            },
            SectionContent::Certificates(c) => match name {
                "name" => &c.name,
                "issuer" => &c.issuer,
                "date" => &c.date,
                _ => return None,
            },
        };
        Some(value.as_str())
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match self {
            SectionContent::About(c) => match name {
                "title" => Some(&mut c.title),
                "description" => Some(&mut c.description),
                _ => None,
            },
            SectionContent::Experience(c) => match name {
                "position" => Some(&mut c.position),
                "company" => Some(&mut c.company),
                "period" => Some(&mut c.period),
                "description" => Some(&mut c.description),
                _ => None,
            },
            SectionContent::Education(c) => match name {
                "institution" => Some(&mut c.institution),
                "degree" => Some(&mut c.degree),
                "period" => Some(&mut c.period),
                _ => None,
            },
            SectionContent::Skills(c) => match name {
                "skills" => Some(&mut c.skills),
                _ => None,
            },
            SectionContent::Certificates(c) => match name {
                "name" => Some(&mut c.name),
                "issuer" => Some(&mut c.issuer),
                "date" => Some(&mut c.date),
                _ => None,
            },
        }
    }

    /// Overwrites the fields named in `patch`, preserving all others.
    /// Returns true if any field value actually changed.
    pub fn merge(&mut self, patch: &ContentPatch) -> bool {
        let mut changed = false;
        for (name, value) in patch {
            if let Some(slot) = self.field_mut(name) {
                if slot != value {
                    slot.clone_from(value);
                    changed = true;
                }
            }
        }
        changed
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    #[serde(flatten)]
    pub content: SectionContent,
}

impl Section {
    /// New section with a fresh unique id and the default content for `kind`.
    pub fn new(kind: SectionKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: SectionContent::default_for(kind),
        }
    }

    pub fn kind(&self) -> SectionKind {
        self.content.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_round_trips_through_str() {
        for kind in SectionKind::ALL {
            assert_eq!(kind.as_str().parse::<SectionKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = "projects".parse::<SectionKind>().unwrap_err();
        assert_eq!(err, UnknownSectionKind("projects".to_string()));
    }

    #[test]
    fn test_default_about_has_fixed_title() {
        let content = SectionContent::default_for(SectionKind::About);
        assert_eq!(content.field("title"), Some(DEFAULT_ABOUT_TITLE));
        assert_eq!(content.field("description"), Some(""));
    }

    #[test]
    fn test_default_shapes_serialize_to_documented_fields() {
        let cases = [
            (SectionKind::About, json!({"title": DEFAULT_ABOUT_TITLE, "description": ""})),
            (
                SectionKind::Experience,
                json!({"position": "", "company": "", "period": "", "description": ""}),
            ),
            (
                SectionKind::Education,
                json!({"institution": "", "degree": "", "period": ""}),
            ),
            (SectionKind::Skills, json!({"skills": ""})),
            (
                SectionKind::Certificates,
                json!({"name": "", "issuer": "", "date": ""}),
            ),
        ];
        for (kind, expected) in cases {
            let value = serde_json::to_value(SectionContent::default_for(kind)).unwrap();
            assert_eq!(value["type"], json!(kind.as_str()));
            assert_eq!(value["content"], expected, "default shape for {kind}");
        }
    }

    #[test]
    fn test_section_wire_format() {
        let section = Section {
            id: "42".to_string(),
            content: SectionContent::Skills(SkillsContent {
                skills: "Rust, SQL".to_string(),
            }),
        };
        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(
            value,
            json!({"id": "42", "type": "skills", "content": {"skills": "Rust, SQL"}})
        );
        let back: Section = serde_json::from_value(value).unwrap();
        assert_eq!(back, section);
    }

    #[test]
    fn test_section_rejects_fields_from_other_kind() {
        let raw = json!({
            "id": "7",
            "type": "skills",
            "content": {"skills": "", "company": "Acme"}
        });
        assert!(serde_json::from_value::<Section>(raw).is_err());
    }

    #[test]
    fn test_from_fields_requires_every_field() {
        let partial = json!({"position": "Engineer"});
        assert!(SectionContent::from_fields(SectionKind::Experience, partial).is_err());

        let full = json!({"institution": "MIT", "degree": "BSc", "period": "2010-2014"});
        let content = SectionContent::from_fields(SectionKind::Education, full).unwrap();
        assert_eq!(content.kind(), SectionKind::Education);
        assert_eq!(content.field("degree"), Some("BSc"));
    }

    #[test]
    fn test_merge_overwrites_known_keys_and_ignores_foreign() {
        let mut content = SectionContent::default_for(SectionKind::Experience);
        let patch = ContentPatch::from([
            ("company".to_string(), "Acme".to_string()),
            ("skills".to_string(), "ignored".to_string()),
        ]);
        assert!(content.merge(&patch));
        assert_eq!(content.field("company"), Some("Acme"));
        assert_eq!(content.field("position"), Some(""));
        assert_eq!(content.field("skills"), None);
    }

    #[test]
    fn test_merge_same_value_reports_no_change() {
        let mut content = SectionContent::default_for(SectionKind::About);
        let patch = ContentPatch::from([("title".to_string(), DEFAULT_ABOUT_TITLE.to_string())]);
        assert!(!content.merge(&patch));
    }

    #[test]
    fn test_new_sections_get_distinct_ids() {
        let a = Section::new(SectionKind::Skills);
        let b = Section::new(SectionKind::Skills);
        assert_ne!(a.id, b.id);
        assert_eq!(a.kind(), SectionKind::Skills);
    }
}
