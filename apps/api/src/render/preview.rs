//! Read-only preview rendering.
//!
//! `preview_block` fixes the per-type layout (a heading plus body lines). The askama
//! page in `templates/preview.html` and the PDF export both draw from it.

use askama::Template;

use crate::models::{Section, SectionContent, SectionKind, Theme};

pub const PREVIEW_TITLE: &str = "Превью резюме";
pub const SKILLS_HEADING: &str = "Навыки";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewBlock {
    pub heading: String,
    pub lines: Vec<String>,
}

pub fn preview_block(content: &SectionContent) -> PreviewBlock {
    match content {
        SectionContent::Experience(c) => PreviewBlock {
            heading: c.position.clone(),
            lines: vec![format!("{} | {}", c.company, c.period), c.description.clone()],
        },
        SectionContent::Education(c) => PreviewBlock {
            heading: c.degree.clone(),
            lines: vec![format!("{} | {}", c.institution, c.period)],
        },
        SectionContent::Skills(c) => PreviewBlock {
            heading: SKILLS_HEADING.to_string(),
            lines: vec![c.skills.clone()],
        },
        SectionContent::Certificates(c) => PreviewBlock {
            heading: c.name.clone(),
            lines: vec![format!("{} | {}", c.issuer, c.date)],
        },
        SectionContent::About(c) => PreviewBlock {
            heading: c.title.clone(),
            lines: vec![c.description.clone()],
        },
    }
}

struct PreviewSection<'a> {
    id: &'a str,
    kind: SectionKind,
    block: PreviewBlock,
}

#[derive(Template)]
#[template(path = "preview.html")]
struct PreviewPage<'a> {
    title: &'a str,
    font_family: &'a str,
    color: String,
    sections: Vec<PreviewSection<'a>>,
}

/// Renders the whole document as a standalone HTML page.
/// The root element is `<div id="preview">`, styled with the theme font.
pub fn render_html(sections: &[Section], theme: &Theme) -> Result<String, askama::Error> {
    let page = PreviewPage {
        title: PREVIEW_TITLE,
        font_family: theme.font.css_family(),
        color: theme.color.hex(),
        sections: sections
            .iter()
            .map(|section| PreviewSection {
                id: &section.id,
                kind: section.kind(),
                block: preview_block(&section.content),
            })
            .collect(),
    };
    page.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::section::{CertificatesContent, EducationContent, ExperienceContent};
    use crate::models::theme::{ThemeColor, ThemeFont};

    #[test]
    fn test_experience_layout() {
        let block = preview_block(&SectionContent::Experience(ExperienceContent {
            position: "Engineer".to_string(),
            company: "Acme".to_string(),
            period: "2020-2024".to_string(),
            description: "Shipped the thing".to_string(),
        }));
        assert_eq!(block.heading, "Engineer");
        assert_eq!(block.lines, vec!["Acme | 2020-2024", "Shipped the thing"]);
    }

    #[test]
    fn test_education_heading_is_degree() {
        let block = preview_block(&SectionContent::Education(EducationContent {
            institution: "MIT".to_string(),
            degree: "BSc".to_string(),
            period: "2010".to_string(),
        }));
        assert_eq!(block.heading, "BSc");
        assert_eq!(block.lines, vec!["MIT | 2010"]);
    }

    #[test]
    fn test_skills_use_fixed_heading() {
        let block = preview_block(&SectionContent::default_for(SectionKind::Skills));
        assert_eq!(block.heading, SKILLS_HEADING);
    }

    #[test]
    fn test_certificate_layout() {
        let block = preview_block(&SectionContent::Certificates(CertificatesContent {
            name: "CKA".to_string(),
            issuer: "CNCF".to_string(),
            date: "2023".to_string(),
        }));
        assert_eq!(block.lines, vec!["CNCF | 2023"]);
    }

    #[test]
    fn test_html_uses_theme_and_preserves_order() {
        let theme = Theme {
            color: ThemeColor::Red,
            font: ThemeFont::TimesNewRoman,
        };
        let first = Section::new(SectionKind::Skills);
        let second = Section::new(SectionKind::Education);
        let html = render_html(&[first.clone(), second.clone()], &theme).unwrap();

        assert!(html.contains("<div id=\"preview\" style=\"font-family: "));
        assert!(html.contains("Times New Roman"));
        assert!(html.contains("class=\"section section-skills\""));
        assert!(html.contains("color: #dc2626;"));
        let a = html.find(&first.id).unwrap();
        let b = html.find(&second.id).unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_html_escapes_user_text() {
        let mut section = Section::new(SectionKind::Skills);
        section.content = SectionContent::Skills(crate::models::section::SkillsContent {
            skills: "<script>alert(1)</script> & co".to_string(),
        });
        let html = render_html(&[section], &Theme::default()).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)"));
        assert!(html.contains("&amp; co"));
    }

    #[test]
    fn test_empty_document_still_renders_root() {
        let html = render_html(&[], &Theme::default()).unwrap();
        assert!(html.contains("id=\"preview\""));
        assert!(html.contains(PREVIEW_TITLE));
    }
}
