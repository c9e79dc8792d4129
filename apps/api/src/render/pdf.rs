//! PDF export of the preview layout.

use std::path::Path;

use genpdf::elements::{Break, Paragraph};
use genpdf::fonts::{FontData, FontFamily};
use genpdf::style::{Color, Style, StyledString};
use genpdf::{Document, SimplePageDecorator};
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Section, Theme};
use crate::render::preview::{preview_block, PREVIEW_TITLE};

pub const EXPORT_FILE_NAME: &str = "resume.pdf";

const BODY_FONT_SIZE: u8 = 11;
const HEADING_FONT_SIZE: u8 = 14;
const TITLE_FONT_SIZE: u8 = 18;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No usable font family in {dir} (tried {tried})")]
    FontNotFound { dir: String, tried: String },

    #[error("PDF rendering failed: {0}")]
    Render(String),
}

/// Loads the first candidate family for the theme font that exists in `fonts_dir`.
/// Files follow genpdf's `<Family>-Regular.ttf` / `-Bold.ttf` / ... naming.
fn load_font(fonts_dir: &Path, theme: &Theme) -> Result<FontFamily<FontData>, ExportError> {
    let candidates = theme.font.pdf_font_candidates();
    for name in candidates {
        match genpdf::fonts::from_files(fonts_dir, name, None) {
            Ok(family) => {
                debug!("Using font family {name} for {:?}", theme.font);
                return Ok(family);
            }
            Err(e) => debug!("Font family {name} unavailable: {e}"),
        }
    }
    Err(ExportError::FontNotFound {
        dir: fonts_dir.display().to_string(),
        tried: candidates.join(", "),
    })
}

fn heading_style(theme: &Theme) -> Style {
    let (r, g, b) = theme.color.rgb();
    Style::new()
        .bold()
        .with_font_size(HEADING_FONT_SIZE)
        .with_color(Color::Rgb(r, g, b))
}

/// Renders the document to PDF bytes, in display order, with theme colour headings.
pub fn export(
    sections: &[Section],
    theme: &Theme,
    fonts_dir: &Path,
) -> Result<Vec<u8>, ExportError> {
    let font = load_font(fonts_dir, theme)?;

    let mut doc = Document::new(font);
    doc.set_title(PREVIEW_TITLE);
    doc.set_font_size(BODY_FONT_SIZE);
    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(10);
    doc.set_page_decorator(decorator);

    doc.push(Paragraph::new(StyledString::new(
        PREVIEW_TITLE.to_string(),
        Style::new().bold().with_font_size(TITLE_FONT_SIZE),
    )));
    doc.push(Break::new(1));

    for section in sections {
        let block = preview_block(&section.content);
        doc.push(Paragraph::new(StyledString::new(block.heading, heading_style(theme))));
        for line in block.lines {
            doc.push(Paragraph::new(line));
        }
        doc.push(Break::new(1));
    }

    let mut out = Vec::new();
    doc.render(&mut out).map_err(|e| ExportError::Render(e.to_string()))?;
    info!(
        "Exported {} section(s) to PDF ({} bytes)",
        sections.len(),
        out.len()
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::theme::ThemeFont;

    #[test]
    fn test_missing_fonts_reports_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let theme = Theme {
            font: ThemeFont::TimesNewRoman,
            ..Theme::default()
        };
        match export(&[], &theme, dir.path()) {
            Err(ExportError::FontNotFound { tried, .. }) => {
                assert_eq!(tried, "TimesNewRoman, LiberationSerif");
            }
            other => panic!("expected FontNotFound, got {other:?}"),
        }
    }
}
