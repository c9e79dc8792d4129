use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    #[default]
    Blue,
    Green,
    Red,
}

impl ThemeColor {
    /// Heading colour as RGB (the 600 shade of each palette).
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ThemeColor::Blue => (37, 99, 235),
            ThemeColor::Green => (22, 163, 74),
            ThemeColor::Red => (220, 38, 38),
        }
    }

    pub fn hex(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ThemeFont {
    #[default]
    Arial,
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
    Helvetica,
}

impl ThemeFont {
    pub fn css_family(&self) -> &'static str {
        match self {
            ThemeFont::Arial => "Arial, sans-serif",
            ThemeFont::TimesNewRoman => "'Times New Roman', serif",
            ThemeFont::Helvetica => "Helvetica, sans-serif",
        }
    }

    /// Font family file stems tried in order when exporting to PDF.
    /// The Liberation families are metric-compatible stand-ins.
    pub fn pdf_font_candidates(&self) -> &'static [&'static str] {
        match self {
            ThemeFont::Arial => &["Arial", "LiberationSans"],
            ThemeFont::TimesNewRoman => &["TimesNewRoman", "LiberationSerif"],
            ThemeFont::Helvetica => &["Helvetica", "LiberationSans"],
        }
    }
}

/// Presentation settings. Held by the editor for the life of the process, never persisted.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Theme {
    pub color: ThemeColor,
    pub font: ThemeFont,
}

/// Partial theme change; absent fields keep their current value.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ThemeUpdate {
    pub color: Option<ThemeColor>,
    pub font: Option<ThemeFont>,
}

impl Theme {
    pub fn apply(&mut self, update: ThemeUpdate) {
        if let Some(color) = update.color {
            self.color = color;
        }
        if let Some(font) = update.font {
            self.font = font;
        }
    }
}
