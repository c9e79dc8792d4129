pub mod section;
pub mod theme;

pub use section::{ContentPatch, Section, SectionContent, SectionKind};
pub use theme::{Theme, ThemeUpdate};
