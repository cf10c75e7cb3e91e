//! Footer copyright line.

use super::config::PageConfig;
use super::dom::Document;

/// Copyright text for `year`.
#[must_use]
pub fn copyright_line(year: i32, owner: &str) -> String {
    format!("© {year} {owner}. All rights reserved.")
}

/// Write the copyright line into the footer; returns the text when the footer exists.
pub fn render_copyright<D: Document>(doc: &D, config: &PageConfig) -> Option<String> {
    let footer = doc.element_by_id(&config.year_text_id)?;
    let line = copyright_line(doc.current_year(), &config.copyright_owner);
    doc.set_text(&footer, &line);
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::dom::memory::{ElementSpec, MemoryDocument};

    #[test]
    fn line_uses_owner_and_year() {
        assert_eq!(
            copyright_line(2025, "Dwi Vendy"),
            "© 2025 Dwi Vendy. All rights reserved."
        );
    }

    #[test]
    fn footer_text_is_rendered() {
        let doc = MemoryDocument::new();
        doc.set_year(2031);
        let footer = doc.append(None, ElementSpec::new("p").id("year-text"));

        let rendered = render_copyright(&doc, &PageConfig::default());

        assert_eq!(
            rendered.as_deref(),
            Some("© 2031 Dwi Vendy. All rights reserved.")
        );
        assert_eq!(doc.text(footer), "© 2031 Dwi Vendy. All rights reserved.");
    }

    #[test]
    fn missing_footer_is_skipped() {
        let doc = MemoryDocument::new();
        assert_eq!(render_copyright(&doc, &PageConfig::default()), None);
    }
}
