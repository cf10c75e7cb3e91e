//! Page tunables with defaults matching the shipped markup.

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading a [`PageConfig`] override.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The override is not valid JSON for the config shape.
    #[error("invalid page config: {0}")]
    Json(#[from] serde_json::Error),
    /// Intersection threshold outside `0.0..=1.0`.
    #[error("fade threshold {0} must be within 0.0..=1.0")]
    Threshold(f64),
    /// A pixel offset that must be finite was not.
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Offending field.
        field: &'static str,
    },
    /// A required identifier was blank.
    #[error("{field} must not be empty")]
    Empty {
        /// Offending field.
        field: &'static str,
    },
    /// A class name was empty or contained whitespace; `classList` rejects both.
    #[error("{field} has invalid class name {value:?}")]
    InvalidClass {
        /// Offending field.
        field: &'static str,
        /// Rejected class name.
        value: String,
    },
}

/// Identifiers, class names and offsets the page behaviours operate on.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Id of the navigation bar container.
    pub navbar_id: String,
    /// Id of the footer copyright text node.
    pub year_text_id: String,
    /// Scroll offset above which the navbar switches to its scrolled style.
    pub scrolled_threshold_px: f64,
    /// Fixed header height subtracted from anchor targets.
    pub header_offset_px: f64,
    /// Lead applied before each section when deciding the active link.
    pub section_lead_px: f64,
    /// Class applied while the page is scrolled.
    pub scrolled_class: String,
    /// Class applied while the page is at the top.
    pub transparent_class: String,
    /// Marker class for elements that fade in on view.
    pub fade_in_class: String,
    /// Class added once a fade-in element has been seen.
    pub visible_class: String,
    /// Root margin of the fade-in intersection watcher.
    pub fade_root_margin: String,
    /// Visibility ratio that triggers the fade-in.
    pub fade_threshold: f64,
    /// Classes marking the navigation link of the active section.
    pub active_link_classes: Vec<String>,
    /// Placeholder class removed once a deferred image loads.
    pub lazy_class: String,
    /// Outline drawn around focused navigation links.
    pub focus_outline: String,
    /// Offset of the focus outline.
    pub focus_outline_offset: String,
    /// Name rendered in the footer copyright line.
    pub copyright_owner: String,
    /// Local storage key holding the theme preference.
    pub theme_storage_key: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            navbar_id: "navbar".to_string(),
            year_text_id: "year-text".to_string(),
            scrolled_threshold_px: 50.0,
            header_offset_px: 80.0,
            section_lead_px: 150.0,
            scrolled_class: "navbar-scrolled".to_string(),
            transparent_class: "bg-transparent".to_string(),
            fade_in_class: "fade-in".to_string(),
            visible_class: "visible".to_string(),
            fade_root_margin: "-100px 0px".to_string(),
            fade_threshold: 0.1,
            active_link_classes: vec!["text-[#FF6B4A]".to_string(), "font-bold".to_string()],
            lazy_class: "lazy".to_string(),
            focus_outline: "2px solid #FF6B4A".to_string(),
            focus_outline_offset: "2px".to_string(),
            copyright_owner: "Dwi Vendy".to_string(),
            theme_storage_key: "theme".to_string(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON override; omitted fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the payload is malformed or fails validation.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.fade_threshold) {
            return Err(ConfigError::Threshold(self.fade_threshold));
        }
        for (field, value) in [
            ("scrolled_threshold_px", self.scrolled_threshold_px),
            ("header_offset_px", self.header_offset_px),
            ("section_lead_px", self.section_lead_px),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        for (field, value) in [
            ("navbar_id", &self.navbar_id),
            ("year_text_id", &self.year_text_id),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty { field });
            }
        }
        let classes = [
            ("scrolled_class", &self.scrolled_class),
            ("transparent_class", &self.transparent_class),
            ("fade_in_class", &self.fade_in_class),
            ("visible_class", &self.visible_class),
            ("lazy_class", &self.lazy_class),
        ]
        .into_iter()
        .chain(
            self.active_link_classes
                .iter()
                .map(|class| ("active_link_classes", class)),
        );
        for (field, value) in classes {
            if !is_class_token(value) {
                return Err(ConfigError::InvalidClass {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

fn is_class_token(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_markup() {
        let config = PageConfig::default();
        assert_eq!(config.navbar_id, "navbar");
        assert_eq!(config.year_text_id, "year-text");
        assert!((config.scrolled_threshold_px - 50.0).abs() < f64::EPSILON);
        assert!((config.header_offset_px - 80.0).abs() < f64::EPSILON);
        assert!((config.section_lead_px - 150.0).abs() < f64::EPSILON);
        assert!((config.fade_threshold - 0.1).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_override_keeps_other_defaults() -> anyhow::Result<()> {
        let config = PageConfig::from_json(r#"{"copyright_owner":"Someone Else"}"#)?;
        assert_eq!(config.copyright_owner, "Someone Else");
        assert_eq!(config.navbar_id, "navbar");
        Ok(())
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let err = PageConfig::from_json(r#"{"fade_threshold":1.5}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Threshold(_)));
    }

    #[test]
    fn rejects_unknown_fields_and_blank_ids() {
        assert!(matches!(
            PageConfig::from_json(r#"{"nav_id":"x"}"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            PageConfig::from_json(r#"{"navbar_id":"  "}"#),
            Err(ConfigError::Empty { field: "navbar_id" })
        ));
    }

    #[test]
    fn rejects_blank_or_spaced_class_names() {
        for (raw, expected) in [
            (r#"{"scrolled_class":""}"#, "scrolled_class"),
            (r#"{"transparent_class":" "}"#, "transparent_class"),
            (r#"{"lazy_class":""}"#, "lazy_class"),
            (r#"{"fade_in_class":"fade in"}"#, "fade_in_class"),
            (r#"{"active_link_classes":["font-bold",""]}"#, "active_link_classes"),
        ] {
            match PageConfig::from_json(raw) {
                Err(ConfigError::InvalidClass { field, .. }) => assert_eq!(field, expected),
                other => panic!("{raw} should be rejected, got {other:?}"),
            }
        }
        assert!(PageConfig::from_json(r#"{"active_link_classes":[]}"#).is_ok());
    }
}
