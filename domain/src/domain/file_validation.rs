//! Proof file gating for the new bill form.
//!
//! A proof is accepted when its name ends with one of the configured image
//! extensions, compared case-insensitively. The view shows at most one error
//! indicator: every new selection clears the previous one before being
//! evaluated, so repeated bad picks never stack and a good pick recovers.

use log::{debug, warn};
use regex::Regex;

/// State of the file input and its error indicator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProofSelection {
    /// Name of the file considered chosen, `None` once a pick was rejected
    pub selected_file: Option<String>,
    /// Error message currently displayed under the input
    pub error: Option<String>,
}

impl ProofSelection {
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct FileValidator {
    pattern: Regex,
}

impl FileValidator {
    /// Build a validator accepting `^.+\.(ext1|ext2|...)$`, case-insensitive
    pub fn new(extensions: &[String]) -> Result<Self, regex::Error> {
        let alternatives = extensions
            .iter()
            .map(|ext| regex::escape(ext.trim_start_matches('.')))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"(?i)^.+\.({})$", alternatives))?;
        Ok(Self { pattern })
    }

    pub fn is_accepted(&self, file_name: &str) -> bool {
        self.pattern.is_match(file_name)
    }

    /// Evaluate a new pick against `selection`.
    ///
    /// The previous error is always removed first. Returns whether the file
    /// was accepted.
    pub fn apply(
        &self,
        selection: &mut ProofSelection,
        file_name: &str,
        error_message: &str,
    ) -> bool {
        selection.error = None;

        if self.is_accepted(file_name) {
            debug!("Accepted proof file {}", file_name);
            selection.selected_file = Some(file_name.to_string());
            true
        } else {
            warn!("Rejected proof file {}", file_name);
            selection.selected_file = None;
            selection.error = Some(error_message.to_string());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::NewBillConfig;

    fn validator() -> FileValidator {
        FileValidator::new(&NewBillConfig::default().accepted_extensions).unwrap()
    }

    #[test]
    fn test_accepts_image_extensions_any_case() {
        let validator = validator();
        for name in ["bill.jpg", "bill.jpeg", "bill.png", "BILL.JPG", "scan.Png", "a.b.JpEg"] {
            assert!(validator.is_accepted(name), "{} should be accepted", name);
        }
    }

    #[test]
    fn test_rejects_other_names() {
        let validator = validator();
        for name in ["bill.pdf", "bill.jpg.pdf", ".png", "png", "bill.gif", "billjpg", ""] {
            assert!(!validator.is_accepted(name), "{} should be rejected", name);
        }
    }

    #[test]
    fn test_repeated_rejections_keep_single_error() {
        let validator = validator();
        let mut selection = ProofSelection::default();

        assert!(!validator.apply(&mut selection, "bill.pdf", "bad format"));
        assert!(!validator.apply(&mut selection, "other.txt", "bad format"));

        assert_eq!(selection.error.as_deref(), Some("bad format"));
        assert!(selection.selected_file.is_none());
    }

    #[test]
    fn test_valid_pick_clears_previous_error() {
        let validator = validator();
        let mut selection = ProofSelection::default();

        validator.apply(&mut selection, "bill.pdf", "bad format");
        assert!(selection.has_error());

        assert!(validator.apply(&mut selection, "bill.jpg", "bad format"));
        assert!(!selection.has_error());
        assert_eq!(selection.selected_file.as_deref(), Some("bill.jpg"));
    }

    #[test]
    fn test_custom_extensions_are_escaped() {
        let validator = FileValidator::new(&[".webp".to_string(), "j+g".to_string()]).unwrap();
        assert!(validator.is_accepted("photo.WEBP"));
        assert!(validator.is_accepted("odd.j+g"));
        assert!(!validator.is_accepted("odd.jjg"));
    }
}
