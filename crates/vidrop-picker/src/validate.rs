//! Client-side file validation against an upload policy.
//!
//! The checks use browser-reported metadata only (declared MIME type
//! and byte size). They give early feedback before a multi-gigabyte
//! upload starts; the server must still validate whatever it receives.

use serde::{Deserialize, Serialize};

use crate::media::MediaType;
use crate::size::{MAX_FILE_SIZE, format_file_size};

/// Metadata of a file the user dropped or picked.
///
/// Lives only as long as the selection; removing the file or leaving
/// the page discards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name as reported by the browser (no path).
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Declared MIME type, possibly empty when the browser cannot tell.
    pub media_type: String,
}

impl SelectedFile {
    /// Create a file descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            media_type: media_type.into(),
        }
    }

    /// The file's size formatted for display.
    #[must_use]
    pub fn display_size(&self) -> String {
        format_file_size(self.size)
    }
}

/// Which files the picker accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadPolicy {
    /// Exact MIME strings accepted.
    pub allowed_types: Vec<String>,
    /// Largest accepted size in bytes (inclusive).
    pub max_file_size: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            allowed_types: MediaType::ALL
                .iter()
                .map(|t| t.mime().to_owned())
                .collect(),
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

impl UploadPolicy {
    /// Returns `true` if `media_type` is on the allow-list.
    #[must_use]
    pub fn allows_type(&self, media_type: &str) -> bool {
        self.allowed_types.iter().any(|t| t == media_type)
    }

    /// Human-readable list of accepted formats, e.g.
    /// `"MP4, MOV, AVI, or MKV"`.
    ///
    /// Known video types use their short label; anything else is shown
    /// by its MIME string.
    #[must_use]
    pub fn describe_allowed(&self) -> String {
        let labels: Vec<&str> = self
            .allowed_types
            .iter()
            .map(|t| MediaType::from_mime(t).map_or(t.as_str(), |m| m.label()))
            .collect();

        match labels.as_slice() {
            [] => String::new(),
            [only] => (*only).to_owned(),
            [first, second] => format!("{first} or {second}"),
            [init @ .., last] => format!("{}, or {last}", init.join(", ")),
        }
    }
}

/// Why a file was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The declared MIME type is not on the allow-list.
    #[error("unsupported media type {media_type:?} (accepted: {accepted})")]
    UnsupportedType {
        /// The type the browser reported.
        media_type: String,
        /// Description of the accepted formats.
        accepted: String,
    },

    /// The file is larger than the ceiling.
    #[error("file size {size} bytes exceeds the limit of {limit} bytes")]
    TooLarge {
        /// The file's size in bytes.
        size: u64,
        /// The ceiling in bytes.
        limit: u64,
    },
}

impl ValidationError {
    /// The message shown to the user in the rejection dialog.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::UnsupportedType { accepted, .. } => {
                format!("Invalid file type. Please upload {accepted}.")
            }
            // The stock page writes the limit without a space ("4GB").
            Self::TooLarge { limit, .. } => {
                format!(
                    "File is too large. Maximum size is {}.",
                    format_file_size(*limit).replace(' ', "")
                )
            }
        }
    }
}

/// Check a file against `policy`.
///
/// The type is checked before the size. A file exactly at the ceiling
/// is accepted.
///
/// # Errors
///
/// Returns [`ValidationError::UnsupportedType`] if the declared type is
/// not allowed, or [`ValidationError::TooLarge`] if the size exceeds
/// `policy.max_file_size`.
pub fn validate_file(file: &SelectedFile, policy: &UploadPolicy) -> Result<(), ValidationError> {
    if !policy.allows_type(&file.media_type) {
        return Err(ValidationError::UnsupportedType {
            media_type: file.media_type.clone(),
            accepted: policy.describe_allowed(),
        });
    }

    if file.size > policy.max_file_size {
        return Err(ValidationError::TooLarge {
            size: file.size,
            limit: policy.max_file_size,
        });
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn mp4(size: u64) -> SelectedFile {
        SelectedFile::new("clip.mp4", size, "video/mp4")
    }

    #[test]
    fn accepts_every_default_type() {
        let policy = UploadPolicy::default();
        for t in MediaType::ALL {
            let file = SelectedFile::new("clip", 10, t.mime());
            assert_eq!(validate_file(&file, &policy), Ok(()), "{t} should pass");
        }
    }

    #[test]
    fn rejects_unlisted_type() {
        let policy = UploadPolicy::default();
        let file = SelectedFile::new("clip.webm", 10, "video/webm");
        let err = validate_file(&file, &policy).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::UnsupportedType { ref media_type, .. } if media_type == "video/webm"
        ));
    }

    #[test]
    fn rejects_empty_type() {
        let policy = UploadPolicy::default();
        let file = SelectedFile::new("mystery", 10, "");
        assert!(validate_file(&file, &policy).is_err());
    }

    #[test]
    fn ceiling_is_inclusive() {
        let policy = UploadPolicy::default();
        assert_eq!(validate_file(&mp4(MAX_FILE_SIZE), &policy), Ok(()));
        assert_eq!(
            validate_file(&mp4(MAX_FILE_SIZE + 1), &policy),
            Err(ValidationError::TooLarge {
                size: MAX_FILE_SIZE + 1,
                limit: MAX_FILE_SIZE,
            })
        );
    }

    #[test]
    fn type_is_checked_before_size() {
        let policy = UploadPolicy::default();
        let file = SelectedFile::new("huge.txt", MAX_FILE_SIZE + 1, "text/plain");
        assert!(matches!(
            validate_file(&file, &policy),
            Err(ValidationError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn empty_file_is_accepted() {
        assert_eq!(validate_file(&mp4(0), &UploadPolicy::default()), Ok(()));
    }

    #[test]
    fn default_messages() {
        let policy = UploadPolicy::default();
        let wrong_type = validate_file(&SelectedFile::new("a.gif", 1, "image/gif"), &policy)
            .unwrap_err();
        assert_eq!(
            wrong_type.user_message(),
            "Invalid file type. Please upload MP4, MOV, AVI, or MKV."
        );

        let too_large = validate_file(&mp4(MAX_FILE_SIZE + 1), &policy).unwrap_err();
        assert_eq!(
            too_large.user_message(),
            "File is too large. Maximum size is 4GB."
        );
    }

    #[test]
    fn describe_allowed_handles_short_and_custom_lists() {
        let mut policy = UploadPolicy {
            allowed_types: vec![],
            max_file_size: 1,
        };
        assert_eq!(policy.describe_allowed(), "");

        policy.allowed_types = vec!["video/mp4".into()];
        assert_eq!(policy.describe_allowed(), "MP4");

        policy.allowed_types = vec!["video/mp4".into(), "video/webm".into()];
        assert_eq!(policy.describe_allowed(), "MP4 or video/webm");

        // Borrowed MIME strings and static labels mix in one list.
        policy.allowed_types = vec![
            "video/webm".into(),
            "video/quicktime".into(),
            "video/ogg".into(),
        ];
        assert_eq!(policy.describe_allowed(), "video/webm, MOV, or video/ogg");
    }

    #[test]
    fn display_size_uses_formatter() {
        assert_eq!(mp4(1536).display_size(), "1.5 KB");
    }
}
