//! Video media types accepted by the default allow-list.
//!
//! The browser reports a file's declared MIME type from its extension
//! and OS metadata. Nothing here inspects file contents, so a renamed
//! file passes as whatever its extension claims.

use std::fmt;

/// A video container the default upload policy accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// MPEG-4 Part 14.
    Mp4,
    /// Apple QuickTime (`.mov`).
    QuickTime,
    /// Microsoft AVI.
    Avi,
    /// Matroska (`.mkv`).
    Matroska,
}

impl MediaType {
    /// All accepted media types, in the order shown to users.
    pub const ALL: [Self; 4] = [Self::Mp4, Self::QuickTime, Self::Avi, Self::Matroska];

    /// The MIME string a browser reports for this container.
    #[must_use]
    pub const fn mime(self) -> &'static str {
        match self {
            Self::Mp4 => "video/mp4",
            Self::QuickTime => "video/quicktime",
            Self::Avi => "video/x-msvideo",
            Self::Matroska => "video/x-matroska",
        }
    }

    /// Short user-facing label, named after the usual file extension.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mp4 => "MP4",
            Self::QuickTime => "MOV",
            Self::Avi => "AVI",
            Self::Matroska => "MKV",
        }
    }

    /// Look up a media type by its exact MIME string.
    ///
    /// Matching is exact: browsers report lowercase MIME types and the
    /// allow-list compares strings verbatim.
    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.mime() == mime)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
