use serde::{Deserialize, Serialize};

/// Media type of an attachment URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttachmentType {
    #[default]
    Image,
    Video,
    Document,
    Audio,
}

impl AttachmentType {
    pub fn code(&self) -> &'static str {
        match self {
            AttachmentType::Image => "IMAGE",
            AttachmentType::Video => "VIDEO",
            AttachmentType::Document => "DOCUMENT",
            AttachmentType::Audio => "AUDIO",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AttachmentType::Image => "Image",
            AttachmentType::Video => "Video",
            AttachmentType::Document => "Document",
            AttachmentType::Audio => "Audio",
        }
    }

    /// File extensions (lower case, without the dot) recognised for this type
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            AttachmentType::Image => &["jpg", "jpeg", "png", "gif", "webp", "heic"],
            AttachmentType::Video => &["mp4", "mov", "avi", "mkv", "webm"],
            AttachmentType::Document => &["pdf", "doc", "docx", "xls", "xlsx"],
            AttachmentType::Audio => &["mp3", "wav", "m4a", "ogg", "aac"],
        }
    }

    pub fn all() -> Vec<AttachmentType> {
        vec![
            AttachmentType::Image,
            AttachmentType::Video,
            AttachmentType::Document,
            AttachmentType::Audio,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Guess the type from the extension of a file name or URL.
    ///
    /// Query strings and fragments are ignored: `https://x/a.PDF?sig=1` is a document.
    pub fn from_extension(name: &str) -> Option<Self> {
        let name = name.trim();
        let path = name.split(['?', '#']).next().unwrap_or(name);
        let last_segment = path.rsplit('/').next().unwrap_or(path);
        let (_, ext) = last_segment.rsplit_once('.')?;
        let ext = ext.to_ascii_lowercase();
        Self::all()
            .into_iter()
            .find(|t| t.extensions().contains(&ext.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(
            AttachmentType::from_extension("https://cdn.example.com/dmg/front.JPG"),
            Some(AttachmentType::Image)
        );
        assert_eq!(
            AttachmentType::from_extension("https://x.ae/report.pdf?sig=abc#page=2"),
            Some(AttachmentType::Document)
        );
        assert_eq!(
            AttachmentType::from_extension("clip.webm"),
            Some(AttachmentType::Video)
        );
        assert_eq!(AttachmentType::from_extension("voice.m4a"), Some(AttachmentType::Audio));
    }

    #[test]
    fn test_from_extension_ignores_surrounding_whitespace() {
        assert_eq!(
            AttachmentType::from_extension(" https://files.example.ae/clip.mp4 "),
            Some(AttachmentType::Video)
        );
        assert_eq!(AttachmentType::from_extension("\tscan.PDF\n"), Some(AttachmentType::Document));
    }

    #[test]
    fn test_from_extension_unknown() {
        assert_eq!(AttachmentType::from_extension("https://example.com/page"), None);
        assert_eq!(AttachmentType::from_extension("https://a.b.example.com/"), None);
        assert_eq!(AttachmentType::from_extension("archive.zip"), None);
    }
}
