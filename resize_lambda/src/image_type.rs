use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Whole-key match; the capture is everything after the last dot. The part
/// before the dot may not contain a line terminator (`\r`, `\n`, U+0085,
/// U+2028, U+2029); the suffix may.
static SUFFIX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\r\n\x{85}\x{2028}\x{2029}]*\.([^.]*)$").expect("suffix pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Jpg,
    Png,
}

impl ImageType {
    /// Maps a key suffix to an image type. Matching is case-sensitive.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "jpg" => Some(Self::Jpg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpg => "jpg",
            Self::Png => "png",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Jpg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Returns the suffix after the last `.` in `key`, or `None` when the key
/// has no dot at all. The suffix may be empty (`"photo."`).
pub fn infer_suffix(key: &str) -> Option<&str> {
    SUFFIX_PATTERN
        .captures(key)
        .and_then(|captures| captures.get(1))
        .map(|suffix| suffix.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_suffix() {
        assert_eq!(infer_suffix("photo.png"), Some("png"));
        assert_eq!(infer_suffix("albums/2024/beach.trip.jpg"), Some("jpg"));
        assert_eq!(infer_suffix(".png"), Some("png"));
        assert_eq!(infer_suffix("photo."), Some(""));
        assert_eq!(infer_suffix("README"), None);
        assert_eq!(infer_suffix(""), None);
    }

    #[test]
    fn test_infer_suffix_non_ascii() {
        assert_eq!(infer_suffix("fotos/café au lait.jpg"), Some("jpg"));
        assert_eq!(infer_suffix("写真.png"), Some("png"));
    }

    #[test]
    fn test_infer_suffix_line_terminators() {
        assert_eq!(infer_suffix("a\rb.png"), None);
        assert_eq!(infer_suffix("a\nb.png"), None);
        assert_eq!(infer_suffix("a\u{85}b.png"), None);
        assert_eq!(infer_suffix("a\u{2028}b.jpg"), None);
        assert_eq!(infer_suffix("a\u{2029}b.jpg"), None);
        assert_eq!(infer_suffix("ab.p\rng"), Some("p\rng"));
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(ImageType::from_extension("jpg"), Some(ImageType::Jpg));
        assert_eq!(ImageType::from_extension("png"), Some(ImageType::Png));
        assert_eq!(ImageType::from_extension("JPG"), None);
        assert_eq!(ImageType::from_extension("jpeg"), None);
        assert_eq!(ImageType::from_extension("txt"), None);
        assert_eq!(ImageType::from_extension(""), None);
    }

    #[test]
    fn test_mime() {
        assert_eq!(ImageType::Jpg.mime(), "image/jpeg");
        assert_eq!(ImageType::Png.mime(), "image/png");
        assert_eq!(ImageType::Png.to_string(), "png");
    }
}
