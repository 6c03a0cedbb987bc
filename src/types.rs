use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Art type used when `-type` is not given.
pub const DEFAULT_ART_TYPE: &str = "Named_Boxarts";

/// Thumbnail folders published for every libretro system.
pub const KNOWN_ART_TYPES: &[&str] = &["Named_Boxarts", "Named_Titles", "Named_Snaps"];

#[derive(Debug, Clone, Copy, Serialize, ValueEnum, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `<rom>\t<url>` per line
    #[default]
    Tsv,
    /// One JSON object per line
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        };
        write!(f, "{}", label)
    }
}

/// A single processed input line.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ThumbnailRecord {
    /// The input line exactly as read.
    pub rom: String,
    /// Sanitized game name used for the last URL segment.
    pub name: String,
    pub url: String,
}
