//! Symbolic color tokens
//!
//! The core never carries concrete terminal colors. Every chart element, badge
//! and score band refers to a [`ColorToken`]; the display shell resolves the
//! token (and the [`Tone`] it wants) to a concrete color at draw time.

use serde::{Deserialize, Serialize};

// ============================================================================
// Color Token
// ============================================================================

/// A named palette entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    Emerald,
    Blue,
    Amber,
    Red,
    Slate,
    Purple,
    Rose,
    Orange,
    Indigo,
}

/// Intensity variant of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Regular fill/stroke color
    #[default]
    Base,
    /// Lighter variant for hover/selection and text on dark backgrounds
    Highlight,
    /// Dark variant for tracks and badge backgrounds
    Muted,
}

impl ColorToken {
    /// All tokens in palette order
    pub const ALL: [ColorToken; 9] = [
        ColorToken::Emerald,
        ColorToken::Blue,
        ColorToken::Amber,
        ColorToken::Red,
        ColorToken::Slate,
        ColorToken::Purple,
        ColorToken::Rose,
        ColorToken::Orange,
        ColorToken::Indigo,
    ];

    /// Token used for anything without a mapping of its own
    pub const NEUTRAL: ColorToken = ColorToken::Slate;

    /// Resolve the token to an RGB triple for the requested tone.
    ///
    /// This is the token -> tone table; hover or muted colors are looked up
    /// here rather than derived from a base color.
    pub fn rgb(self, tone: Tone) -> (u8, u8, u8) {
        match (self, tone) {
            (ColorToken::Emerald, Tone::Base) => (0x10, 0xB9, 0x81),
            (ColorToken::Emerald, Tone::Highlight) => (0x6E, 0xE7, 0xB7),
            (ColorToken::Emerald, Tone::Muted) => (0x06, 0x4E, 0x3B),

            (ColorToken::Blue, Tone::Base) => (0x3B, 0x82, 0xF6),
            (ColorToken::Blue, Tone::Highlight) => (0x93, 0xC5, 0xFD),
            (ColorToken::Blue, Tone::Muted) => (0x1E, 0x3A, 0x8A),

            (ColorToken::Amber, Tone::Base) => (0xF5, 0x9E, 0x0B),
            (ColorToken::Amber, Tone::Highlight) => (0xFC, 0xD3, 0x4D),
            (ColorToken::Amber, Tone::Muted) => (0x78, 0x35, 0x0F),

            (ColorToken::Red, Tone::Base) => (0xEF, 0x44, 0x44),
            (ColorToken::Red, Tone::Highlight) => (0xFC, 0xA5, 0xA5),
            (ColorToken::Red, Tone::Muted) => (0x7F, 0x1D, 0x1D),

            (ColorToken::Slate, Tone::Base) => (0x6B, 0x72, 0x80),
            (ColorToken::Slate, Tone::Highlight) => (0xD1, 0xD5, 0xDB),
            (ColorToken::Slate, Tone::Muted) => (0x37, 0x41, 0x51),

            (ColorToken::Purple, Tone::Base) => (0x8B, 0x5C, 0xF6),
            (ColorToken::Purple, Tone::Highlight) => (0xC4, 0xB5, 0xFD),
            (ColorToken::Purple, Tone::Muted) => (0x4C, 0x1D, 0x95),

            (ColorToken::Rose, Tone::Base) => (0xF4, 0x3F, 0x5E),
            (ColorToken::Rose, Tone::Highlight) => (0xFD, 0xA4, 0xAF),
            (ColorToken::Rose, Tone::Muted) => (0x88, 0x13, 0x37),

            (ColorToken::Orange, Tone::Base) => (0xF9, 0x73, 0x16),
            (ColorToken::Orange, Tone::Highlight) => (0xFD, 0xBA, 0x74),
            (ColorToken::Orange, Tone::Muted) => (0x7C, 0x2D, 0x12),

            (ColorToken::Indigo, Tone::Base) => (0x63, 0x66, 0xF1),
            (ColorToken::Indigo, Tone::Highlight) => (0xA5, 0xB4, 0xFC),
            (ColorToken::Indigo, Tone::Muted) => (0x31, 0x2E, 0x81),
        }
    }

    /// Hex string (`#RRGGBB`) for the requested tone
    pub fn hex(self, tone: Tone) -> String {
        let (r, g, b) = self.rgb(tone);
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}
