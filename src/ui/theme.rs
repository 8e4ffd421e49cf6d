//! Color theme for the dashboard
//!
//! Chrome colors are constants; data colors come from [`ColorToken`]s and
//! are resolved here, the only place a token becomes a terminal color.

use ratatui::style::Color;

use crate::analytics::ScoreBand;
use crate::models::{ColorToken, Tone};

// ============================================================================
// Chrome
// ============================================================================

/// Panel border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for titles and the selected tab
pub const COLOR_ACCENT: Color = Color::White;

/// Header text
pub const COLOR_HEADER: Color = Color::Rgb(167, 139, 250); // violet #A78BFA

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Secondary text (roles, triggers)
pub const COLOR_MUTED: Color = Color::Gray;

/// Warnings and excluded-record counts
pub const COLOR_WARNING: Color = Color::Rgb(245, 158, 11); // amber #F59E0B

/// Rejected actions
pub const COLOR_ERROR: Color = Color::Rgb(239, 68, 68); // red #EF4444

/// Highlighted table row background
pub const COLOR_ROW_HIGHLIGHT: Color = Color::Rgb(30, 41, 59); // slate #1E293B

// ============================================================================
// Data colors
// ============================================================================

/// Terminal color of a token at a tone
pub fn token_color(token: ColorToken, tone: Tone) -> Color {
    let (r, g, b) = token.rgb(tone);
    Color::Rgb(r, g, b)
}

/// Base-tone color of a token
pub fn base(token: ColorToken) -> Color {
    token_color(token, Tone::Base)
}

/// Color of a score band
pub fn band_color(band: ScoreBand) -> Color {
    base(band.color_token())
}
