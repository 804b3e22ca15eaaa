//! Theme module for portal-tui
//!
//! Centralized color palette and styling constants for the portal's
//! teal-on-dark look.

use ratatui::style::Color;
use ratatui::symbols::border;

// ============================================================================
// Background Colors
// ============================================================================

/// Primary background color - near-black slate (#0b1210)
pub const BG_PRIMARY: Color = Color::Rgb(11, 18, 16);

/// Secondary background color - card surfaces (#121c19)
pub const BG_SECONDARY: Color = Color::Rgb(18, 28, 25);

/// Tertiary background color - highlighted surfaces (#182622)
pub const BG_TERTIARY: Color = Color::Rgb(24, 38, 34);

/// Subtle border color (#22342f)
pub const BORDER_SUBTLE: Color = Color::Rgb(34, 52, 47);

// ============================================================================
// Accent Colors - Portal Teal
// ============================================================================

/// Primary teal accent (#0f766e)
pub const TEAL_PRIMARY: Color = Color::Rgb(15, 118, 110);

/// Bright teal for active highlights (#14b8a6)
pub const TEAL_BRIGHT: Color = Color::Rgb(20, 184, 166);

/// Dimmed teal for secondary elements (#0b5a52)
pub const TEAL_DIM: Color = Color::Rgb(11, 90, 82);

// ============================================================================
// Status Colors
// ============================================================================

/// Green success color (#4ade80)
pub const GREEN_SUCCESS: Color = Color::Rgb(74, 222, 128);

/// Amber warning color (#d8a437)
pub const AMBER_WARNING: Color = Color::Rgb(216, 164, 55);

/// Red error color (#f87171)
pub const RED_ERROR: Color = Color::Rgb(248, 113, 113);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - bright white (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color - muted gray (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color - for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

// ============================================================================
// Shapes & Motion
// ============================================================================

/// Rounded border set used by every card in the portal
pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

/// Alternate between two colors on the animation tick for pulsing
/// indicators (active stage dot, loading badges).
pub fn get_pulse_color(tick: u64, bright: Color, dim: Color) -> Color {
    if tick % 2 == 0 { bright } else { dim }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_alternates() {
        assert_eq!(get_pulse_color(0, TEAL_BRIGHT, TEAL_DIM), TEAL_BRIGHT);
        assert_eq!(get_pulse_color(1, TEAL_BRIGHT, TEAL_DIM), TEAL_DIM);
        assert_eq!(get_pulse_color(2, TEAL_BRIGHT, TEAL_DIM), TEAL_BRIGHT);
    }
}
