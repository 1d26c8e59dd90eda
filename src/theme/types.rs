//! Palette and preference types for nook.

use ratatui::style::Color;
use std::path::PathBuf;

/// Color palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable
/// for direct use with widgets and styles. The wallpaper tint, when
/// available, replaces `base` as the canvas background at render time.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Darkest background shade for deep contrast areas.
    pub crust: Color,
    /// Subtle surface color for component backgrounds.
    pub surface1: Color,
    /// Muted overlay line/border color.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color for selection and interactive highlights.
    pub accent: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            mantle: Color::Rgb(0x18, 0x18, 0x25),
            crust: Color::Rgb(0x11, 0x11, 0x1b),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            accent: Color::Rgb(0x74, 0xc7, 0xec),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
        }
    }
}

/// Return the palette used by rendering code.
pub fn theme() -> Theme {
    Theme::default()
}

/// Clock color presets cycled by the settings dialog, the terminal
/// stand-in for the original color wheel. Packed ARGB, all opaque.
pub const CLOCK_COLOR_PRESETS: [u32; 9] = [
    0xFFFF_FFFF, // white
    0xFFF3_8BA8, // red
    0xFFFA_B387, // peach
    0xFFF9_E2AF, // yellow
    0xFFA6_E3A1, // green
    0xFF94_E2D5, // teal
    0xFF89_B4FA, // blue
    0xFFCB_A6F7, // mauve
    0xFF11_111B, // near-black
];

/// User preferences parsed from `nook.conf`.
///
/// The clock keys mirror what the settings modal edits: a packed ARGB
/// color and an opacity in `[0, 1]`. Both are written back immediately
/// on every change. `wallpaper` optionally pins the wallpaper file used
/// for the background tint; `hint_shown` records that the first-run
/// greeting has been displayed.
#[derive(Clone, Debug, PartialEq)]
pub struct Prefs {
    /// Clock color as packed ARGB (alpha in the top byte).
    pub clock_color: u32,
    /// Clock opacity in `[0, 1]`.
    pub clock_opacity: f32,
    /// Explicit wallpaper path overriding auto-detection.
    pub wallpaper: Option<PathBuf>,
    /// Whether the first-run greeting was already shown.
    pub hint_shown: bool,
}

impl Default for Prefs {
    fn default() -> Self {
        Prefs {
            clock_color: 0xFFFF_FFFF,
            clock_opacity: 1.0,
            wallpaper: None,
            hint_shown: false,
        }
    }
}
