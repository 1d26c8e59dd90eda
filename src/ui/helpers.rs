//! Small rendering helpers shared across the UI modules.

use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::theme::{Prefs, unpack_argb};

/// Convert a packed ARGB preference color to a terminal color.
///
/// Terminals have no alpha channel; the alpha byte is applied separately
/// by [`blend_rgb`] against the canvas background.
pub fn color_from_packed(argb: u32) -> Color {
    let (_, r, g, b) = unpack_argb(argb);
    Color::Rgb(r, g, b)
}

/// What: Blend a foreground color toward a background color.
///
/// Inputs:
/// - `fg`, `bg`: RGB channel triplets.
/// - `t`: Blend factor in `[0, 1]`; 1 keeps `fg`, 0 yields `bg`.
///
/// Output:
/// - The mixed triplet, the terminal stand-in for alpha compositing.
pub fn blend_rgb(fg: (u8, u8, u8), bg: (u8, u8, u8), t: f32) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);
    let mix = |f: u8, b: u8| -> u8 {
        (f32::from(f) * t + f32::from(b) * (1.0 - t)).round() as u8
    };
    (mix(fg.0, bg.0), mix(fg.1, bg.1), mix(fg.2, bg.2))
}

/// Effective clock color: the preference color faded into the canvas
/// background by the preference opacity.
pub fn clock_color(prefs: &Prefs, canvas: (u8, u8, u8)) -> Color {
    let (_, r, g, b) = unpack_argb(prefs.clock_color);
    let (r, g, b) = blend_rgb((r, g, b), canvas, prefs.clock_opacity);
    Color::Rgb(r, g, b)
}

/// Darken a wallpaper tint so text stays readable on top of it.
pub fn dim_tint(tint: (u8, u8, u8)) -> (u8, u8, u8) {
    blend_rgb(tint, (0, 0, 0), 0.45)
}

/// Centered rectangle of at most `width` x `height` cells inside `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

/// Spinner frame for the loading indicator, advanced once per clock tick.
pub fn spinner_frame(tick: u64) -> &'static str {
    const FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
    FRAMES[(tick % 4) as usize]
}
