//! Wallpaper discovery and background-tint extraction.
//!
//! A terminal cannot composite a bitmap behind its text, so nook reduces
//! the wallpaper to a single background tint: the image is decoded,
//! downsampled, and averaged. The tint failing to load is never an
//! error the user sees; the canvas simply keeps the palette background.
//! The error type still distinguishes "no wallpaper" from "could not
//! read it" from "could not decode it", because the unreadable case
//! additionally raises a one-shot notice in the UI.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::theme::Prefs;

/// Failure modes of loading a wallpaper tint.
#[derive(Debug, Error)]
pub enum WallpaperError {
    /// The resolved path does not exist.
    #[error("no wallpaper file at {}", .0.display())]
    NotFound(PathBuf),
    /// The file exists but could not be read (typically permissions).
    #[error("wallpaper unreadable: {0}")]
    Unreadable(std::io::Error),
    /// The bytes could not be decoded as an image.
    #[error("wallpaper could not be decoded: {0}")]
    Decode(#[from] image::ImageError),
}

/// An averaged wallpaper color used as the canvas background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tint {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// What: Resolve the current wallpaper path, best effort.
///
/// Inputs:
/// - `prefs`: Loaded preferences; an explicit `wallpaper` key wins.
///
/// Output:
/// - `Some(path)` from the first source that names one: the conf key,
///   `$NOOK_WALLPAPER`, pywal's `~/.cache/wal/wal`, then `~/.fehbg`.
///   `None` when no source knows a wallpaper.
pub fn resolve_wallpaper_path(prefs: &Prefs) -> Option<PathBuf> {
    if let Some(p) = &prefs.wallpaper {
        return Some(p.clone());
    }
    if let Ok(p) = std::env::var("NOOK_WALLPAPER")
        && !p.trim().is_empty()
    {
        return Some(PathBuf::from(p.trim()));
    }
    let home = std::env::var("HOME").ok()?;
    let wal = Path::new(&home).join(".cache").join("wal").join("wal");
    if let Ok(content) = fs::read_to_string(&wal) {
        let line = content.lines().next().unwrap_or("").trim();
        if !line.is_empty() {
            return Some(PathBuf::from(line));
        }
    }
    let fehbg = Path::new(&home).join(".fehbg");
    if let Ok(content) = fs::read_to_string(&fehbg)
        && let Some(p) = parse_fehbg(&content)
    {
        return Some(p);
    }
    None
}

/// What: Extract the wallpaper path from a `~/.fehbg` script.
///
/// Inputs:
/// - `content`: The script text, e.g. `feh --bg-fill '/path/wall.jpg'`.
///
/// Output:
/// - The last quoted token on the last non-empty line, which is where
///   feh writes the image path; `None` when no quoted token exists.
pub(crate) fn parse_fehbg(content: &str) -> Option<PathBuf> {
    let line = content
        .lines()
        .rev()
        .find(|l| !l.trim().is_empty() && !l.trim().starts_with('#'))?;
    let mut last: Option<String> = None;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\'' || c == '"' {
            let quote = c;
            let mut token = String::new();
            for q in chars.by_ref() {
                if q == quote {
                    break;
                }
                token.push(q);
            }
            if !token.is_empty() {
                last = Some(token);
            }
        }
    }
    last.map(PathBuf::from)
}

/// What: Average an image into one tint color.
///
/// Inputs:
/// - `img`: Decoded RGBA pixels (already downsampled by the caller).
///
/// Output:
/// - The mean of each channel; `None` for an image with no pixels.
pub fn average_color(img: &image::RgbaImage) -> Option<Tint> {
    let count = u64::from(img.width()) * u64::from(img.height());
    if count == 0 {
        return None;
    }
    let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
    for px in img.pixels() {
        r += u64::from(px.0[0]);
        g += u64::from(px.0[1]);
        b += u64::from(px.0[2]);
    }
    Some(Tint {
        r: (r / count) as u8,
        g: (g / count) as u8,
        b: (b / count) as u8,
    })
}

/// What: Load and average the wallpaper at `path`.
///
/// Inputs:
/// - `path`: Image file to decode.
///
/// Output:
/// - `Ok(Tint)` on success; [`WallpaperError`] distinguishing missing,
///   unreadable, and undecodable files.
///
/// Details:
/// - Decodes fully, then averages a 64x64 thumbnail so arbitrarily
///   large wallpapers stay cheap. Runs on a blocking worker.
pub fn load_tint(path: &Path) -> Result<Tint, WallpaperError> {
    if !path.exists() {
        return Err(WallpaperError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(WallpaperError::Unreadable)?;
    let img = image::load_from_memory(&bytes)?;
    let small = img.thumbnail(64, 64).to_rgba8();
    average_color(&small).ok_or_else(|| {
        WallpaperError::Decode(image::ImageError::Limits(
            image::error::LimitError::from_kind(image::error::LimitErrorKind::DimensionError),
        ))
    })
}
