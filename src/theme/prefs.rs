//! Preference loading and per-key persistence for `nook.conf`.
//!
//! The file is a flat `key = value` list. Loading tolerates unknown keys
//! and malformed values (defaults win); saving rewrites exactly one line
//! in place so user comments and unrelated keys survive every write.

use std::fs;
use std::path::PathBuf;

use super::parsing::{parse_bool, parse_color_value, strip_inline_comment};
use super::paths::conf_path;
use super::types::Prefs;

/// Skeleton configuration file content written on first run.
pub(crate) const SKELETON_CONF_CONTENT: &str = "# nook configuration\n\
#\n\
# Format: key = value\n\
# Lines starting with # are comments.\n\
#\n\
# Clock appearance. Color accepts #RRGGBB, #AARRGGBB, R,G,B or a packed\n\
# ARGB integer; opacity is a float between 0 and 1.\n\
clock_color = #FFFFFF\n\
clock_opacity = 1.0\n\
#\n\
# Wallpaper used for the background tint. When unset, nook probes\n\
# $NOOK_WALLPAPER, ~/.cache/wal/wal and ~/.fehbg in that order.\n\
# wallpaper = /usr/share/backgrounds/default.png\n";

/// Load preferences from `nook.conf`, writing the skeleton on first run.
///
/// Falls back to [`Prefs::default`] for missing or unparsable values.
pub fn load_prefs() -> Prefs {
    let path = conf_path();
    if !path.is_file() {
        let _ = fs::write(&path, SKELETON_CONF_CONTENT);
    }
    let Ok(content) = fs::read_to_string(&path) else {
        return Prefs::default();
    };
    parse_prefs(&content)
}

/// Parse preference keys out of configuration text.
///
/// Unknown keys are ignored so the same file can carry future settings.
pub(crate) fn parse_prefs(content: &str) -> Prefs {
    let mut out = Prefs::default();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some(eq) = trimmed.find('=') else {
            continue;
        };
        let (raw_key, raw_val) = trimmed.split_at(eq);
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(&raw_val[1..]);
        match key.as_str() {
            "clock_color" => {
                if let Some(c) = parse_color_value(val) {
                    out.clock_color = c;
                }
            }
            "clock_opacity" => {
                if let Ok(v) = val.parse::<f32>()
                    && v.is_finite()
                {
                    out.clock_opacity = v.clamp(0.0, 1.0);
                }
            }
            "wallpaper" => {
                if !val.is_empty() {
                    out.wallpaper = Some(PathBuf::from(val));
                }
            }
            "hint_shown" => {
                out.hint_shown = parse_bool(val);
            }
            _ => {}
        }
    }
    out
}

/// Persist one key to `nook.conf`, preserving comments and other keys.
///
/// Every line carrying the key is rewritten (duplicates would otherwise
/// shadow the change on reload); a missing key is appended at the end.
fn save_key(key: &str, value: &str) {
    let p = conf_path();
    let mut lines: Vec<String> = if let Ok(content) = fs::read_to_string(&p) {
        content.lines().map(|s| s.to_string()).collect()
    } else {
        SKELETON_CONF_CONTENT.lines().map(|s| s.to_string()).collect()
    };
    let mut replaced = false;
    for line in lines.iter_mut() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        if let Some(eq) = trimmed.find('=') {
            let (kraw, _) = trimmed.split_at(eq);
            let k = kraw.trim().to_lowercase().replace(['.', '-', ' '], "_");
            if k == key {
                *line = format!("{key} = {value}");
                replaced = true;
            }
        }
    }
    if !replaced {
        lines.push(format!("{key} = {value}"));
    }
    let mut new_content = lines.join("\n");
    new_content.push('\n');
    if let Err(e) = fs::write(&p, new_content) {
        tracing::warn!(error = %e, key, "failed to persist preference");
    }
}

/// Persist the clock color immediately (packed ARGB, written as hex).
pub fn save_clock_color(argb: u32) {
    save_key("clock_color", &super::parsing::format_color(argb));
}

/// Persist the clock opacity immediately.
pub fn save_clock_opacity(opacity: f32) {
    save_key("clock_opacity", &format!("{:.2}", opacity.clamp(0.0, 1.0)));
}

/// Record that the first-run greeting has been shown.
pub fn save_hint_shown(shown: bool) {
    save_key("hint_shown", if shown { "true" } else { "false" });
}
