//! Application registry adapter: freedesktop `.desktop` enumeration.
//!
//! This module owns the acquisition half of the home screen pipeline:
//! it discovers the XDG application directories, parses desktop entries,
//! drops everything that is not a user-launchable application, and
//! produces the deduplicated, name-sorted list the presentation layer
//! renders. Scanning reads OS state only; it never writes.
//!
//! Precedence follows the freedesktop basedir rules: the user data dir
//! is scanned before the system dirs, and the first occurrence of a
//! desktop-file ID wins, so user entries shadow system entries.

use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::state::AppEntry;

/// Failure modes of a registry enumeration.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// None of the candidate application directories could be read.
    #[error("no application directory could be read (checked {checked})")]
    Unreachable {
        /// Number of candidate directories probed.
        checked: usize,
    },
    /// The scan worker died before delivering a result.
    #[error("registry scan did not complete")]
    Aborted,
}

/// Fields of one parsed desktop entry, before an ID is attached.
///
/// Only produced for entries that survived filtering; everything the
/// home screen does not list (hidden entries, non-applications, blank
/// labels, entries without a command) is rejected during parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DesktopFile {
    /// Display label from the `Name` key, trimmed, never blank.
    pub name: String,
    /// Raw `Exec` value, field codes included.
    pub exec: String,
    /// Icon name or path from the `Icon` key.
    pub icon: Option<String>,
    /// Whether the entry asks for a terminal (`Terminal=true`).
    pub needs_terminal: bool,
}

/// Candidate `applications/` directories in precedence order.
///
/// `$XDG_DATA_HOME/applications` (default `~/.local/share/applications`)
/// first, then every entry of `$XDG_DATA_DIRS` (default
/// `/usr/local/share:/usr/share`). Directories are returned whether or
/// not they exist; the scan decides what is readable.
pub fn application_dirs() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = Vec::new();
    if let Ok(xdg_data_home) = env::var("XDG_DATA_HOME")
        && !xdg_data_home.trim().is_empty()
    {
        dirs.push(Path::new(&xdg_data_home).join("applications"));
    } else if let Ok(home) = env::var("HOME") {
        dirs.push(
            Path::new(&home)
                .join(".local")
                .join("share")
                .join("applications"),
        );
    }
    let data_dirs = env::var("XDG_DATA_DIRS")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "/usr/local/share:/usr/share".to_string());
    for base in data_dirs.split(':').filter(|s| !s.is_empty()) {
        let dir = Path::new(base).join("applications");
        if !dirs.contains(&dir) {
            dirs.push(dir);
        }
    }
    dirs
}

/// What: Compute the desktop-file ID for a file under an applications dir.
///
/// Inputs:
/// - `base`: The `applications/` directory the scan started from.
/// - `path`: Path of the `.desktop` file, inside `base`.
///
/// Output:
/// - `Some(id)` with `/` replaced by `-` and the suffix removed;
///   `None` when `path` is not under `base` or not a `.desktop` file.
pub fn desktop_file_id(base: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(base).ok()?;
    let rel_str = rel.to_str()?;
    let stem = rel_str.strip_suffix(".desktop")?;
    if stem.is_empty() {
        return None;
    }
    Some(stem.replace(['/', '\\'], "-"))
}

/// What: Parse the `[Desktop Entry]` group of a desktop file.
///
/// Inputs:
/// - `content`: Full text of the `.desktop` file.
///
/// Output:
/// - `Some(DesktopFile)` for a visible application with a non-blank name
///   and a command; `None` for everything the home screen must not list.
///
/// Details:
/// - Only the `[Desktop Entry]` group is read; parsing stops at the next
///   group header.
/// - Localized keys (`Name[de]`) are ignored; the plain `Name` is the
///   display label.
/// - Rejected: `Type` other than `Application`, `NoDisplay=true`,
///   `Hidden=true`, blank/missing `Name`, missing `Exec`.
pub fn parse_desktop_entry(content: &str) -> Option<DesktopFile> {
    let mut in_entry_group = false;
    let mut seen_entry_group = false;
    let mut name: Option<String> = None;
    let mut exec: Option<String> = None;
    let mut icon: Option<String> = None;
    let mut entry_type: Option<String> = None;
    let mut needs_terminal = false;
    let mut hidden = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if trimmed.starts_with('[') {
            if in_entry_group {
                break; // end of the main group
            }
            in_entry_group = trimmed == "[Desktop Entry]";
            seen_entry_group |= in_entry_group;
            continue;
        }
        if !in_entry_group {
            continue;
        }
        let Some(eq) = trimmed.find('=') else {
            continue;
        };
        let (raw_key, raw_val) = trimmed.split_at(eq);
        let key = raw_key.trim();
        let val = raw_val[1..].trim();
        if key.contains('[') {
            continue; // localized variant
        }
        match key {
            "Name" => name = Some(val.to_string()),
            "Exec" => exec = Some(val.to_string()),
            "Icon" => {
                if !val.is_empty() {
                    icon = Some(val.to_string());
                }
            }
            "Type" => entry_type = Some(val.to_string()),
            "Terminal" => needs_terminal = val.eq_ignore_ascii_case("true"),
            "NoDisplay" | "Hidden" => hidden |= val.eq_ignore_ascii_case("true"),
            _ => {}
        }
    }

    if !seen_entry_group || hidden {
        return None;
    }
    if entry_type.as_deref() != Some("Application") {
        return None;
    }
    let name = name?.trim().to_string();
    if name.is_empty() {
        return None;
    }
    let exec = exec?;
    if exec.trim().is_empty() {
        return None;
    }
    Some(DesktopFile {
        name,
        exec,
        icon,
        needs_terminal,
    })
}

/// What: Deduplicate and order raw entries into the final listing.
///
/// Inputs:
/// - `raw`: Entries in scan order (precedence order).
///
/// Output:
/// - Exactly one entry per ID (first occurrence wins), sorted ascending
///   by lowercase display name. The sort is stable, so equal names keep
///   scan order.
pub fn build_listing(raw: Vec<AppEntry>) -> Vec<AppEntry> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<AppEntry> = Vec::with_capacity(raw.len());
    for entry in raw {
        if seen.insert(entry.id.clone()) {
            out.push(entry);
        }
    }
    out.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    out
}

/// Collect `.desktop` files under `dir`, recursing into subdirectories.
fn collect_desktop_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = Vec::new();
    let mut stack: Vec<PathBuf> = vec![dir.to_path_buf()];
    while let Some(d) = stack.pop() {
        let Ok(read) = fs::read_dir(&d) else {
            tracing::debug!(dir = %d.display(), "skipping unreadable directory");
            continue;
        };
        for entry in read.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.extension().is_some_and(|e| e == "desktop") {
                files.push(path);
            }
        }
    }
    // Deterministic order within one base dir regardless of readdir order
    files.sort();
    files
}

/// What: Enumerate all launchable applications known to the desktop.
///
/// Inputs: none (reads `XDG_DATA_HOME`, `XDG_DATA_DIRS`, `HOME`).
///
/// Output:
/// - `Ok(listing)` sorted by lowercase name, one entry per ID; empty when
///   the directories exist but hold nothing launchable.
/// - `Err(RegistryError::Unreachable)` when not a single candidate
///   directory could be read.
///
/// Details:
/// - Unreadable files and subdirectories are skipped with a debug log;
///   they never fail the scan.
/// - This walks the filesystem and parses every entry; callers run it
///   off the interactive thread and receive the full list atomically.
pub fn scan_applications() -> Result<Vec<AppEntry>, RegistryError> {
    let dirs = application_dirs();
    let mut any_readable = false;
    let mut raw: Vec<AppEntry> = Vec::new();
    for base in &dirs {
        if fs::read_dir(base).is_err() {
            continue;
        }
        any_readable = true;
        for path in collect_desktop_files(base) {
            let Ok(content) = fs::read_to_string(&path) else {
                tracing::debug!(file = %path.display(), "skipping unreadable desktop file");
                continue;
            };
            let Some(parsed) = parse_desktop_entry(&content) else {
                continue;
            };
            let Some(id) = desktop_file_id(base, &path) else {
                continue;
            };
            raw.push(AppEntry {
                id,
                name: parsed.name,
                exec: parsed.exec,
                icon: parsed.icon,
                needs_terminal: parsed.needs_terminal,
            });
        }
    }
    if !any_readable {
        return Err(RegistryError::Unreachable {
            checked: dirs.len(),
        });
    }
    let listing = build_listing(raw);
    tracing::info!(count = listing.len(), "registry scan complete");
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str) -> AppEntry {
        AppEntry {
            id: id.to_string(),
            name: name.to_string(),
            exec: "true".to_string(),
            icon: None,
            needs_terminal: false,
        }
    }

    /// What: Minimal desktop entry parses into a listing row
    ///
    /// - Input: `[Desktop Entry]` with Name/Exec/Type and extras
    /// - Output: Fields mapped; localized names ignored
    #[test]
    fn registry_parse_basic_entry() {
        let content = "\
[Desktop Entry]
Type=Application
Name=Files
Name[de]=Dateien
GenericName=File Manager
Exec=nautilus --new-window %U
Icon=org.gnome.Nautilus
Terminal=false
";
        let parsed = parse_desktop_entry(content).unwrap();
        assert_eq!(parsed.name, "Files");
        assert_eq!(parsed.exec, "nautilus --new-window %U");
        assert_eq!(parsed.icon.as_deref(), Some("org.gnome.Nautilus"));
        assert!(!parsed.needs_terminal);
    }

    /// What: Entries the home screen must not list are rejected
    ///
    /// - Input: Blank name, NoDisplay, Hidden, missing Exec, non-Application type
    /// - Output: `None` for each
    #[test]
    fn registry_parse_rejects_unlistable_entries() {
        let blank_name = "[Desktop Entry]\nType=Application\nName=   \nExec=true\n";
        assert_eq!(parse_desktop_entry(blank_name), None);

        let no_display = "[Desktop Entry]\nType=Application\nName=X\nExec=x\nNoDisplay=true\n";
        assert_eq!(parse_desktop_entry(no_display), None);

        let hidden = "[Desktop Entry]\nType=Application\nName=X\nExec=x\nHidden=true\n";
        assert_eq!(parse_desktop_entry(hidden), None);

        let no_exec = "[Desktop Entry]\nType=Application\nName=X\n";
        assert_eq!(parse_desktop_entry(no_exec), None);

        let link = "[Desktop Entry]\nType=Link\nName=X\nURL=https://example.org\n";
        assert_eq!(parse_desktop_entry(link), None);

        let no_group = "Name=X\nExec=x\nType=Application\n";
        assert_eq!(parse_desktop_entry(no_group), None);
    }

    /// What: Keys outside the main group do not leak in
    ///
    /// - Input: Action group after `[Desktop Entry]` redefining Name/Exec
    /// - Output: Main-group values win
    #[test]
    fn registry_parse_stops_at_next_group() {
        let content = "\
[Desktop Entry]
Type=Application
Name=Editor
Exec=editor %F
Actions=new;

[Desktop Action new]
Name=New Window
Exec=editor --new-window
";
        let parsed = parse_desktop_entry(content).unwrap();
        assert_eq!(parsed.name, "Editor");
        assert_eq!(parsed.exec, "editor %F");
    }

    /// What: Terminal flag is carried through
    ///
    /// - Input: `Terminal=true` entry
    /// - Output: `needs_terminal` set
    #[test]
    fn registry_parse_terminal_flag() {
        let content = "[Desktop Entry]\nType=Application\nName=htop\nExec=htop\nTerminal=true\n";
        assert!(parse_desktop_entry(content).unwrap().needs_terminal);
    }

    /// What: Desktop-file IDs flatten subdirectories with dashes
    ///
    /// - Input: Paths at the top level and one level deep
    /// - Output: `vendor-app` style IDs; non-desktop files yield None
    #[test]
    fn registry_desktop_file_id_flattens_subdirs() {
        let base = Path::new("/usr/share/applications");
        assert_eq!(
            desktop_file_id(base, &base.join("firefox.desktop")).as_deref(),
            Some("firefox")
        );
        assert_eq!(
            desktop_file_id(base, &base.join("kde4").join("konsole.desktop")).as_deref(),
            Some("kde4-konsole")
        );
        assert_eq!(desktop_file_id(base, &base.join("README")), None);
        assert_eq!(desktop_file_id(Path::new("/other"), &base.join("a.desktop")), None);
    }

    /// What: Listing deduplicates by ID with first occurrence winning
    ///
    /// - Input: Two raw entries sharing an ID with different labels
    /// - Output: Exactly one entry for that ID, the first one
    #[test]
    fn registry_build_listing_dedupes_first_wins() {
        let raw = vec![
            entry("org.example.app", "User Override"),
            entry("org.example.app", "System Label"),
            entry("org.example.other", "Other"),
        ];
        let listing = build_listing(raw);
        assert_eq!(listing.len(), 2);
        let dup = listing
            .iter()
            .find(|e| e.id == "org.example.app")
            .unwrap();
        assert_eq!(dup.name, "User Override");
    }

    /// What: Listing order is ascending lowercase display name
    ///
    /// - Input: Mixed-case names in arbitrary order
    /// - Output: `[alpha, Zeta]` (case-insensitive compare)
    #[test]
    fn registry_build_listing_sorts_case_insensitively() {
        let raw = vec![entry("a.b", "Zeta"), entry("c.d", "alpha")];
        let listing = build_listing(raw);
        let names: Vec<&str> = listing.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "Zeta"]);
    }
}
