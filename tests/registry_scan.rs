//! Integration tests for the registry scan against real directories.
//!
//! These tests point the XDG environment at temp fixtures, so they are
//! serialized with a file-local mutex.

use std::fs;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use nook::registry::{RegistryError, scan_applications};

fn env_mutex() -> &'static Mutex<()> {
    static M: OnceLock<Mutex<()>> = OnceLock::new();
    M.get_or_init(|| Mutex::new(()))
}

struct EnvFixture {
    _user: tempfile::TempDir,
    _system: tempfile::TempDir,
    orig: Vec<(&'static str, Option<std::ffi::OsString>)>,
}

impl EnvFixture {
    /// Point XDG_DATA_HOME and XDG_DATA_DIRS at two fresh temp dirs and
    /// return their `applications/` subdirectories.
    fn new() -> (Self, std::path::PathBuf, std::path::PathBuf) {
        let user = tempfile::tempdir().unwrap();
        let system = tempfile::tempdir().unwrap();
        let user_apps = user.path().join("applications");
        let system_apps = system.path().join("applications");
        fs::create_dir_all(&user_apps).unwrap();
        fs::create_dir_all(&system_apps).unwrap();
        let orig = vec![
            ("XDG_DATA_HOME", std::env::var_os("XDG_DATA_HOME")),
            ("XDG_DATA_DIRS", std::env::var_os("XDG_DATA_DIRS")),
        ];
        unsafe {
            std::env::set_var("XDG_DATA_HOME", user.path());
            std::env::set_var("XDG_DATA_DIRS", system.path());
        }
        (
            EnvFixture {
                _user: user,
                _system: system,
                orig,
            },
            user_apps,
            system_apps,
        )
    }
}

impl Drop for EnvFixture {
    fn drop(&mut self) {
        unsafe {
            for (key, val) in self.orig.drain(..) {
                match val {
                    Some(v) => std::env::set_var(key, v),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}

fn write_desktop(dir: &Path, file: &str, name: &str, extra: &str) {
    let content = format!(
        "[Desktop Entry]\nType=Application\nName={name}\nExec=true\n{extra}"
    );
    fs::write(dir.join(file), content).unwrap();
}

/// What: A full scan filters, dedupes, and sorts
///
/// - Input: User and system dirs with a shadowed ID, a hidden entry, a
///   blank label, and a vendor subdirectory
/// - Output: User entry wins its ID, junk is gone, names ascend
#[test]
fn scan_filters_dedupes_and_sorts() {
    let _guard = env_mutex().lock().unwrap();
    let (_fixture, user_apps, system_apps) = EnvFixture::new();

    write_desktop(&user_apps, "editor.desktop", "My Editor", "");
    write_desktop(&system_apps, "editor.desktop", "System Editor", "");
    write_desktop(&system_apps, "zeta.desktop", "Zeta", "");
    write_desktop(&system_apps, "alpha.desktop", "alpha", "");
    write_desktop(&system_apps, "ghost.desktop", "Ghost", "NoDisplay=true\n");
    write_desktop(&system_apps, "blank.desktop", "   ", "");
    let vendor = system_apps.join("vendor");
    fs::create_dir_all(&vendor).unwrap();
    write_desktop(&vendor, "tool.desktop", "Vendor Tool", "");
    fs::write(system_apps.join("notes.txt"), "not a desktop file").unwrap();

    let listing = scan_applications().unwrap();

    let names: Vec<&str> = listing.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "My Editor", "Vendor Tool", "Zeta"]);

    let editor = listing.iter().find(|e| e.id == "editor").unwrap();
    assert_eq!(editor.name, "My Editor"); // user dir shadows system dir

    let vendor_tool = listing.iter().find(|e| e.name == "Vendor Tool").unwrap();
    assert_eq!(vendor_tool.id, "vendor-tool");

    assert!(listing.iter().all(|e| !e.name.trim().is_empty()));
    assert!(!names.contains(&"Ghost"));
}

/// What: Duplicate IDs collapse to exactly one entry
///
/// - Input: The same ID in both dirs with different labels
/// - Output: One entry for that ID
#[test]
fn scan_duplicate_ids_yield_one_entry() {
    let _guard = env_mutex().lock().unwrap();
    let (_fixture, user_apps, system_apps) = EnvFixture::new();

    write_desktop(&user_apps, "dup.desktop", "First Label", "");
    write_desktop(&system_apps, "dup.desktop", "Second Label", "");

    let listing = scan_applications().unwrap();
    let dups: Vec<_> = listing.iter().filter(|e| e.id == "dup").collect();
    assert_eq!(dups.len(), 1);
    assert_eq!(dups[0].name, "First Label");
}

/// What: Empty but readable directories give an empty listing, not an error
///
/// - Input: Two empty applications dirs
/// - Output: `Ok([])`
#[test]
fn scan_empty_dirs_is_ok_empty() {
    let _guard = env_mutex().lock().unwrap();
    let (_fixture, _user_apps, _system_apps) = EnvFixture::new();
    let listing = scan_applications().unwrap();
    assert!(listing.is_empty());
}

/// What: The registry is unreachable when no directory can be read
///
/// - Input: XDG variables pointing at nonexistent paths
/// - Output: `RegistryError::Unreachable`
#[test]
fn scan_unreachable_when_no_dir_readable() {
    let _guard = env_mutex().lock().unwrap();
    let orig_home = std::env::var_os("HOME");
    let orig_data_home = std::env::var_os("XDG_DATA_HOME");
    let orig_data_dirs = std::env::var_os("XDG_DATA_DIRS");
    unsafe {
        std::env::set_var("XDG_DATA_HOME", "/nonexistent/nook/data");
        std::env::set_var("XDG_DATA_DIRS", "/nonexistent/nook/a:/nonexistent/nook/b");
        std::env::remove_var("HOME");
    }

    let result = scan_applications();
    assert!(matches!(result, Err(RegistryError::Unreachable { .. })));

    unsafe {
        match orig_home {
            Some(v) => std::env::set_var("HOME", v),
            None => std::env::remove_var("HOME"),
        }
        match orig_data_home {
            Some(v) => std::env::set_var("XDG_DATA_HOME", v),
            None => std::env::remove_var("XDG_DATA_HOME"),
        }
        match orig_data_dirs {
            Some(v) => std::env::set_var("XDG_DATA_DIRS", v),
            None => std::env::remove_var("XDG_DATA_DIRS"),
        }
    }
}
