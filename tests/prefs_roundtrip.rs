//! Integration tests for clock preference persistence.

use std::sync::{Mutex, OnceLock};

use nook::theme::{
    Prefs, load_prefs, pack_argb, save_clock_color, save_clock_opacity, save_hint_shown,
};

fn env_mutex() -> &'static Mutex<()> {
    static M: OnceLock<Mutex<()>> = OnceLock::new();
    M.get_or_init(|| Mutex::new(()))
}

fn with_temp_home<F: FnOnce()>(f: F) {
    let _guard = env_mutex().lock().unwrap();
    let orig_home = std::env::var_os("HOME");
    let base = tempfile::tempdir().unwrap();
    unsafe { std::env::set_var("HOME", base.path()) };
    f();
    unsafe {
        match orig_home {
            Some(v) => std::env::set_var("HOME", v),
            None => std::env::remove_var("HOME"),
        }
    }
}

/// What: Opacity 0.5 persists and reloads exactly
///
/// - Input: `save_clock_opacity(0.5)` under a fresh HOME
/// - Output: `load_prefs()` reads 0.5 back
#[test]
fn prefs_opacity_half_round_trips() {
    with_temp_home(|| {
        assert_eq!(load_prefs(), Prefs::default());
        save_clock_opacity(0.5);
        let loaded = load_prefs();
        assert!((loaded.clock_opacity - 0.5).abs() < f32::EPSILON);
    });
}

/// What: Opaque red persists and is reapplied identically
///
/// - Input: `save_clock_color(pack_argb(0xFF, 0xFF, 0, 0))`
/// - Output: The same packed value on the next load
#[test]
fn prefs_opaque_red_round_trips() {
    with_temp_home(|| {
        let red = pack_argb(0xFF, 0xFF, 0x00, 0x00);
        save_clock_color(red);
        assert_eq!(load_prefs().clock_color, red);
    });
}

/// What: Writes are last-write-wins per key and independent across keys
///
/// - Input: Two color writes and one opacity write, interleaved
/// - Output: Latest color, latest opacity, hint flag preserved
#[test]
fn prefs_last_write_wins_per_key() {
    with_temp_home(|| {
        save_clock_color(pack_argb(0xFF, 0x00, 0xFF, 0x00));
        save_hint_shown(true);
        save_clock_opacity(0.25);
        save_clock_color(pack_argb(0xFF, 0x00, 0x00, 0xFF));

        let loaded = load_prefs();
        assert_eq!(loaded.clock_color, pack_argb(0xFF, 0x00, 0x00, 0xFF));
        assert!((loaded.clock_opacity - 0.25).abs() < f32::EPSILON);
        assert!(loaded.hint_shown);
    });
}
