//! App launcher: resolve an entry's command line and hand it to the OS.
//!
//! Launching is fire-and-forget by contract: the child is spawned
//! detached in its own process group with null stdio, and every failure
//! mode (unknown identifier, empty command, missing terminal emulator,
//! spawn error) is logged and swallowed. Callers cannot distinguish
//! "launched" from "no-op", and must not need to.

use std::process::{Command, Stdio};

use crate::state::AppEntry;

/// What: Remove freedesktop field codes from an `Exec` value.
///
/// Inputs:
/// - `exec`: Raw `Exec` string, e.g. `firefox %u`.
///
/// Output:
/// - The command line with `%f %F %u %U %i %c %k %d %D %n %N %v %m`
///   removed and `%%` collapsed to a literal `%`.
///
/// Details:
/// - nook launches applications without a document argument, so every
///   placeholder expands to nothing, exactly like an empty file list.
pub fn strip_field_codes(exec: &str) -> String {
    let mut out = String::with_capacity(exec.len());
    let mut chars = exec.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('%') => out.push('%'),
            Some('f' | 'F' | 'u' | 'U' | 'i' | 'c' | 'k' | 'd' | 'D' | 'n' | 'N' | 'v' | 'm') => {}
            Some(other) => {
                // Unknown code: keep it verbatim rather than guessing
                out.push('%');
                out.push(other);
            }
            None => out.push('%'),
        }
    }
    out
}

/// What: Split a command line into argv, honoring quoting.
///
/// Inputs:
/// - `cmd`: Command line after field-code stripping.
///
/// Output:
/// - Arguments in order; empty when the line is blank.
///
/// Details:
/// - Double quotes group words and support `\"` and `\\` escapes, per
///   the desktop-entry quoting rules; single quotes group words without
///   escapes. Unterminated quotes consume the rest of the line.
pub fn split_command(cmd: &str) -> Vec<String> {
    let mut args: Vec<String> = Vec::new();
    let mut cur = String::new();
    let mut in_word = false;
    let mut chars = cmd.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ' ' | '\t' => {
                if in_word {
                    args.push(std::mem::take(&mut cur));
                    in_word = false;
                }
            }
            '"' => {
                in_word = true;
                while let Some(q) = chars.next() {
                    match q {
                        '"' => break,
                        '\\' => {
                            if let Some(esc) = chars.next() {
                                cur.push(esc);
                            }
                        }
                        other => cur.push(other),
                    }
                }
            }
            '\'' => {
                in_word = true;
                for q in chars.by_ref() {
                    if q == '\'' {
                        break;
                    }
                    cur.push(q);
                }
            }
            other => {
                in_word = true;
                cur.push(other);
            }
        }
    }
    if in_word {
        args.push(cur);
    }
    args
}

/// Terminal emulators probed for `Terminal=true` entries, best first.
const TERMINAL_CANDIDATES: [&str; 9] = [
    "kitty",
    "alacritty",
    "foot",
    "wezterm",
    "ghostty",
    "konsole",
    "gnome-terminal",
    "xfce4-terminal",
    "xterm",
];

/// What: Detect a usable terminal emulator on `$PATH`.
///
/// Inputs: none (reads `$TERMINAL` first, then probes candidates).
///
/// Output:
/// - `Some(command)` of the first emulator found; `None` when nothing
///   resolves, in which case `Terminal=true` entries cannot be launched.
pub fn detect_terminal() -> Option<String> {
    if let Ok(t) = std::env::var("TERMINAL")
        && !t.trim().is_empty()
        && which::which(t.trim()).is_ok()
    {
        return Some(t.trim().to_string());
    }
    TERMINAL_CANDIDATES
        .iter()
        .find(|cand| which::which(cand).is_ok())
        .map(|s| (*s).to_string())
}

/// What: Wrap an argv so it runs inside a terminal emulator.
///
/// Inputs:
/// - `term`: Emulator command from [`detect_terminal`].
/// - `argv`: Program argv to run inside it.
///
/// Output:
/// - Full argv starting with the emulator. GNOME/XFCE terminals take the
///   command after `--`; everything else uses `-e`.
pub fn terminal_invocation(term: &str, argv: Vec<String>) -> Vec<String> {
    let mut out = vec![term.to_string()];
    if term.ends_with("gnome-terminal") || term.ends_with("xfce4-terminal") {
        out.push("--".to_string());
    } else {
        out.push("-e".to_string());
    }
    out.extend(argv);
    out
}

/// Spawn `argv` detached: own process group, null stdio.
fn spawn_detached(argv: &[String], id: &str) {
    let mut cmd = Command::new(&argv[0]);
    cmd.args(&argv[1..])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }
    match cmd.spawn() {
        Ok(child) => {
            tracing::info!(id, pid = child.id(), program = %argv[0], "launched application");
        }
        Err(e) => {
            tracing::warn!(id, program = %argv[0], error = %e, "launch failed");
        }
    }
}

/// What: Launch one application entry, best effort.
///
/// Inputs:
/// - `entry`: The entry to start.
/// - `terminal_cmd`: Detected emulator for `Terminal=true` entries.
///
/// Output: none. Failures are logged and otherwise invisible.
pub fn launch(entry: &AppEntry, terminal_cmd: Option<&str>) {
    let argv = split_command(&strip_field_codes(&entry.exec));
    if argv.is_empty() {
        tracing::warn!(id = %entry.id, "entry has an empty command after field codes");
        return;
    }
    let argv = if entry.needs_terminal {
        match terminal_cmd {
            Some(term) => terminal_invocation(term, argv),
            None => {
                tracing::warn!(id = %entry.id, "no terminal emulator found; launch skipped");
                return;
            }
        }
    } else {
        argv
    };
    spawn_detached(&argv, &entry.id);
}

/// What: Launch by identifier, resolving against the current listing.
///
/// Inputs:
/// - `apps`: Current application listing.
/// - `id`: Desktop-file ID to start.
/// - `terminal_cmd`: Detected emulator for `Terminal=true` entries.
///
/// Output: none. An unknown identifier is a logged no-op.
pub fn launch_by_id(apps: &[AppEntry], id: &str, terminal_cmd: Option<&str>) {
    match apps.iter().find(|e| e.id == id) {
        Some(entry) => launch(entry, terminal_cmd),
        None => tracing::warn!(id, "no launch target for identifier"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: Field codes vanish, `%%` stays a literal percent
    ///
    /// - Input: Exec lines with common and doubled codes
    /// - Output: Clean command lines
    #[test]
    fn launch_strip_field_codes_cases() {
        assert_eq!(strip_field_codes("firefox %u"), "firefox ");
        assert_eq!(strip_field_codes("app --files %F --icon %i"), "app --files  --icon ");
        assert_eq!(strip_field_codes("printf %%d"), "printf %d");
        assert_eq!(strip_field_codes("plain"), "plain");
        assert_eq!(strip_field_codes("tail %"), "tail %");
    }

    /// What: Argv splitting honors desktop-entry quoting
    ///
    /// - Input: Quoted paths, escapes, repeated whitespace
    /// - Output: Expected argv
    #[test]
    fn launch_split_command_quoting() {
        assert_eq!(split_command("a b  c"), vec!["a", "b", "c"]);
        assert_eq!(
            split_command(r#"sh -c "echo \"hi\" there""#),
            vec!["sh", "-c", r#"echo "hi" there"#]
        );
        assert_eq!(
            split_command(r#""/opt/My App/run" --flag"#),
            vec!["/opt/My App/run", "--flag"]
        );
        assert_eq!(split_command("it's fine"), vec!["its fine"]);
        assert!(split_command("   ").is_empty());
    }

    /// What: Terminal wrapping picks the right separator per emulator
    ///
    /// - Input: gnome-terminal and kitty with a two-word argv
    /// - Output: `--` vs `-e`
    #[test]
    fn launch_terminal_invocation_shapes() {
        let argv = vec!["htop".to_string(), "-d".to_string()];
        assert_eq!(
            terminal_invocation("gnome-terminal", argv.clone()),
            vec!["gnome-terminal", "--", "htop", "-d"]
        );
        assert_eq!(
            terminal_invocation("kitty", argv),
            vec!["kitty", "-e", "htop", "-d"]
        );
    }

    /// What: Unknown identifiers and empty commands are silent no-ops
    ///
    /// - Input: Empty listing; entry whose Exec is only field codes
    /// - Output: No panic, no state change
    #[test]
    fn launch_unresolvable_targets_are_noops() {
        launch_by_id(&[], "org.example.ghost", None);

        let entry = AppEntry {
            id: "weird".into(),
            name: "Weird".into(),
            exec: "%U".into(),
            icon: None,
            needs_terminal: false,
        };
        launch(&entry, None);

        let term_entry = AppEntry {
            id: "term".into(),
            name: "Term".into(),
            exec: "htop".into(),
            icon: None,
            needs_terminal: true,
        };
        // No emulator available: skipped, not spawned
        launch(&term_entry, None);
    }
}
