use crate::teams::NamedTeam;
use itertools::Itertools;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use thiserror::Error;
use tracing::{debug, warn};

/// Shown after a successful copy.
pub const COPIED_ACKNOWLEDGMENT: &str = "Copied!";

/// Serializes the teams as plain text.
///
/// Each team is its name followed by one member per line. Teams are separated by a blank line and
/// the text ends with a single newline.
pub fn to_clipboard_text(teams: &[NamedTeam]) -> String {
    teams
        .iter()
        .map(|team| {
            let mut block = String::with_capacity(team.name.len() + 1);
            block.push_str(&team.name);
            block.push('\n');
            for member in &team.members {
                block.push_str(member);
                block.push('\n');
            }
            block
        })
        .join("\n")
}

/// A destination for the copied text.
pub trait Clipboard {
    /// Replaces the clipboard content with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ClipboardError {
    /// No copy program could be found.
    #[error("no clipboard command available (tried {0})")]
    NoCommand(String),
    /// The copy program could not be started.
    #[error("failed to start clipboard command `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    /// Writing the text to the copy program failed.
    #[error("failed to write to the clipboard: {0}")]
    Write(#[from] io::Error),
    /// The copy program exited unsuccessfully.
    #[error("clipboard command `{command}` exited with {status}")]
    CommandFailed { command: String, status: String },
}

/// Serializes `teams` and writes the result to `clipboard`.
///
/// Returns the acknowledgment to show to the user.
pub fn copy_teams<C: Clipboard + ?Sized>(
    teams: &[NamedTeam],
    clipboard: &mut C,
) -> Result<&'static str, ClipboardError> {
    let text = to_clipboard_text(teams);
    match clipboard.write_text(&text) {
        Ok(()) => {
            debug!(bytes = text.len(), "copied teams to the clipboard");
            Ok(COPIED_ACKNOWLEDGMENT)
        }
        Err(err) => {
            warn!(error = %err, "copy failed");
            Err(err)
        }
    }
}

/// Copy programs tried in order when none is configured.
pub const DEFAULT_COMMANDS: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
    &["pbcopy"],
    &["clip"],
];

/// A clipboard backed by an external copy program that reads the text on stdin.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    command: Option<Vec<String>>,
    candidates: &'static [&'static [&'static str]],
}

impl CommandClipboard {
    /// Tries each of [`DEFAULT_COMMANDS`] until one succeeds.
    #[inline]
    pub fn detect() -> Self {
        Self::detect_from(DEFAULT_COMMANDS)
    }

    /// Tries each of `candidates` until one succeeds.
    #[inline]
    pub fn detect_from(candidates: &'static [&'static [&'static str]]) -> Self {
        Self {
            command: None,
            candidates,
        }
    }

    /// Uses `command` (program followed by its arguments, split on whitespace).
    pub fn with_command(command: &str) -> Self {
        Self {
            command: Some(command.split_whitespace().map(str::to_owned).collect()),
            candidates: DEFAULT_COMMANDS,
        }
    }

    fn run(program: &str, args: &[impl AsRef<str>], text: &str) -> Result<(), ClipboardError> {
        let display = || {
            std::iter::once(program)
                .chain(args.iter().map(AsRef::as_ref))
                .join(" ")
        };

        let mut child = Command::new(program)
            .args(args.iter().map(AsRef::as_ref))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                command: display(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(err) = stdin.write_all(text.as_bytes()) {
                drop(stdin);
                let _ = child.kill();
                let _ = child.wait();
                return Err(err.into());
            }
        } // stdin is dropped here so the program sees EOF

        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::CommandFailed {
                command: display(),
                status: status.to_string(),
            })
        }
    }
}

impl Clipboard for CommandClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if let Some(command) = &self.command {
            let Some((program, args)) = command.split_first() else {
                return Err(ClipboardError::NoCommand("an empty command".to_owned()));
            };
            return Self::run(program, args, text);
        }

        let mut last_failure = None;
        for command in self.candidates {
            let Some((program, args)) = command.split_first() else {
                continue;
            };
            match Self::run(program, args, text) {
                Ok(()) => {
                    // Remember the working command for the next copies
                    self.command = Some(command.iter().map(|s| (*s).to_owned()).collect());
                    return Ok(());
                }
                Err(ClipboardError::Spawn { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                    debug!(program, "clipboard command not found");
                }
                Err(err) => {
                    debug!(program, error = %err, "clipboard command failed");
                    last_failure = Some(err);
                }
            }
        }

        Err(last_failure.unwrap_or_else(|| {
            ClipboardError::NoCommand(
                self.candidates
                    .iter()
                    .filter_map(|c| c.first())
                    .join(", "),
            )
        }))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Default)]
    struct MemoryClipboard(Option<String>);

    impl Clipboard for MemoryClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.0 = Some(text.to_owned());
            Ok(())
        }
    }

    struct RejectingClipboard;

    impl Clipboard for RejectingClipboard {
        fn write_text(&mut self, _: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Write(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "denied",
            )))
        }
    }

    fn sample_teams() -> Vec<NamedTeam> {
        vec![
            NamedTeam::new("Alpha Wolves", ["Ann", "Bo"]),
            NamedTeam::new("Team 2", ["Cy"]),
        ]
    }

    #[test]
    fn test_clipboard_text() {
        assert_eq!(
            to_clipboard_text(&sample_teams()),
            "Alpha Wolves\nAnn\nBo\n\nTeam 2\nCy\n"
        );
    }

    #[test]
    fn test_single_team_and_empty() {
        assert_eq!(to_clipboard_text(&[NamedTeam::new("Solo", ["Ann"])]), "Solo\nAnn\n");
        assert_eq!(to_clipboard_text(&[]), "");
    }

    #[test]
    fn test_copy() {
        let mut clipboard = MemoryClipboard::default();
        assert_eq!(copy_teams(&sample_teams(), &mut clipboard).unwrap(), "Copied!");
        assert_eq!(clipboard.0.as_deref(), Some("Alpha Wolves\nAnn\nBo\n\nTeam 2\nCy\n"));
    }

    #[test]
    fn test_copy_failure() {
        let err = copy_teams(&sample_teams(), &mut RejectingClipboard).unwrap_err();
        assert!(matches!(err, ClipboardError::Write(_)));
    }

    #[test]
    fn test_missing_command() {
        let mut clipboard = CommandClipboard::with_command("team-splitter-no-such-copy-program");
        let err = clipboard.write_text("Ann\n").unwrap_err();
        assert!(matches!(err, ClipboardError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_detection_skips_failing_commands() {
        const CANDIDATES: &[&[&str]] = &[
            &["team-splitter-no-such-copy-program"],
            &["sh", "-c", "cat > /dev/null; exit 1"],
            &["sh", "-c", "cat > /dev/null"],
        ];

        let mut clipboard = CommandClipboard::detect_from(CANDIDATES);
        clipboard.write_text("Ann\nBo\n").unwrap();
        assert_eq!(
            clipboard.command.as_deref(),
            Some(&["sh".to_owned(), "-c".to_owned(), "cat > /dev/null".to_owned()][..])
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_detection_reports_last_failure() {
        const CANDIDATES: &[&[&str]] = &[
            &["sh", "-c", "cat > /dev/null; exit 1"],
            &["team-splitter-no-such-copy-program"],
        ];

        let err = CommandClipboard::detect_from(CANDIDATES)
            .write_text("Ann\n")
            .unwrap_err();
        assert!(matches!(err, ClipboardError::CommandFailed { .. }));

        const MISSING: &[&[&str]] = &[&["team-splitter-no-such-copy-program"]];
        let err = CommandClipboard::detect_from(MISSING).write_text("Ann\n").unwrap_err();
        assert!(matches!(err, ClipboardError::NoCommand(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_failure() {
        // The program exits without reading, so a text larger than the pipe buffer cannot be written
        let text = "Ann\n".repeat(1 << 18);
        let mut clipboard = CommandClipboard::with_command("true");
        let err = clipboard.write_text(&text).unwrap_err();
        assert!(matches!(err, ClipboardError::Write(_)));
    }

    #[test]
    fn test_empty_command() {
        let mut clipboard = CommandClipboard::with_command("   ");
        assert!(matches!(
            clipboard.write_text("Ann\n"),
            Err(ClipboardError::NoCommand(_))
        ));
    }
}
