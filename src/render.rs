use crate::teams::NamedTeam;
use itertools::Itertools;
use std::io::{self, Write};
use std::str::FromStr;

/// Environment variable selecting the compact presentation.
pub const EMBED_ENV_VAR: &str = "TEAM_SPLITTER_EMBED";

/// How the teams are presented. Chosen once at startup.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum DisplayMode {
    #[default]
    Full,
    /// Reduced presentation for embedding the output somewhere else.
    Embed,
}

impl DisplayMode {
    /// Embed mode if `embed` is set or [`EMBED_ENV_VAR`] is `true`.
    pub fn detect(embed: bool) -> Self {
        Self::detect_from(embed, std::env::var(EMBED_ENV_VAR).ok().as_deref())
    }

    /// Embed mode if `embed` is set or `env_value` reads as `true`. Anything else is [`DisplayMode::Full`].
    pub fn detect_from(embed: bool, env_value: Option<&str>) -> Self {
        let from_env = env_value
            .and_then(|value| bool::from_str(value.trim()).ok())
            .unwrap_or(false);

        if embed || from_env {
            DisplayMode::Embed
        } else {
            DisplayMode::Full
        }
    }
}

/// Presents generated teams.
pub trait Renderer {
    /// Presents `teams` in slot order.
    fn render(&mut self, teams: &[NamedTeam]) -> io::Result<()>;
}

/// "1 member", "3 members".
#[inline]
pub fn member_count_label(count: usize) -> String {
    if count == 1 {
        format!("{count} member")
    } else {
        format!("{count} members")
    }
}

/// Writes the teams as text.
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
    mode: DisplayMode,
}

impl<W: Write> TextRenderer<W> {
    #[inline]
    pub fn new(out: W, mode: DisplayMode) -> Self {
        Self { out, mode }
    }

    #[inline]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, teams: &[NamedTeam]) -> io::Result<()> {
        match self.mode {
            DisplayMode::Full => {
                for (i, team) in teams.iter().enumerate() {
                    if i > 0 {
                        writeln!(self.out)?;
                    }
                    writeln!(
                        self.out,
                        "{} ({})",
                        team.name,
                        member_count_label(team.members.len())
                    )?;
                    for member in &team.members {
                        writeln!(self.out, "  - {member}")?;
                    }
                }
            }
            DisplayMode::Embed => {
                for team in teams {
                    writeln!(self.out, "{}: {}", team.name, team.members.iter().join(", "))?;
                }
            }
        }
        self.out.flush()
    }
}
