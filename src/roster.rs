use thiserror::Error;
use tracing::debug;

/// The ordered list of members to split into teams. Duplicates are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    members: Vec<String>,
}

impl Roster {
    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false` for a roster returned by [`parse_roster`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The members in input order.
    #[inline]
    pub fn members(&self) -> &[String] {
        &self.members
    }
}

impl IntoIterator for Roster {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum RosterError {
    /// No usable name was left after trimming and removing blank lines.
    #[error("please enter at least one team member")]
    EmptyRoster,
}

/// Parses one member per line, trimming each line and skipping blank ones.
pub fn parse_roster(text: &str) -> Result<Roster, RosterError> {
    let members: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect();

    if members.is_empty() {
        return Err(RosterError::EmptyRoster);
    }

    debug!(members = members.len(), "parsed roster");
    Ok(Roster { members })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_trim_and_skip_blank() {
        let roster = parse_roster("  Ann \n\nBo\n  ").unwrap();
        assert_eq!(roster.members(), ["Ann", "Bo"]);
    }

    #[test]
    fn test_crlf() {
        let roster = parse_roster("Ann\r\nBo\r\n\r\nCy").unwrap();
        assert_eq!(roster.members(), ["Ann", "Bo", "Cy"]);
    }

    #[test]
    fn test_duplicates_kept() {
        let roster = parse_roster("Ann\nAnn\nBo").unwrap();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.members(), ["Ann", "Ann", "Bo"]);
    }

    #[test]
    fn test_inner_whitespace_kept() {
        let roster = parse_roster("\tAnn Marie  \n").unwrap();
        assert_eq!(roster.members(), ["Ann Marie"]);
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse_roster(""), Err(RosterError::EmptyRoster));
        assert_eq!(parse_roster("   \n\n \t \n"), Err(RosterError::EmptyRoster));
    }
}
