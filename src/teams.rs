use crate::names::TeamNaming;
use crate::roster::{Roster, RosterError};
use crate::shuffle::shuffled;
use crate::{gen_seeder, RandGen, Seeder};
use rand::Rng;
use std::fmt;
use std::iter::repeat_with;
use thiserror::Error;
use tracing::debug;

/// Minimum number of teams.
pub const MIN_TEAMS: usize = 2;

/// A validated number of teams for a given roster.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TeamCount(usize);

impl TeamCount {
    /// Validates `requested` against a roster of `roster_len` members.
    ///
    /// Accepts every value in `MIN_TEAMS..=roster_len`.
    pub fn new(requested: i64, roster_len: usize) -> Result<TeamCount, TeamCountError> {
        match usize::try_from(requested) {
            Ok(count) if (MIN_TEAMS..=roster_len).contains(&count) => Ok(TeamCount(count)),
            _ => Err(TeamCountError::InvalidTeamCount {
                requested,
                max: roster_len,
            }),
        }
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum TeamCountError {
    /// The number of teams is outside `MIN_TEAMS..=max` (see [`MIN_TEAMS`]).
    #[error("invalid number of teams: {requested} (expected {min}-{max})", min = MIN_TEAMS)]
    InvalidTeamCount { requested: i64, max: usize },
}

#[derive(Error, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum GenerateError {
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error(transparent)]
    TeamCount(#[from] TeamCountError),
}

/// The members of one team, in the order they were drawn.
pub type Team = Vec<String>;

/// A team together with its label.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamedTeam {
    /// Label of the team.
    pub name: String,
    /// Members of the team.
    pub members: Team,
}

impl NamedTeam {
    #[inline]
    pub fn new(name: impl Into<String>, members: impl IntoIterator<Item = impl Into<String>>) -> Self {
        NamedTeam {
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }
}

/// Places `members` into `count` teams round-robin: the member at position `i` goes to team `i % count`.
///
/// Team sizes differ by at most one, and the first `members.len() % count` teams are the larger ones.
pub fn distribute<T>(members: impl IntoIterator<Item = T>, count: TeamCount) -> Vec<Vec<T>> {
    let mut teams: Vec<Vec<T>> = repeat_with(Vec::new).take(count.get()).collect();
    let mut iter = teams.iter_mut();
    for member in members {
        match iter.next() {
            Some(team) => team.push(member),
            None => {
                iter = teams.iter_mut();
                if let Some(team) = iter.next() {
                    team.push(member);
                }
            }
        }
    }
    teams
}

/// Validates `requested_teams`, then shuffles `roster` and splits it into labeled teams.
///
/// Nothing is drawn from `rng` when the team count is rejected.
pub fn generate_teams<R: Rng + ?Sized>(
    roster: &Roster,
    requested_teams: i64,
    naming: TeamNaming,
    rng: &mut R,
) -> Result<Vec<NamedTeam>, GenerateError> {
    if roster.is_empty() {
        return Err(RosterError::EmptyRoster.into());
    }
    let count = TeamCount::new(requested_teams, roster.len())?;

    let members = shuffled(roster.members(), rng);
    let teams = distribute(members, count);
    let names = naming.labels(count.get(), rng);

    debug!(
        members = roster.len(),
        teams = count.get(),
        ?naming,
        "generated teams"
    );

    Ok(names
        .into_iter()
        .zip(teams)
        .map(|(name, members)| NamedTeam { name, members })
        .collect())
}

/// Team generation builder.
pub struct TeamGenerator {
    naming: TeamNaming,
    seeder: Option<Seeder>,
}

impl TeamGenerator {
    /// Creates a new `TeamGenerator` with sequential names and a random seed.
    #[inline]
    pub fn new() -> TeamGenerator {
        Self {
            naming: TeamNaming::default(),
            seeder: None,
        }
    }

    /// Sets how teams are labeled.
    #[inline]
    pub fn naming(mut self, naming: TeamNaming) -> Self {
        self.naming = naming;
        self
    }

    /// Makes the generation reproducible: the same seed and input give the same teams.
    #[inline]
    pub fn seed(mut self, seeder: Seeder) -> Self {
        self.seeder = Some(seeder);
        self
    }

    /// Parses `text` and generates `requested_teams` teams from it.
    pub fn generate(self, text: &str, requested_teams: i64) -> Result<Vec<NamedTeam>, GenerateError> {
        let roster = crate::roster::parse_roster(text)?;
        self.generate_from(&roster, requested_teams)
    }

    /// Generates `requested_teams` teams from an already parsed roster.
    pub fn generate_from(
        self,
        roster: &Roster,
        requested_teams: i64,
    ) -> Result<Vec<NamedTeam>, GenerateError> {
        let mut seeder = self.seeder.unwrap_or_else(gen_seeder);
        let mut rng: RandGen = seeder.make_rng();
        generate_teams(roster, requested_teams, self.naming, &mut rng)
    }
}

impl fmt::Debug for TeamGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TeamGenerator")
            .field("naming", &self.naming)
            .field("seeded", &self.seeder.is_some())
            .finish()
    }
}

impl Default for TeamGenerator {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
