use rand::seq::SliceRandom;
use rand::Rng;

/// First word of a generated team name.
pub const ADJECTIVES: &[&str] = &[
    "Thunder", "Lightning", "Cosmic", "Stellar", "Quantum", "Mystic", "Phoenix",
    "Dragon", "Shadow", "Crystal", "Blazing", "Arctic", "Neon", "Cyber", "Titanium",
    "Golden", "Silver", "Emerald", "Sapphire", "Ruby", "Ninja", "Samurai", "Warrior",
    "Phantom", "Vortex", "Eclipse", "Nova", "Meteor", "Comet", "Nebula", "Galaxy",
    "Atomic", "Electric", "Magnetic", "Sonic", "Turbo", "Hyper", "Ultra", "Mega",
    "Alpha", "Omega", "Prime", "Elite", "Supreme", "Royal", "Imperial", "Legendary",
];

/// Second word of a generated team name.
pub const NOUNS: &[&str] = &[
    "Hawks", "Eagles", "Falcons", "Dragons", "Tigers", "Lions", "Panthers", "Wolves",
    "Bears", "Sharks", "Dolphins", "Phoenixes", "Griffins", "Unicorns", "Ninjas",
    "Warriors", "Knights", "Guardians", "Defenders", "Champions", "Titans", "Giants",
    "Spartans", "Vikings", "Pirates", "Rangers", "Hunters", "Strikers", "Blazers",
    "Rockets", "Comets", "Stars", "Meteors", "Thunders", "Storms", "Cyclones",
    "Hurricanes", "Tornadoes", "Avalanches", "Tsunamis", "Legends", "Heroes", "Mavericks",
    "Rebels", "Renegades", "Outlaws", "Bandits", "Crusaders", "Conquerors", "Emperors",
];

const _: () = {
    assert!(!ADJECTIVES.is_empty(), "ADJECTIVES is empty");
    assert!(!NOUNS.is_empty(), "NOUNS is empty");
};

/// Generates an "Adjective Noun" name. Every call is independent, so two teams may get the same name.
pub fn generate_team_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    // Both catalogs are non-empty (checked at compile time above)
    let adjective = ADJECTIVES.choose(rng).copied().unwrap_or_default();
    let noun = NOUNS.choose(rng).copied().unwrap_or_default();
    format!("{adjective} {noun}")
}

/// The label used for the team in slot `index` when names are not generated.
#[inline]
pub fn sequential_team_name(index: usize) -> String {
    format!("Team {}", index + 1)
}

/// How teams are labeled.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum TeamNaming {
    /// "Team 1", "Team 2", ...
    #[default]
    Sequential,
    /// A random "Adjective Noun" per team.
    Generated,
}

impl TeamNaming {
    /// Produces `count` labels in slot order.
    pub fn labels<R: Rng + ?Sized>(self, count: usize, rng: &mut R) -> Vec<String> {
        (0..count).map(|index| self.label(index, rng)).collect()
    }

    /// Produces the label of the team in slot `index`.
    #[inline]
    pub fn label<R: Rng + ?Sized>(self, index: usize, rng: &mut R) -> String {
        match self {
            TeamNaming::Sequential => sequential_team_name(index),
            TeamNaming::Generated => generate_team_name(rng),
        }
    }
}

impl From<bool> for TeamNaming {
    #[inline]
    fn from(team_names_enabled: bool) -> Self {
        if team_names_enabled {
            TeamNaming::Generated
        } else {
            TeamNaming::Sequential
        }
    }
}
