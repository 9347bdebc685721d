#![forbid(unsafe_code)]

//! Splits a list of names into balanced teams.
//!
//! The core is [`roster::parse_roster`] → [`teams::TeamCount::new`] →
//! [`shuffle::shuffled`] → [`teams::distribute`] → [`names::TeamNaming::label`],
//! composed by [`teams::generate_teams`]. Rendering, clipboard access and the
//! persisted preference are collaborators reached through the traits in
//! [`render`], [`export`] and [`preferences`].

use rand::{thread_rng, Rng};

pub mod export;
pub mod names;
pub mod preferences;
pub mod render;
pub mod roster;
pub mod shuffle;
pub mod teams;

pub use rand_seeder::Seeder;

/// Random generator used for reproducible generations.
pub type RandGen = rand_pcg::Pcg64;

/// Generates a fresh random seed.
#[inline]
pub fn gen_seed() -> [u8; 32] {
    thread_rng().gen()
}

/// Creates a [`Seeder`] from a fresh random seed.
#[inline]
pub fn gen_seeder() -> Seeder {
    Seeder::from(gen_seed())
}
