//! Domain ports for the hexagonal boundary.
//!
//! Driven side: [`SuperHeroRepository`], implemented by outbound adapters.
//! Driving side: the query traits presentation layers consume.

mod queries;
mod super_hero_repository;

pub use queries::{SuperHeroByNameQuery, SuperHeroRosterQuery};
#[cfg(test)]
pub use super_hero_repository::MockSuperHeroRepository;
pub use super_hero_repository::{FixtureSuperHeroRepository, HeroNotFound, SuperHeroRepository};
