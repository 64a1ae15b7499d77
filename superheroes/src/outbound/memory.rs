//! In-memory superhero repository adapter.
//!
//! The kata's catalogue is a handful of records, so storage is a plain
//! insertion-ordered `Vec` scanned linearly. The hero name is the unique key.

use tracing::debug;

use crate::domain::ports::{HeroNotFound, SuperHeroRepository};
use crate::domain::{SuperHero, SuperHeroName};

/// Insertion-ordered in-memory catalogue.
#[derive(Debug, Default, Clone)]
pub struct InMemorySuperHeroRepository {
    heroes: Vec<SuperHero>,
}

impl InMemorySuperHeroRepository {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalogue from the given heroes, keyed by name.
    pub fn with_heroes(heroes: impl IntoIterator<Item = SuperHero>) -> Self {
        let mut repository = Self::new();
        for hero in heroes {
            repository.insert(hero);
        }
        repository
    }

    /// Add a hero. An existing entry with the same name is replaced in
    /// place, keeping its position in the roster order.
    pub fn insert(&mut self, hero: SuperHero) {
        match self
            .heroes
            .iter_mut()
            .find(|existing| existing.name() == hero.name())
        {
            Some(existing) => *existing = hero,
            None => self.heroes.push(hero),
        }
    }

    /// Number of heroes in the catalogue.
    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    /// True when the catalogue holds no heroes.
    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }
}

impl SuperHeroRepository for InMemorySuperHeroRepository {
    fn get_all(&self) -> Vec<SuperHero> {
        self.heroes.clone()
    }

    fn get_by_name(&self, name: &SuperHeroName) -> Result<SuperHero, HeroNotFound> {
        self.heroes
            .iter()
            .find(|hero| hero.name() == name)
            .cloned()
            .ok_or_else(|| {
                debug!(name = %name, "catalogue miss");
                HeroNotFound { name: name.clone() }
            })
    }
}
