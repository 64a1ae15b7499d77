//! Test utilities for the superheroes crate.
//!
//! Shared helpers for both unit tests (in `src/`) and integration tests (in
//! `tests/`, via the `test-support` feature).

use std::sync::Mutex;
use std::thread::ThreadId;

use crate::domain::ports::{HeroNotFound, SuperHeroRepository};
use crate::domain::{SuperHero, SuperHeroName};
use crate::outbound::InMemorySuperHeroRepository;

/// Build a valid name, panicking on fixture mistakes.
pub fn hero_name(name: &str) -> SuperHeroName {
    SuperHeroName::new(name)
        .unwrap_or_else(|error| panic!("invalid fixture name {name:?}: {error}"))
}

/// Small catalogue mirroring the kata's sample data.
pub fn sample_roster() -> Vec<SuperHero> {
    vec![
        SuperHero::new(
            hero_name("Iron Man"),
            "https://img.example/iron-man.jpg",
            true,
            "Genius engineer in powered armour.",
        ),
        SuperHero::new(
            hero_name("Thor"),
            "https://img.example/thor.jpg",
            true,
            "God of thunder, wielder of Mjolnir.",
        ),
        SuperHero::new(
            hero_name("Scarlet Witch"),
            "https://img.example/scarlet-witch.jpg",
            true,
            "Reality manipulation and hex bolts.",
        ),
        SuperHero::new(
            hero_name("Wolverine"),
            "https://img.example/wolverine.jpg",
            false,
            "Adamantium claws and a healing factor.",
        ),
    ]
}

/// In-memory repository seeded with [`sample_roster`].
pub fn sample_repository() -> InMemorySuperHeroRepository {
    InMemorySuperHeroRepository::with_heroes(sample_roster())
}

/// Repository wrapper recording the thread each port call runs on.
///
/// Used to assert that services dispatch catalogue access to a worker thread
/// rather than running it on the calling one.
#[derive(Debug, Default)]
pub struct RecordingSuperHeroRepository<R> {
    inner: R,
    lookup_threads: Mutex<Vec<ThreadId>>,
    roster_threads: Mutex<Vec<ThreadId>>,
}

impl<R> RecordingSuperHeroRepository<R> {
    /// Wrap an inner repository.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            lookup_threads: Mutex::new(Vec::new()),
            roster_threads: Mutex::new(Vec::new()),
        }
    }

    /// Threads observed by `get_by_name`, in call order.
    pub fn lookup_threads(&self) -> Vec<ThreadId> {
        self.lookup_threads
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Threads observed by `get_all`, in call order.
    pub fn roster_threads(&self) -> Vec<ThreadId> {
        self.roster_threads
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl<R: SuperHeroRepository> SuperHeroRepository for RecordingSuperHeroRepository<R> {
    fn get_all(&self) -> Vec<SuperHero> {
        self.roster_threads
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(std::thread::current().id());
        self.inner.get_all()
    }

    fn get_by_name(&self, name: &SuperHeroName) -> Result<SuperHero, HeroNotFound> {
        self.lookup_threads
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(std::thread::current().id());
        self.inner.get_by_name(name)
    }
}
