//! Driven port for superhero catalogue access.
//!
//! Adapters behind this port may block (network, disk, embedded store); the
//! domain services dispatch calls to a worker so latency-sensitive tasks are
//! never stalled. Implementations must be safe for concurrent reads.

use crate::domain::superhero::{SuperHero, SuperHeroName};

/// Raised by [`SuperHeroRepository::get_by_name`] when no hero matches.
///
/// Scoped strictly to the one expected miss condition. It is caught at the
/// use-case boundary and converted into the lookup taxonomy; adapters must
/// not use it for infrastructure faults.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no super hero named {name}")]
pub struct HeroNotFound {
    /// The name that missed.
    pub name: SuperHeroName,
}

/// Port over the hero catalogue.
#[cfg_attr(test, mockall::automock)]
pub trait SuperHeroRepository: Send + Sync {
    /// Every hero in the catalogue, in the adapter's stable order.
    fn get_all(&self) -> Vec<SuperHero>;

    /// Look up one hero by exact name.
    fn get_by_name(&self, name: &SuperHeroName) -> Result<SuperHero, HeroNotFound>;
}

/// Fixture implementation for tests that do not exercise the catalogue.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSuperHeroRepository;

impl SuperHeroRepository for FixtureSuperHeroRepository {
    fn get_all(&self) -> Vec<SuperHero> {
        Vec::new()
    }

    fn get_by_name(&self, name: &SuperHeroName) -> Result<SuperHero, HeroNotFound> {
        Err(HeroNotFound { name: name.clone() })
    }
}
