//! Driving ports consumed by the presentation layer.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::error::HeroLoadError;
use crate::domain::superhero::{SuperHero, SuperHeroName};

/// Single-hero lookup.
#[async_trait]
pub trait SuperHeroByNameQuery: Send + Sync {
    /// Resolve one hero by name, off the caller's task.
    ///
    /// Exactly one outcome per call: `Ok` with the hero, or `Err` with a
    /// [`HeroLoadError`]. The token is consulted before dispatch and again
    /// before delivery, so a caller torn down mid-lookup never receives a
    /// stale hero; a cancelled call reports [`HeroLoadError::Cancelled`].
    /// No ordering is guaranteed between concurrent calls.
    async fn get(
        &self,
        name: &SuperHeroName,
        cancel: &CancellationToken,
    ) -> Result<SuperHero, HeroLoadError>;
}

/// Full-roster fetch backing the list screen.
#[async_trait]
pub trait SuperHeroRosterQuery: Send + Sync {
    /// Every hero in the catalogue, in repository order.
    async fn get_all(&self) -> Vec<SuperHero>;
}
