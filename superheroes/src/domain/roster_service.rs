//! Hero roster domain service.
//!
//! Backs the list screen: fetches the full catalogue with the same worker
//! dispatch discipline as the lookup service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{SuperHeroRepository, SuperHeroRosterQuery};
use crate::domain::superhero::SuperHero;

/// Roster service implementing [`SuperHeroRosterQuery`].
#[derive(Clone)]
pub struct SuperHeroRosterService<R> {
    repository: Arc<R>,
}

impl<R> SuperHeroRosterService<R> {
    /// Create a new service with the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SuperHeroRosterQuery for SuperHeroRosterService<R>
where
    R: SuperHeroRepository + 'static,
{
    async fn get_all(&self) -> Vec<SuperHero> {
        let repository = Arc::clone(&self.repository);
        let worker = tokio::task::spawn_blocking(move || repository.get_all());

        match worker.await {
            Ok(heroes) => {
                debug!(count = heroes.len(), "roster loaded");
                heroes
            }
            Err(join_error) => match join_error.try_into_panic() {
                Ok(payload) => std::panic::resume_unwind(payload),
                Err(_) => {
                    // Runtime shutdown aborted the worker before it started.
                    warn!("roster fetch aborted, returning empty roster");
                    Vec::new()
                }
            },
        }
    }
}
