//! Hero lookup domain service.
//!
//! Implements the by-name driving port: the blocking repository call runs on
//! the runtime's blocking pool and the outcome is observed back on the
//! calling task, so the caller's context is never stalled and never crossed.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::domain::error::HeroLoadError;
use crate::domain::ports::{HeroNotFound, SuperHeroByNameQuery, SuperHeroRepository};
use crate::domain::superhero::{SuperHero, SuperHeroName};

/// Lookup service implementing [`SuperHeroByNameQuery`].
#[derive(Clone)]
pub struct SuperHeroLookupService<R> {
    repository: Arc<R>,
}

impl<R> SuperHeroLookupService<R> {
    /// Create a new service with the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SuperHeroByNameQuery for SuperHeroLookupService<R>
where
    R: SuperHeroRepository + 'static,
{
    async fn get(
        &self,
        name: &SuperHeroName,
        cancel: &CancellationToken,
    ) -> Result<SuperHero, HeroLoadError> {
        if cancel.is_cancelled() {
            return Err(HeroLoadError::Cancelled);
        }

        let repository = Arc::clone(&self.repository);
        let lookup = name.clone();
        let worker = tokio::task::spawn_blocking(move || repository.get_by_name(&lookup));

        let outcome = match worker.await {
            Ok(outcome) => outcome,
            // A panicking repository is a fault outside the load-error
            // taxonomy; resume it on the awaiting task.
            Err(join_error) => match join_error.try_into_panic() {
                Ok(payload) => std::panic::resume_unwind(payload),
                Err(_) => return Err(HeroLoadError::Cancelled),
            },
        };

        if cancel.is_cancelled() {
            debug!(name = %name, "lookup finished after cancellation, dropping outcome");
            return Err(HeroLoadError::Cancelled);
        }

        match outcome {
            Ok(hero) => {
                debug!(name = %name, avenger = hero.is_avenger(), "super hero loaded");
                Ok(hero)
            }
            Err(HeroNotFound { name }) => {
                debug!(name = %name, "super hero not found");
                Err(HeroLoadError::NotFound { name })
            }
        }
    }
}
