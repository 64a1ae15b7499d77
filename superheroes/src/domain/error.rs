//! Failure taxonomy of the lookup use case.
//!
//! These errors are the recoverable outcomes a presentation layer renders.
//! Faults outside this set (a panicking repository, for instance) are not
//! represented here and surface on the calling task instead.

use crate::domain::superhero::SuperHeroName;

/// Reasons a hero lookup can fail.
///
/// Closed set of expected, recoverable outcomes. Marked non-exhaustive so
/// new reasons can be added without breaking adapters that render them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum HeroLoadError {
    /// The repository holds no hero with the requested name.
    #[error("no super hero named {name}")]
    NotFound {
        /// The name that missed.
        name: SuperHeroName,
    },
    /// The caller cancelled the lookup before the outcome was delivered.
    #[error("super hero lookup cancelled")]
    Cancelled,
}
