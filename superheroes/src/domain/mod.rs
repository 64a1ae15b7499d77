//! Domain entities, errors, ports, and services.
//!
//! Purpose: define the immutable superhero model and the lookup use cases
//! over the repository port. Types are immutable after construction;
//! serialisation contracts (serde) are documented on each type.
//!
//! Public surface:
//! - `SuperHero` / `SuperHeroName` — catalogue entity and its validated id.
//! - `HeroLoadError` — closed failure taxonomy of the lookup use case.
//! - `SuperHeroLookupService` / `SuperHeroRosterService` — services
//!   implementing the driving ports in [`ports`].

pub mod error;
pub mod ports;
pub mod superhero;

mod lookup_service;
mod roster_service;

#[cfg(test)]
mod lookup_service_tests;

pub use self::error::HeroLoadError;
pub use self::lookup_service::SuperHeroLookupService;
pub use self::roster_service::SuperHeroRosterService;
pub use self::superhero::{SuperHero, SuperHeroName, SuperHeroNameError};
