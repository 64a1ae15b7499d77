//! Superhero catalogue core.
//!
//! Entities, a repository port, and asynchronous lookup use cases that run
//! blocking catalogue access off the calling task and deliver exactly one
//! outcome back on it. Presentation layers consume the driving ports in
//! [`domain::ports`]; data sources implement
//! [`domain::ports::SuperHeroRepository`].

pub mod domain;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
