// src/infrastructure/mod.rs
//
// Infrastructure Layer
//
// Ambient collaborators of the registry: time, caller identity and
// identifier generation. Each sits behind a trait so tests can supply
// deterministic fakes.
//
// RULES:
// - Infrastructure serves the domain
// - Infrastructure never dictates domain behavior
// - Infrastructure is replaceable

pub mod clock;
pub mod id_generator;
pub mod identity;

pub use clock::{Clock, SystemClock};
pub use id_generator::{IdGenerator, UuidGenerator};
pub use identity::{IdentitySource, StaticIdentity};
