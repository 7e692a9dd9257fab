//! Repository layer: domain structs over the SeaORM adapters.
//!
//! Functions here are generic over `ConnectionTrait` so they run equally
//! inside a transaction or on a plain connection, and they translate
//! `DbErr` into `DomainError`.

pub mod championships;
pub mod groups;
pub mod matches;
pub mod phases;
pub mod players;
pub mod registrations;
pub mod standings;
pub mod teams;
pub mod users;
