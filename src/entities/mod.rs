// Entity Models
//
// Each entity has:
// - Immutable name + left/right neighborhood text (EntityBase)
// - A type label supplied by its concrete kind
// - Structural equality/hash shared across kinds

pub mod entity;
pub mod kind;
pub mod person;
pub mod company;
pub mod position;
pub mod pronoun;

pub use entity::{Entity, EntityBase};
pub use kind::EntityKind;
pub use person::Person;
pub use company::Company;
pub use position::Position;
pub use pronoun::Pronoun;
