pub mod desc;
pub mod enumerate;
pub mod error;
pub mod flags;
pub mod powerset;
pub mod relation;

pub use desc::{BaseMode, RelationDesc, RelationKind};
pub use error::{PowersetError, PowersetResult, RelationError, RelationResult};
pub use flags::RelationFlags;
pub use relation::{Element, Pair, Relation};

#[cfg(test)]
mod tests;
