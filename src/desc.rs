use crate::relation::{Element, Relation};
use std::rc::Rc;

/// Pairs a relation starts out with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelationKind {
    /// No pairs.
    #[default]
    Empty,
    /// Every element relates to itself only.
    Identity,
    /// Every element relates to every element.
    Full,
}

/// Whether the declared base set constrains [Relation::add].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseMode {
    /// Elements outside the base are accepted.
    #[default]
    Advisory,
    /// Adding a pair with an element outside the base fails.
    Strict,
}

/// Describes how to build a [Relation].
///
/// ```
/// use relations::desc::{BaseMode, RelationDesc, RelationKind};
///
/// let mut rel = RelationDesc::new()
///     .kind(RelationKind::Identity)
///     .base_mode(BaseMode::Strict)
///     .build(['a', 'b']);
///
/// assert!(rel.contains(&'a', &'a'));
/// assert!(rel.add('a', 'z').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RelationDesc {
    kind: RelationKind,
    base_mode: BaseMode,
}

impl RelationDesc {
    pub const fn new() -> Self {
        Self {
            kind: RelationKind::Empty,
            base_mode: BaseMode::Advisory,
        }
    }

    #[inline]
    pub const fn kind(mut self, kind: RelationKind) -> Self {
        self.kind = kind;
        self
    }

    #[inline]
    pub const fn base_mode(mut self, base_mode: BaseMode) -> Self {
        self.base_mode = base_mode;
        self
    }

    #[inline]
    pub const fn strict(self) -> Self {
        self.base_mode(BaseMode::Strict)
    }

    pub fn get_kind(&self) -> RelationKind {
        self.kind
    }

    pub fn get_base_mode(&self) -> BaseMode {
        self.base_mode
    }

    pub fn build<E: Element>(self, base: impl IntoIterator<Item = E>) -> Relation<E> {
        Relation::from_desc(self, Rc::new(base.into_iter().collect()))
    }
}
