/// Classical properties a relation may have, as computed by
/// [Relation::classify](crate::relation::Relation::classify).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RelationFlags(u8);

impl RelationFlags {
    /// Every element of the base relates to itself.
    pub const REFLEXIVE: Self = Self(1 << 0);

    /// `(x, y)` implies `(y, x)`.
    pub const SYMMETRIC: Self = Self(1 << 1);

    /// `(x, y)` and `(y, z)` imply `(x, z)`.
    pub const TRANSITIVE: Self = Self(1 << 2);

    /// `(x, y)` and `(y, x)` imply `x == y`.
    pub const ANTISYMMETRIC: Self = Self(1 << 3);

    pub const EQUIVALENCE: Self = Self(Self::REFLEXIVE.0 | Self::SYMMETRIC.0 | Self::TRANSITIVE.0);
    pub const PARTIAL_ORDER: Self =
        Self(Self::REFLEXIVE.0 | Self::ANTISYMMETRIC.0 | Self::TRANSITIVE.0);

    #[inline]
    /// Returns an empty set of flags.
    pub const fn empty() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    #[inline]
    pub const fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    #[inline]
    pub const fn set(&mut self, other: Self, value: bool) {
        if value {
            self.insert(other);
        } else {
            self.remove(other);
        }
    }
}

impl std::ops::BitOr for RelationFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::fmt::Display for RelationFlags {
    /// Formats the flags in the fixed order reflexive, symmetric, transitive,
    /// antisymmetric, e.g. `true, false, true, true`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.contains(Self::REFLEXIVE),
            self.contains(Self::SYMMETRIC),
            self.contains(Self::TRANSITIVE),
            self.contains(Self::ANTISYMMETRIC)
        )
    }
}
