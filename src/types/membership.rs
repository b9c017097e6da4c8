/// Result of testing a point against a circle
///
/// Mirrors the three-valued logic of SQL: a function embedded in a query
/// cannot fail a row, so invalid input degrades to `Undefined` (`NULL`)
/// instead of raising an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Membership {
    /// The point lies strictly inside the circle
    Inside,
    /// The point lies outside the circle or exactly on its boundary
    Outside,
    /// At least one input was missing or out of range
    Undefined,
}

impl Membership {
    /// Convert to the SQL integer convention (`1`, `0` or `NULL`)
    pub fn to_sql(self) -> Option<i64> {
        match self {
            Membership::Inside => Some(1),
            Membership::Outside => Some(0),
            Membership::Undefined => None,
        }
    }

    pub fn is_inside(self) -> bool {
        self == Membership::Inside
    }

    pub fn is_undefined(self) -> bool {
        self == Membership::Undefined
    }
}

impl From<bool> for Membership {
    fn from(inside: bool) -> Self {
        if inside {
            Membership::Inside
        } else {
            Membership::Outside
        }
    }
}

impl From<Membership> for Option<i64> {
    fn from(membership: Membership) -> Self {
        membership.to_sql()
    }
}
