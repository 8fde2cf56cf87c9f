use std::fmt;
use std::ops::Not;

/// Three-valued result of evaluating a filter.
///
/// `Unknown` marks a filter that could not be evaluated conclusively
/// (malformed bound, unrecognized node). Callers treat it as "exclude".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tri {
    True,
    False,
    Unknown,
}

impl Tri {
    #[must_use]
    pub fn is_true(self) -> bool {
        self == Tri::True
    }

    #[must_use]
    pub fn is_unknown(self) -> bool {
        self == Tri::Unknown
    }

    /// Kleene conjunction: `False` dominates `Unknown`.
    #[must_use]
    pub fn and(self, other: Tri) -> Tri {
        match (self, other) {
            (Tri::False, _) | (_, Tri::False) => Tri::False,
            (Tri::True, Tri::True) => Tri::True,
            _ => Tri::Unknown,
        }
    }

    /// Kleene disjunction: `True` dominates `Unknown`.
    #[must_use]
    pub fn or(self, other: Tri) -> Tri {
        match (self, other) {
            (Tri::True, _) | (_, Tri::True) => Tri::True,
            (Tri::False, Tri::False) => Tri::False,
            _ => Tri::Unknown,
        }
    }
}

impl Not for Tri {
    type Output = Tri;

    fn not(self) -> Tri {
        match self {
            Tri::True => Tri::False,
            Tri::False => Tri::True,
            Tri::Unknown => Tri::Unknown,
        }
    }
}

impl From<bool> for Tri {
    fn from(v: bool) -> Self {
        if v {
            Tri::True
        } else {
            Tri::False
        }
    }
}

impl fmt::Display for Tri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tri::True => f.write_str("true"),
            Tri::False => f.write_str("false"),
            Tri::Unknown => f.write_str("unknown"),
        }
    }
}
