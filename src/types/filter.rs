use std::fmt;
use std::ops::Not;

use super::build::BuildNumber;
use super::tri::Tri;

/// One side of a `build_number_range` node.
///
/// Unparsable bounds are kept as text so that evaluation, not reading,
/// decides what they mean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeBound {
    Parsed(BuildNumber),
    Malformed(String),
}

impl RangeBound {
    /// Parse a bound; never fails.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        match text.parse() {
            Ok(build) => RangeBound::Parsed(build),
            Err(_) => RangeBound::Malformed(text.to_owned()),
        }
    }
}

impl From<BuildNumber> for RangeBound {
    fn from(v: BuildNumber) -> Self {
        RangeBound::Parsed(v)
    }
}

impl From<&str> for RangeBound {
    fn from(v: &str) -> Self {
        RangeBound::parse(v)
    }
}

/// Filter tree attached to products and packages in the feed.
///
/// Read from JSON with [`FilterNode::from_json`]; shapes the reader does not
/// understand become [`FilterNode::Unrecognized`] and evaluate to
/// [`Tri::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterNode {
    Literal(bool),
    And(Vec<FilterNode>),
    Or(Vec<FilterNode>),
    Not(Box<FilterNode>),
    BuildRange {
        since: Option<RangeBound>,
        until: Option<RangeBound>,
    },
    Unrecognized(String),
}

impl FilterNode {
    #[must_use]
    pub fn and(items: impl IntoIterator<Item = FilterNode>) -> FilterNode {
        FilterNode::And(items.into_iter().collect())
    }

    #[must_use]
    pub fn or(items: impl IntoIterator<Item = FilterNode>) -> FilterNode {
        FilterNode::Or(items.into_iter().collect())
    }

    #[must_use]
    pub fn build_range(
        since: Option<impl Into<RangeBound>>,
        until: Option<impl Into<RangeBound>>,
    ) -> FilterNode {
        FilterNode::BuildRange {
            since: since.map(Into::into),
            until: until.map(Into::into),
        }
    }

    /// Evaluate this node against the running build.
    #[must_use]
    pub fn evaluate(&self, build: &BuildNumber) -> Tri {
        crate::evaluate::evaluate(Some(self), build)
    }
}

impl Not for FilterNode {
    type Output = FilterNode;

    fn not(self) -> FilterNode {
        FilterNode::Not(Box::new(self))
    }
}

impl fmt::Display for RangeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeBound::Parsed(b) => write!(f, "{b}"),
            RangeBound::Malformed(text) => write!(f, "<malformed {text:?}>"),
        }
    }
}

impl fmt::Display for FilterNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(f: &mut fmt::Formatter<'_>, items: &[FilterNode], sep: &str) -> fmt::Result {
            f.write_str("(")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(f, " {sep} ")?;
                }
                write!(f, "{item}")?;
            }
            f.write_str(")")
        }

        match self {
            FilterNode::Literal(v) => write!(f, "{v}"),
            FilterNode::And(items) => join(f, items, "AND"),
            FilterNode::Or(items) => join(f, items, "OR"),
            FilterNode::Not(inner) => write!(f, "(NOT {inner})"),
            FilterNode::BuildRange { since, until } => {
                f.write_str("build in [")?;
                match since {
                    Some(b) => write!(f, "{b}")?,
                    None => f.write_str("*")?,
                }
                f.write_str(", ")?;
                match until {
                    Some(b) => write!(f, "{b}")?,
                    None => f.write_str("*")?,
                }
                f.write_str("]")
            }
            FilterNode::Unrecognized(raw) => write!(f, "<unrecognized {raw}>"),
        }
    }
}
