use std::fmt;

use super::item::JdkItem;
use super::tri::Tri;

/// Why a product or package was left out of the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NotAnObject,
    MissingField(&'static str),
    InvalidField(&'static str),
    UnknownPackageType(String),
    FilterNotTrue(Tri),
    NoMatchingPackage,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotAnObject => write!(f, "entry is not an object"),
            SkipReason::MissingField(name) => write!(f, "missing field '{name}'"),
            SkipReason::InvalidField(name) => write!(f, "invalid value for field '{name}'"),
            SkipReason::UnknownPackageType(tag) => write!(f, "unknown package type '{tag}'"),
            SkipReason::FilterNotTrue(tri) => write!(f, "filter evaluated to {tri}"),
            SkipReason::NoMatchingPackage => write!(f, "no package matches this platform"),
        }
    }
}

/// Outcome of selecting a single product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Kept(JdkItem),
    Skipped(SkipReason),
}

impl Selection {
    #[must_use]
    pub fn kept(self) -> Option<JdkItem> {
        match self {
            Selection::Kept(item) => Some(item),
            Selection::Skipped(_) => None,
        }
    }
}

/// Result of selecting every product in a document.
///
/// `skipped` pairs each dropped product's position in the `jdks` array with
/// the reason it was dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct SelectionReport {
    items: Vec<JdkItem>,
    skipped: Vec<(usize, SkipReason)>,
}

impl SelectionReport {
    pub(crate) fn push(&mut self, index: usize, selection: Selection) {
        match selection {
            Selection::Kept(item) => self.items.push(item),
            Selection::Skipped(reason) => self.skipped.push((index, reason)),
        }
    }

    /// Kept items, in document order.
    #[must_use]
    pub fn items(&self) -> &[JdkItem] {
        &self.items
    }

    #[must_use]
    pub fn skipped(&self) -> &[(usize, SkipReason)] {
        &self.skipped
    }

    #[must_use]
    pub fn into_items(self) -> Vec<JdkItem> {
        self.items
    }
}

impl fmt::Display for SelectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "kept: {}, skipped: {}", self.items.len(), self.skipped.len())
    }
}
