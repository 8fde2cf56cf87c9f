use super::filter::FilterNode;
use super::package::PackageCandidate;

/// One vendor/version grouping from the feed's `jdks` array.
///
/// `packages` holds only the well-formed packages, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductEntry {
    pub vendor: String,
    pub product: Option<String>,
    pub flavour: Option<String>,
    /// Filter deciding whether this product is the suggested default.
    pub default: Option<FilterNode>,
    pub filter: Option<FilterNode>,
    pub jdk_version_major: u32,
    pub jdk_version: String,
    pub jdk_vendor_version: Option<String>,
    pub vendor_version: Option<String>,
    pub suggested_sdk_name: String,
    pub shared_index_aliases: Vec<String>,
    pub packages: Vec<PackageCandidate>,
}

impl ProductEntry {
    /// Short label for log output, e.g. `Amazon Corretto 11.0.9`.
    #[must_use]
    pub fn label(&self) -> String {
        let mut label = self.vendor.clone();
        for part in [&self.product, &self.flavour].into_iter().flatten() {
            label.push(' ');
            label.push_str(part);
        }
        label.push(' ');
        label.push_str(&self.jdk_version);
        label
    }
}
