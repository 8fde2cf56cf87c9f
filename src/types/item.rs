use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use super::context::{ArchTag, OsTag};
use super::package::{PackageCandidate, PackageType};
use super::product::ProductEntry;
use super::version::compare_versions;

/// Vendor identity of a JDK item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct JdkProduct {
    pub vendor: String,
    pub product: Option<String>,
    pub flavour: Option<String>,
}

impl JdkProduct {
    /// `Vendor Product (flavour)`, skipping missing parts.
    #[must_use]
    pub fn package_presentation_text(&self) -> String {
        let mut text = self.vendor.clone();
        if let Some(product) = &self.product {
            text.push(' ');
            text.push_str(product);
        }
        if let Some(flavour) = &self.flavour {
            text.push_str(" (");
            text.push_str(flavour);
            text.push(')');
        }
        text
    }
}

/// A product from the feed together with the package selected for the
/// running platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JdkItem {
    pub product: JdkProduct,
    pub is_default_item: bool,
    pub jdk_major_version: u32,
    pub jdk_version: String,
    pub jdk_vendor_version: Option<String>,
    pub vendor_version: Option<String>,
    pub suggested_sdk_name: String,
    pub os: OsTag,
    pub arch: ArchTag,
    pub package_type: PackageType,
    pub url: String,
    pub sha256: String,
    pub archive_size: u64,
    pub archive_file_name: String,
    pub unpack_prefix_filter: String,
    pub unpacked_size: u64,
    pub install_folder_name: String,
    pub package_to_java_home_prefix: String,
    pub shared_index_aliases: Vec<String>,
}

impl JdkItem {
    pub(crate) fn new(product: &ProductEntry, package: &PackageCandidate, is_default_item: bool) -> Self {
        Self {
            product: JdkProduct {
                vendor: product.vendor.clone(),
                product: product.product.clone(),
                flavour: product.flavour.clone(),
            },
            is_default_item,
            jdk_major_version: product.jdk_version_major,
            jdk_version: product.jdk_version.clone(),
            jdk_vendor_version: product.jdk_vendor_version.clone(),
            vendor_version: product.vendor_version.clone(),
            suggested_sdk_name: product.suggested_sdk_name.clone(),
            os: package.os.clone(),
            arch: package.arch.clone(),
            package_type: package.package_type,
            url: package.url.clone(),
            sha256: package.sha256.clone(),
            archive_size: package.archive_size,
            archive_file_name: package.archive_file_name.clone(),
            unpack_prefix_filter: package.unpack_prefix_filter.clone(),
            unpacked_size: package.unpacked_size,
            install_folder_name: package.install_folder_name.clone(),
            package_to_java_home_prefix: package.package_to_java_home_prefix.clone(),
            shared_index_aliases: product.shared_index_aliases.clone(),
        }
    }

    /// Version without the `+build` suffix.
    #[must_use]
    pub fn version_core(&self) -> &str {
        self.jdk_version
            .split_once('+')
            .map_or(self.jdk_version.as_str(), |(core, _)| core)
    }

    /// The `+build` suffix of the version, if any.
    #[must_use]
    pub fn build_metadata(&self) -> Option<&str> {
        self.jdk_version.split_once('+').map(|(_, meta)| meta)
    }

    /// Version shown to users: the vendor version when the feed has one.
    #[must_use]
    pub fn version_string(&self) -> &str {
        self.jdk_vendor_version.as_deref().unwrap_or(&self.jdk_version)
    }

    #[must_use]
    pub fn full_presentation_text(&self) -> String {
        format!(
            "{} {}",
            self.product.package_presentation_text(),
            self.version_string()
        )
    }

    #[must_use]
    pub fn versionless_presentation_text(&self) -> String {
        self.product.package_presentation_text()
    }

    /// Order in which items are listed to users.
    ///
    /// Major version descending, then version descending, then vendor
    /// version ascending, then build metadata ascending. Product identity
    /// and package coordinates break the remaining ties.
    #[must_use]
    pub fn listing_order(&self, other: &Self) -> Ordering {
        other
            .jdk_major_version
            .cmp(&self.jdk_major_version)
            .then_with(|| compare_versions(other.version_core(), self.version_core()))
            .then_with(|| compare_optional(self.vendor_version.as_deref(), other.vendor_version.as_deref()))
            .then_with(|| compare_optional(self.build_metadata(), other.build_metadata()))
            .then_with(|| self.product.cmp(&other.product))
            .then_with(|| self.arch.tag().cmp(other.arch.tag()))
            .then_with(|| self.package_type.cmp(&other.package_type))
            .then_with(|| self.url.cmp(&other.url))
    }
}

fn compare_optional(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare_versions(a, b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl fmt::Display for JdkItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}/{} {}]",
            self.full_presentation_text(),
            self.os,
            self.arch,
            self.package_type
        )
    }
}
