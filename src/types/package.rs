use std::fmt;

use serde::{Deserialize, Serialize};

use super::context::{ArchTag, OsTag};
use super::filter::FilterNode;

/// Archive format of a downloadable package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PackageType {
    #[serde(rename = "zip")]
    Zip,
    #[serde(rename = "targz")]
    TarGz,
}

impl PackageType {
    /// Returns `None` for tags this crate cannot unpack.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "zip" => Some(PackageType::Zip),
            "targz" => Some(PackageType::TarGz),
            _ => None,
        }
    }

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            PackageType::Zip => "zip",
            PackageType::TarGz => "targz",
        }
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One downloadable archive of a product, as read from the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageCandidate {
    pub os: OsTag,
    pub arch: ArchTag,
    pub package_type: PackageType,
    pub filter: Option<FilterNode>,
    pub url: String,
    pub sha256: String,
    pub archive_size: u64,
    pub archive_file_name: String,
    /// Prefix of archive entries to keep when unpacking.
    pub unpack_prefix_filter: String,
    pub unpacked_size: u64,
    pub install_folder_name: String,
    /// Path from the unpacked root to the JDK home (e.g. `Contents/Home` on macOS).
    pub package_to_java_home_prefix: String,
}
