use std::fmt;

use serde::{Deserialize, Serialize};

use super::build::BuildNumber;

/// Operating system tag as written in the feed (`linux`, `macOS`, `windows`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OsTag {
    Linux,
    MacOs,
    Windows,
    Other(String),
}

impl OsTag {
    /// Tag of the operating system this process runs on.
    #[must_use]
    pub fn current() -> Self {
        Self::from_tag(std::env::consts::OS)
    }

    /// Tags match case-insensitively. Unknown tags are kept lowercased in
    /// [`OsTag::Other`], so `"FreeBSD"` and `"freebsd"` compare equal.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.to_ascii_lowercase();
        match tag.as_str() {
            "linux" => OsTag::Linux,
            "macos" | "mac" | "darwin" => OsTag::MacOs,
            "windows" => OsTag::Windows,
            _ => OsTag::Other(tag),
        }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            OsTag::Linux => "linux",
            OsTag::MacOs => "macOS",
            OsTag::Windows => "windows",
            OsTag::Other(tag) => tag,
        }
    }
}

/// CPU architecture tag as written in the feed (`x86_64`, `aarch64`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ArchTag {
    X86_64,
    Aarch64,
    Other(String),
}

impl ArchTag {
    #[must_use]
    pub fn current() -> Self {
        Self::from_tag(std::env::consts::ARCH)
    }

    /// Same matching rules as [`OsTag::from_tag`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.to_ascii_lowercase();
        match tag.as_str() {
            "x86_64" | "amd64" | "x64" => ArchTag::X86_64,
            "aarch64" | "arm64" => ArchTag::Aarch64,
            _ => ArchTag::Other(tag),
        }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            ArchTag::X86_64 => "x86_64",
            ArchTag::Aarch64 => "aarch64",
            ArchTag::Other(tag) => tag,
        }
    }
}

impl From<String> for OsTag {
    fn from(v: String) -> Self {
        OsTag::from_tag(&v)
    }
}

impl From<OsTag> for String {
    fn from(v: OsTag) -> Self {
        v.tag().to_owned()
    }
}

impl From<String> for ArchTag {
    fn from(v: String) -> Self {
        ArchTag::from_tag(&v)
    }
}

impl From<ArchTag> for String {
    fn from(v: ArchTag) -> Self {
        v.tag().to_owned()
    }
}

impl fmt::Display for OsTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl fmt::Display for ArchTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Everything selection needs to know about the running platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationContext {
    pub build: BuildNumber,
    pub os: OsTag,
    pub arch: ArchTag,
}

impl EvaluationContext {
    #[must_use]
    pub fn new(build: BuildNumber, os: OsTag, arch: ArchTag) -> Self {
        Self { build, os, arch }
    }

    /// Context for `build` on the OS and architecture of this process.
    #[must_use]
    pub fn for_current_process(build: BuildNumber) -> Self {
        Self::new(build, OsTag::current(), ArchTag::current())
    }
}
