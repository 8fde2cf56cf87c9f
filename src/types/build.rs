use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A product build number such as `203.5981.155` or `IU-213.SNAPSHOT`.
///
/// Ordering and equality only look at the numeric components; the optional
/// product code prefix is kept for display. `SNAPSHOT` and `*` components
/// sort above every concrete number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BuildNumber {
    product_code: Option<String>,
    components: Vec<u32>,
}

impl BuildNumber {
    /// Value stored for `SNAPSHOT` / `*` components.
    pub const SNAPSHOT: u32 = u32::MAX;

    /// Build a number from raw components, without a product code.
    ///
    /// # Panics
    ///
    /// Panics if `components` is empty.
    #[must_use]
    pub fn from_components(components: &[u32]) -> Self {
        assert!(!components.is_empty(), "build number needs at least one component");
        Self {
            product_code: None,
            components: components.to_vec(),
        }
    }

    #[must_use]
    pub fn product_code(&self) -> Option<&str> {
        self.product_code.as_deref()
    }

    #[must_use]
    pub fn components(&self) -> &[u32] {
        &self.components
    }

    #[must_use]
    pub fn baseline(&self) -> u32 {
        self.components[0]
    }

    #[must_use]
    pub fn is_snapshot(&self) -> bool {
        self.components.contains(&Self::SNAPSHOT)
    }
}

impl FromStr for BuildNumber {
    type Err = BuildNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (product_code, components) = crate::parse::parse_build_number(s)?;
        Ok(Self {
            product_code,
            components,
        })
    }
}

impl TryFrom<String> for BuildNumber {
    type Error = BuildNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BuildNumber> for String {
    fn from(value: BuildNumber) -> Self {
        value.to_string()
    }
}

impl PartialEq for BuildNumber {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl Eq for BuildNumber {}

impl Hash for BuildNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.components.hash(state);
    }
}

impl Ord for BuildNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lexicographic: an equal shorter prefix sorts first (203 < 203.1).
        self.components.cmp(&other.components)
    }
}

impl PartialOrd for BuildNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BuildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(code) = &self.product_code {
            write!(f, "{code}-")?;
        }
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            if *component == Self::SNAPSHOT {
                f.write_str("SNAPSHOT")?;
            } else {
                write!(f, "{component}")?;
            }
        }
        Ok(())
    }
}

/// Error returned when a build number string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildNumberError {
    input: String,
    message: String,
}

impl BuildNumberError {
    pub(crate) fn new(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for BuildNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid build number '{}': {}", self.input, self.message)
    }
}

impl std::error::Error for BuildNumberError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn bn(s: &str) -> BuildNumber {
        s.parse().unwrap()
    }

    #[test]
    fn parse_plain() {
        let b = bn("203.5981.155");
        assert_eq!(b.components(), &[203, 5981, 155]);
        assert_eq!(b.product_code(), None);
        assert_eq!(b.baseline(), 203);
    }

    #[test]
    fn parse_with_product_code() {
        let b = bn("IU-203.5981");
        assert_eq!(b.product_code(), Some("IU"));
        assert_eq!(b.components(), &[203, 5981]);
        assert_eq!(b.to_string(), "IU-203.5981");
    }

    #[test]
    fn parse_snapshot() {
        let b = bn("213.SNAPSHOT");
        assert!(b.is_snapshot());
        assert_eq!(b.to_string(), "213.SNAPSHOT");
        assert_eq!(bn("213.*"), b);
    }

    #[test]
    fn product_code_ignored_by_equality() {
        assert_eq!(bn("IC-203.1"), bn("203.1"));
    }

    #[test]
    fn ordering() {
        assert!(bn("100") < bn("150"));
        assert!(bn("203") < bn("203.1"));
        assert!(bn("203.9") < bn("203.10"));
        assert!(bn("203.5981") < bn("203.SNAPSHOT"));
        assert!(bn("212.9999") < bn("213"));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(bn("  201.1 "), bn("201.1"));
    }

    #[test]
    fn rejects_malformed() {
        for input in ["", "abc", "203.", ".203", "203..1", "203.x", "IU-", "-1", "99999999999"] {
            let err = input.parse::<BuildNumber>().unwrap_err();
            assert_eq!(err.input(), input, "for {input:?}");
        }
    }

    #[test]
    fn error_display() {
        let err = BuildNumberError::new("x.1", "expected a number");
        assert_eq!(err.to_string(), "invalid build number 'x.1': expected a number");
    }

    #[test]
    fn serde_as_string() {
        let b: BuildNumber = serde_json::from_str("\"IU-211.7142\"").unwrap();
        assert_eq!(b.components(), &[211, 7142]);
        assert_eq!(serde_json::to_string(&b).unwrap(), "\"IU-211.7142\"");
        assert!(serde_json::from_str::<BuildNumber>("\"nope\"").is_err());
    }
}
