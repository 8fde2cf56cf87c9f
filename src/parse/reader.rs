use serde_json::{Map, Value};
use tracing::trace;

use crate::{
    ArchTag, FilterNode, OsTag, PackageCandidate, PackageType, ProductEntry, RangeBound,
    SkipReason,
};

use super::error::ParseError;

/// A parsed feed: the raw elements of its `jdks` array.
///
/// Elements stay untyped until selection so that one malformed product
/// only drops itself.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogDocument {
    products: Vec<Value>,
}

impl CatalogDocument {
    /// Wrap an already parsed JSON tree.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if `root` is not an object with a `jdks` array.
    pub fn from_value(root: Value) -> Result<Self, ParseError> {
        let Value::Object(mut root) = root else {
            return Err(ParseError::NotAnObject);
        };
        match root.remove("jdks") {
            Some(Value::Array(products)) => Ok(Self { products }),
            Some(_) => Err(ParseError::ProductsNotArray),
            None => Err(ParseError::MissingProducts),
        }
    }

    #[must_use]
    pub fn products(&self) -> &[Value] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Parse raw (already decompressed) feed bytes.
///
/// # Errors
///
/// Returns [`ParseError`] if the bytes are not JSON or the document has no
/// `jdks` array.
pub fn parse_document(bytes: &[u8]) -> Result<CatalogDocument, ParseError> {
    let root: Value = serde_json::from_slice(bytes)?;
    CatalogDocument::from_value(root)
}

impl FilterNode {
    /// Read a filter from its JSON form. Never fails: shapes that are not
    /// understood become [`FilterNode::Unrecognized`].
    #[must_use]
    pub fn from_json(value: &Value) -> FilterNode {
        match value {
            Value::Bool(b) => FilterNode::Literal(*b),
            Value::Object(obj) => read_filter_object(obj),
            other => FilterNode::Unrecognized(other.to_string()),
        }
    }
}

fn read_filter_object(obj: &Map<String, Value>) -> FilterNode {
    let unrecognized = || FilterNode::Unrecognized(Value::Object(obj.clone()).to_string());

    match obj.get("type").and_then(Value::as_str) {
        Some("and" | "or") => {
            let Some(items) = obj.get("items").and_then(Value::as_array) else {
                return unrecognized();
            };
            let items = items.iter().map(FilterNode::from_json).collect();
            if obj.get("type").and_then(Value::as_str) == Some("and") {
                FilterNode::And(items)
            } else {
                FilterNode::Or(items)
            }
        }
        Some("not") => match obj.get("item") {
            Some(item) => !FilterNode::from_json(item),
            None => unrecognized(),
        },
        Some("build_number_range") => FilterNode::BuildRange {
            since: read_bound(obj.get("since")),
            until: read_bound(obj.get("until")),
        },
        _ => unrecognized(),
    }
}

fn read_bound(value: Option<&Value>) -> Option<RangeBound> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(RangeBound::parse(text)),
        other => Some(RangeBound::Malformed(other.to_string())),
    }
}

// -- Field access ---------------------------------------------------------------

fn optional_filter(obj: &Map<String, Value>, key: &str) -> Option<FilterNode> {
    obj.get(key)
        .filter(|v| !v.is_null())
        .map(FilterNode::from_json)
}

fn required_str(obj: &Map<String, Value>, key: &'static str) -> Result<String, SkipReason> {
    match obj.get(key) {
        None | Some(Value::Null) => Err(SkipReason::MissingField(key)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(SkipReason::InvalidField(key)),
    }
}

fn optional_str(obj: &Map<String, Value>, key: &'static str) -> Result<Option<String>, SkipReason> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(SkipReason::InvalidField(key)),
    }
}

fn required_u64(obj: &Map<String, Value>, key: &'static str) -> Result<u64, SkipReason> {
    match obj.get(key) {
        None | Some(Value::Null) => Err(SkipReason::MissingField(key)),
        Some(v) => v.as_u64().ok_or(SkipReason::InvalidField(key)),
    }
}

fn string_list(obj: &Map<String, Value>, key: &'static str) -> Result<Vec<String>, SkipReason> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(values)) => values
            .iter()
            .map(|v| {
                v.as_str()
                    .map(str::to_owned)
                    .ok_or(SkipReason::InvalidField(key))
            })
            .collect(),
        Some(_) => Err(SkipReason::InvalidField(key)),
    }
}

// -- Products and packages --------------------------------------------------------

/// Read one element of the `jdks` array.
///
/// Malformed packages are dropped from [`ProductEntry::packages`]; only a
/// problem with the product's own fields rejects the whole product.
///
/// # Errors
///
/// Returns the [`SkipReason`] for the first missing or invalid mandatory field.
pub fn read_product(value: &Value) -> Result<ProductEntry, SkipReason> {
    let obj = value.as_object().ok_or(SkipReason::NotAnObject)?;

    let vendor = required_str(obj, "vendor")?;
    let jdk_version_major = required_u64(obj, "jdk_version_major")?;
    let jdk_version_major =
        u32::try_from(jdk_version_major).map_err(|_| SkipReason::InvalidField("jdk_version_major"))?;
    let jdk_version = required_str(obj, "jdk_version")?;
    let suggested_sdk_name = required_str(obj, "suggested_sdk_name")?;

    let raw_packages = match obj.get("packages") {
        None | Some(Value::Null) => return Err(SkipReason::MissingField("packages")),
        Some(Value::Array(packages)) => packages,
        Some(_) => return Err(SkipReason::InvalidField("packages")),
    };

    let packages = raw_packages
        .iter()
        .enumerate()
        .filter_map(|(index, raw)| match read_package(raw) {
            Ok(package) => Some(package),
            Err(reason) => {
                trace!(vendor = %vendor, version = %jdk_version, index, %reason, "dropping package");
                None
            }
        })
        .collect();

    Ok(ProductEntry {
        product: optional_str(obj, "product")?,
        flavour: optional_str(obj, "flavour")?,
        default: optional_filter(obj, "default"),
        filter: optional_filter(obj, "filter"),
        jdk_version_major,
        jdk_version,
        jdk_vendor_version: optional_str(obj, "jdk_vendor_version")?,
        vendor_version: optional_str(obj, "vendor_version")?,
        suggested_sdk_name,
        shared_index_aliases: string_list(obj, "shared_index_aliases")?,
        packages,
        vendor,
    })
}

/// Read one element of a product's `packages` array.
///
/// A missing `arch` means `x86_64`, the only architecture early feeds carried.
///
/// # Errors
///
/// Returns the [`SkipReason`] for an unknown package type or the first
/// missing or invalid mandatory field.
pub fn read_package(value: &Value) -> Result<PackageCandidate, SkipReason> {
    let obj = value.as_object().ok_or(SkipReason::NotAnObject)?;

    let os = OsTag::from_tag(&required_str(obj, "os")?);
    let arch = optional_str(obj, "arch")?
        .map_or(ArchTag::X86_64, |tag| ArchTag::from_tag(&tag));
    let type_tag = required_str(obj, "package_type")?;
    let package_type =
        PackageType::from_tag(&type_tag).ok_or(SkipReason::UnknownPackageType(type_tag))?;

    Ok(PackageCandidate {
        os,
        arch,
        package_type,
        filter: optional_filter(obj, "filter"),
        url: required_str(obj, "url")?,
        sha256: required_str(obj, "sha256")?,
        archive_size: required_u64(obj, "archive_size")?,
        archive_file_name: required_str(obj, "archive_file_name")?,
        unpack_prefix_filter: optional_str(obj, "unpack_prefix_filter")?.unwrap_or_default(),
        unpacked_size: required_u64(obj, "unpacked_size")?,
        install_folder_name: required_str(obj, "install_folder_name")?,
        package_to_java_home_prefix: optional_str(obj, "package_to_java_home_prefix")?
            .unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::BuildNumber;

    fn package_json() -> Value {
        json!({
            "os": "linux",
            "package_type": "targz",
            "url": "https://example.com/jdk.tar.gz",
            "sha256": "abc",
            "archive_size": 100,
            "archive_file_name": "jdk.tar.gz",
            "unpack_prefix_filter": "jdk-11",
            "unpacked_size": 300,
            "install_folder_name": "jdk-11"
        })
    }

    #[test]
    fn document_requires_object() {
        assert!(matches!(parse_document(b"[]"), Err(ParseError::NotAnObject)));
    }

    #[test]
    fn document_requires_jdks() {
        assert!(matches!(
            parse_document(br#"{"other": []}"#),
            Err(ParseError::MissingProducts)
        ));
        assert!(matches!(
            parse_document(br#"{"jdks": {}}"#),
            Err(ParseError::ProductsNotArray)
        ));
    }

    #[test]
    fn document_invalid_json() {
        assert!(matches!(parse_document(b"{\"jdks\": ["), Err(ParseError::Json(_))));
    }

    #[test]
    fn document_keeps_raw_elements() {
        let doc = parse_document(br#"{"jdks": [1, {"vendor": "x"}]}"#).unwrap();
        assert_eq!(doc.len(), 2);
        assert!(!doc.is_empty());
    }

    #[test]
    fn filter_literals_and_combinators() {
        assert_eq!(FilterNode::from_json(&json!(true)), FilterNode::Literal(true));
        let node = FilterNode::from_json(&json!({
            "type": "and",
            "items": [false, {"type": "not", "item": true}]
        }));
        assert_eq!(
            node,
            FilterNode::And(vec![
                FilterNode::Literal(false),
                !FilterNode::Literal(true),
            ])
        );
        let node = FilterNode::from_json(&json!({"type": "or", "items": []}));
        assert_eq!(node, FilterNode::Or(vec![]));
    }

    #[test]
    fn filter_build_range() {
        let node = FilterNode::from_json(&json!({
            "type": "build_number_range",
            "since": "201.1",
            "until": null
        }));
        assert_eq!(
            node,
            FilterNode::BuildRange {
                since: Some(RangeBound::Parsed(BuildNumber::from_components(&[201, 1]))),
                until: None,
            }
        );
    }

    #[test]
    fn filter_bad_bounds_are_kept_malformed() {
        let node = FilterNode::from_json(&json!({
            "type": "build_number_range",
            "since": 201,
            "until": "abc"
        }));
        assert_eq!(
            node,
            FilterNode::BuildRange {
                since: Some(RangeBound::Malformed("201".to_owned())),
                until: Some(RangeBound::Malformed("abc".to_owned())),
            }
        );
    }

    #[test]
    fn filter_unrecognized_shapes() {
        for raw in [
            json!({"type": "xor", "items": []}),
            json!({"type": "and"}),
            json!({"type": "and", "items": true}),
            json!({"type": "not"}),
            json!({"items": []}),
            json!("true"),
            json!(1),
            json!([true]),
        ] {
            assert!(
                matches!(FilterNode::from_json(&raw), FilterNode::Unrecognized(_)),
                "for {raw}"
            );
        }
    }

    #[test]
    fn package_defaults() {
        let package = read_package(&package_json()).unwrap();
        assert_eq!(package.os, OsTag::Linux);
        assert_eq!(package.arch, ArchTag::X86_64);
        assert_eq!(package.package_type, PackageType::TarGz);
        assert_eq!(package.filter, None);
        assert_eq!(package.package_to_java_home_prefix, "");
    }

    #[test]
    fn package_unknown_type() {
        let mut raw = package_json();
        raw["package_type"] = json!("msi");
        assert_eq!(
            read_package(&raw),
            Err(SkipReason::UnknownPackageType("msi".to_owned()))
        );
    }

    #[test]
    fn package_missing_and_invalid_fields() {
        let mut raw = package_json();
        raw.as_object_mut().unwrap().remove("sha256");
        assert_eq!(read_package(&raw), Err(SkipReason::MissingField("sha256")));

        let mut raw = package_json();
        raw["archive_size"] = json!("100");
        assert_eq!(read_package(&raw), Err(SkipReason::InvalidField("archive_size")));
    }

    #[test]
    fn product_drops_bad_packages_only() {
        let mut bad = package_json();
        bad["package_type"] = json!("pkg");
        let raw = json!({
            "vendor": "Amazon",
            "product": "Corretto",
            "jdk_version_major": 11,
            "jdk_version": "11.0.9",
            "suggested_sdk_name": "corretto-11",
            "shared_index_aliases": ["jdk-11"],
            "packages": [bad, package_json()]
        });
        let product = read_product(&raw).unwrap();
        assert_eq!(product.packages.len(), 1);
        assert_eq!(product.shared_index_aliases, vec!["jdk-11".to_owned()]);
        assert_eq!(product.label(), "Amazon Corretto 11.0.9");
    }

    #[test]
    fn product_missing_vendor() {
        let raw = json!({
            "jdk_version_major": 11,
            "jdk_version": "11.0.9",
            "suggested_sdk_name": "corretto-11",
            "packages": []
        });
        assert_eq!(read_product(&raw), Err(SkipReason::MissingField("vendor")));
        assert_eq!(read_product(&json!("x")), Err(SkipReason::NotAnObject));
    }
}
