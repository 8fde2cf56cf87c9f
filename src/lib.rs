//! Reader for JDK download feeds.
//!
//! A feed is a JSON document (usually xz- or gzip-compressed) listing JDK builds
//! per vendor and version. Each product and package may carry a filter that
//! gates it on the running product build; this crate evaluates those
//! filters and picks one package per product for the current platform.
//!
//! ```
//! use jdkfeed::{parse_document, select, ArchTag, EvaluationContext, OsTag};
//!
//! let doc = parse_document(br#"{"jdks": []}"#).unwrap();
//! let ctx = EvaluationContext::new("213.5744".parse().unwrap(), OsTag::Linux, ArchTag::X86_64);
//! assert!(select(&doc, &ctx).is_empty());
//! ```

mod config;
mod error;
mod evaluate;
pub mod feed;
pub mod parse;
mod select;
mod types;

pub use config::{ConfigError, FeedConfig, DEFAULT_FEED_URL};
pub use error::CatalogError;
pub use evaluate::evaluate;
pub use feed::load_catalog;
pub use parse::{parse_document, read_package, read_product, CatalogDocument, ParseError};
pub use select::{select, select_entry, select_product, select_report, select_sorted};
pub use types::{
    compare_versions, ArchTag, BuildNumber, BuildNumberError, EvaluationContext, FilterNode,
    JdkItem, JdkProduct, OsTag, PackageCandidate, PackageType, ProductEntry, RangeBound,
    Selection, SelectionReport, SkipReason, Tri,
};
