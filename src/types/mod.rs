mod build;
mod context;
mod filter;
mod item;
mod package;
mod product;
mod selection;
mod tri;
mod version;

pub use build::{BuildNumber, BuildNumberError};
pub use context::{ArchTag, EvaluationContext, OsTag};
pub use filter::{FilterNode, RangeBound};
pub use item::{JdkItem, JdkProduct};
pub use package::{PackageCandidate, PackageType};
pub use product::ProductEntry;
pub use selection::{Selection, SelectionReport, SkipReason};
pub use tri::Tri;
pub use version::compare_versions;
