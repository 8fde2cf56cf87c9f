use serde_json::Value;
use tracing::{debug, trace};

use crate::evaluate::evaluate;
use crate::parse::{read_product, CatalogDocument};
use crate::{
    EvaluationContext, JdkItem, PackageCandidate, ProductEntry, Selection, SelectionReport,
    SkipReason, Tri,
};

/// Select one item per product of `document` for the given platform.
///
/// Items are returned in document order; see [`select_sorted`] for the
/// listing order.
#[must_use]
pub fn select(document: &CatalogDocument, ctx: &EvaluationContext) -> Vec<JdkItem> {
    select_report(document, ctx).into_items()
}

/// Like [`select`], sorted with [`JdkItem::listing_order`].
#[must_use]
pub fn select_sorted(document: &CatalogDocument, ctx: &EvaluationContext) -> Vec<JdkItem> {
    let mut items = select(document, ctx);
    items.sort_by(JdkItem::listing_order);
    items
}

/// Select every product, keeping the reason each dropped product was skipped.
pub fn select_report(document: &CatalogDocument, ctx: &EvaluationContext) -> SelectionReport {
    let mut report = SelectionReport::default();
    for (index, raw) in document.products().iter().enumerate() {
        let selection = select_product(raw, ctx);
        if let Selection::Skipped(reason) = &selection {
            let vendor = raw.get("vendor").and_then(|v| v.as_str()).unwrap_or("?");
            let version = raw.get("jdk_version").and_then(|v| v.as_str()).unwrap_or("?");
            debug!(
                index,
                vendor,
                version,
                %reason,
                "skipping JDK product"
            );
        }
        report.push(index, selection);
    }
    report
}

/// Decide the outcome for one raw element of the `jdks` array.
#[must_use]
pub fn select_product(raw: &Value, ctx: &EvaluationContext) -> Selection {
    let product = match read_product(raw) {
        Ok(product) => product,
        Err(reason) => return Selection::Skipped(reason),
    };
    select_entry(&product, ctx)
}

/// Decide the outcome for an already read product.
#[must_use]
pub fn select_entry(product: &ProductEntry, ctx: &EvaluationContext) -> Selection {
    let verdict = evaluate(product.filter.as_ref(), &ctx.build);
    if verdict != Tri::True {
        return Selection::Skipped(SkipReason::FilterNotTrue(verdict));
    }

    let Some(package) = pick_package(product, ctx) else {
        return Selection::Skipped(SkipReason::NoMatchingPackage);
    };

    // A missing `default` means "not the default", unlike a missing `filter`.
    let is_default_item = product
        .default
        .as_ref()
        .is_some_and(|node| node.evaluate(&ctx.build).is_true());

    Selection::Kept(JdkItem::new(product, package, is_default_item))
}

/// First package, in document order, that fits the platform.
fn pick_package<'a>(product: &'a ProductEntry, ctx: &EvaluationContext) -> Option<&'a PackageCandidate> {
    product.packages.iter().find(|package| {
        if package.os != ctx.os || package.arch != ctx.arch {
            return false;
        }
        let verdict = evaluate(package.filter.as_ref(), &ctx.build);
        if verdict != Tri::True {
            trace!(url = %package.url, %verdict, "package filter rejected");
            return false;
        }
        true
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{ArchTag, OsTag, PackageType};

    fn ctx(build: &str, os: OsTag) -> EvaluationContext {
        EvaluationContext::new(build.parse().unwrap(), os, ArchTag::X86_64)
    }

    fn package(os: &str, package_type: &str, url: &str) -> Value {
        json!({
            "os": os,
            "package_type": package_type,
            "url": url,
            "sha256": "beef",
            "archive_size": 10,
            "archive_file_name": "jdk.archive",
            "unpack_prefix_filter": "jdk",
            "unpacked_size": 20,
            "install_folder_name": "jdk"
        })
    }

    fn product(packages: Vec<Value>) -> Value {
        json!({
            "vendor": "Azul",
            "product": "Zulu",
            "jdk_version_major": 15,
            "jdk_version": "15.0.1",
            "suggested_sdk_name": "zulu-15",
            "packages": packages
        })
    }

    #[test]
    fn picks_first_matching_package() {
        let raw = product(vec![
            package("windows", "zip", "w"),
            package("linux", "targz", "l1"),
            package("linux", "zip", "l2"),
        ]);
        let item = select_product(&raw, &ctx("203", OsTag::Linux)).kept().unwrap();
        assert_eq!(item.url, "l1");
        assert_eq!(item.package_type, PackageType::TarGz);
        assert!(!item.is_default_item);
    }

    #[test]
    fn unknown_package_type_falls_through() {
        let raw = product(vec![
            package("linux", "rpm", "rpm"),
            package("linux", "zip", "zip"),
        ]);
        let item = select_product(&raw, &ctx("203", OsTag::Linux)).kept().unwrap();
        assert_eq!(item.url, "zip");
    }

    #[test]
    fn package_filter_applies() {
        let mut old = package("linux", "targz", "old");
        old["filter"] = json!({"type": "build_number_range", "until": "202"});
        let raw = product(vec![old, package("linux", "targz", "new")]);
        let item = select_product(&raw, &ctx("203", OsTag::Linux)).kept().unwrap();
        assert_eq!(item.url, "new");
    }

    #[test]
    fn arch_must_match() {
        let mut arm = package("macOS", "targz", "arm");
        arm["arch"] = json!("aarch64");
        let raw = product(vec![arm, package("macOS", "targz", "intel")]);
        let arm_ctx = EvaluationContext::new("203".parse().unwrap(), OsTag::MacOs, ArchTag::Aarch64);
        assert_eq!(select_product(&raw, &arm_ctx).kept().unwrap().url, "arm");
        assert_eq!(
            select_product(&raw, &ctx("203", OsTag::MacOs)).kept().unwrap().url,
            "intel"
        );
    }

    #[test]
    fn product_filter_unknown_skips() {
        let mut raw = product(vec![package("linux", "targz", "l")]);
        raw["filter"] = json!({"type": "build_number_range", "since": "bogus"});
        assert_eq!(
            select_product(&raw, &ctx("203", OsTag::Linux)),
            Selection::Skipped(SkipReason::FilterNotTrue(Tri::Unknown))
        );
    }

    #[test]
    fn default_flag_is_a_filter() {
        let mut raw = product(vec![package("linux", "targz", "l")]);
        raw["default"] = json!({"type": "build_number_range", "since": "203"});
        let item = select_product(&raw, &ctx("203.1", OsTag::Linux)).kept().unwrap();
        assert!(item.is_default_item);
        let item = select_product(&raw, &ctx("202", OsTag::Linux)).kept().unwrap();
        assert!(!item.is_default_item);
        raw["default"] = json!(true);
        let item = select_product(&raw, &ctx("1", OsTag::Linux)).kept().unwrap();
        assert!(item.is_default_item);
    }

    #[test]
    fn no_matching_package() {
        let raw = product(vec![package("windows", "zip", "w")]);
        assert_eq!(
            select_product(&raw, &ctx("203", OsTag::Linux)),
            Selection::Skipped(SkipReason::NoMatchingPackage)
        );
    }

    #[test]
    fn report_keeps_indices() {
        let doc = CatalogDocument::from_value(json!({
            "jdks": [
                "not an object",
                product(vec![package("linux", "targz", "l")]),
                product(vec![])
            ]
        }))
        .unwrap();
        let report = select_report(&doc, &ctx("203", OsTag::Linux));
        assert_eq!(report.items().len(), 1);
        assert_eq!(
            report.skipped(),
            &[
                (0, SkipReason::NotAnObject),
                (2, SkipReason::NoMatchingPackage)
            ]
        );
    }
}
