mod error;
mod grammar;
mod reader;

pub use error::ParseError;
pub use reader::{parse_document, read_package, read_product, CatalogDocument};

use crate::BuildNumberError;

/// Parse a build number string into its product code and components.
pub(crate) fn parse_build_number(input: &str) -> Result<(Option<String>, Vec<u32>), BuildNumberError> {
    use winnow::Parser;
    grammar::build_number
        .parse(input.trim())
        .map_err(|e| BuildNumberError::new(input, e.to_string()))
}
