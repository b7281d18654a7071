//! Static product catalog — model codes, regional variants, and aliases.

use serde::Serialize;
use vault_protocol::ProductMatch;

/// A catalog product. Declaration order in [`PRODUCTS`] is the match
/// priority used by the product extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Primary (Breville-market) model code, e.g. "BES985".
    pub model_code: &'static str,
    /// Canonical display name.
    pub name: &'static str,
    /// Sage-market model code, where one exists.
    pub sage_code: Option<&'static str>,
    /// Top-level category.
    pub category: &'static str,
    /// Sub-category within the portfolio.
    pub sub_category: &'static str,
    /// Region codes the product ships in.
    pub regions: &'static [&'static str],
    /// Lowercase alias substrings recognized in request text.
    pub aliases: &'static [&'static str],
}

impl Product {
    /// Convert to the wire-level match representation.
    pub fn to_match(&self) -> ProductMatch {
        ProductMatch {
            name: self.name.to_string(),
            model_code: self.model_code.to_string(),
            sage_code: self.sage_code.map(str::to_string),
            category: Some(self.category.to_string()),
        }
    }
}

/// The product table. Append-only; extractors iterate in declaration order.
pub const PRODUCTS: &[Product] = &[
    Product {
        model_code: "BES985",
        name: "Oracle Jet",
        sage_code: Some("SES985"),
        category: "Coffee",
        sub_category: "Automatic Espresso Machines",
        regions: &["AU", "US", "CA", "GB", "DE"],
        aliases: &["oracle jet", "jet"],
    },
    Product {
        model_code: "BES995",
        name: "Oracle Dual Boiler",
        sage_code: Some("SES995"),
        category: "Coffee",
        sub_category: "Espresso Machines",
        regions: &["AU", "US", "CA", "GB", "DE"],
        aliases: &["oracle dual boiler", "dual boiler", "oracle dual"],
    },
    Product {
        model_code: "BES990",
        name: "Oracle Touch",
        sage_code: Some("SES990"),
        category: "Coffee",
        sub_category: "Automatic Espresso Machines",
        regions: &["AU", "US", "CA", "GB", "DE"],
        aliases: &["oracle touch", "touch"],
    },
];
