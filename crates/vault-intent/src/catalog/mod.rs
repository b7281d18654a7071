//! Static knowledge base — product, section, region, and use-case tables.
//!
//! Loaded once at process start and passed by shared reference to every
//! resolver call. Lookups return `Option` rather than failing: a miss is a
//! normal "is this known?" answer, not an error. Table declaration order is
//! preserved everywhere because extractor tie-breaks depend on it.

pub mod products;
pub mod regions;
pub mod sections;
pub mod use_cases;

pub use products::{PRODUCTS, Product};
pub use regions::{REGIONS, RegionalBrand};
pub use sections::{AssetSection, SECTIONS};
pub use use_cases::{USE_CASES, UseCaseProfile};

/// Read-only handle over the static tables, injected into resolvers.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    products: &'static [Product],
    sections: &'static [AssetSection],
    regions: &'static [RegionalBrand],
    use_cases: &'static [UseCaseProfile],
}

impl Catalog {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self {
            products: PRODUCTS,
            sections: SECTIONS,
            regions: REGIONS,
            use_cases: USE_CASES,
        }
    }

    /// An empty catalog. Resolvers degrade to the minimal keyword-only
    /// fallback when handed one of these.
    pub fn empty() -> Self {
        Self {
            products: &[],
            sections: &[],
            regions: &[],
            use_cases: &[],
        }
    }

    /// True when no tables are loaded.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.sections.is_empty()
    }

    pub fn products(&self) -> &'static [Product] {
        self.products
    }

    pub fn sections(&self) -> &'static [AssetSection] {
        self.sections
    }

    pub fn regions(&self) -> &'static [RegionalBrand] {
        self.regions
    }

    pub fn use_cases(&self) -> &'static [UseCaseProfile] {
        self.use_cases
    }

    /// Look up a product by primary or Sage model code (case-insensitive).
    pub fn product_by_code(&self, code: &str) -> Option<&'static Product> {
        self.products.iter().find(|p| {
            p.model_code.eq_ignore_ascii_case(code)
                || p.sage_code.is_some_and(|sage| sage.eq_ignore_ascii_case(code))
        })
    }

    /// Look up a product by canonical name or declared alias.
    pub fn product_by_name(&self, name: &str) -> Option<&'static Product> {
        let lower = name.to_lowercase();
        self.products.iter().find(|p| {
            p.name.eq_ignore_ascii_case(name) || p.aliases.contains(&lower.as_str())
        })
    }

    /// Look up a section by its stable key.
    pub fn section_by_key(&self, key: &str) -> Option<&'static AssetSection> {
        self.sections.iter().find(|s| s.key == key)
    }

    /// Look up a section by display name (case-insensitive).
    pub fn section_by_name(&self, name: &str) -> Option<&'static AssetSection> {
        self.sections.iter().find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// Look up the brand/theater mapping for a region code (case-insensitive).
    pub fn region(&self, code: &str) -> Option<&'static RegionalBrand> {
        self.regions.iter().find(|r| r.region.eq_ignore_ascii_case(code))
    }

    /// Look up the profile for a use-case name.
    pub fn use_case(&self, name: &str) -> Option<&'static UseCaseProfile> {
        self.use_cases.iter().find(|u| u.name == name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_lookup_by_either_code() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.product_by_code("BES985").unwrap().name, "Oracle Jet");
        assert_eq!(catalog.product_by_code("ses985").unwrap().name, "Oracle Jet");
        assert!(catalog.product_by_code("BES000").is_none());
    }

    #[test]
    fn product_lookup_by_name_or_alias() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.product_by_name("oracle dual boiler").unwrap().model_code,
            "BES995"
        );
        assert_eq!(catalog.product_by_name("jet").unwrap().model_code, "BES985");
        assert!(catalog.product_by_name("toaster").is_none());
    }

    #[test]
    fn section_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.section_by_key("logos").unwrap().name, "Logos");
        assert_eq!(catalog.section_by_name("logos").unwrap().key, "logos");
        assert!(catalog.section_by_key("unknown").is_none());
    }

    #[test]
    fn region_lookup_is_case_insensitive() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.region("gb").unwrap().brand, "Sage");
        assert_eq!(catalog.region("AU").unwrap().theater, "APAC");
        assert!(catalog.region("JP").is_none());
    }

    #[test]
    fn use_case_lookup_misses_return_none() {
        let catalog = Catalog::builtin();
        assert!(catalog.use_case("presentation").is_some());
        assert!(catalog.use_case("general").is_none());
    }

    #[test]
    fn empty_catalog_reports_empty() {
        assert!(Catalog::empty().is_empty());
        assert!(!Catalog::builtin().is_empty());
        assert!(Catalog::empty().product_by_code("BES985").is_none());
    }

    #[test]
    fn product_regions_are_declared_region_codes() {
        let catalog = Catalog::builtin();
        for product in catalog.products() {
            for region in product.regions {
                assert!(
                    catalog.region(region).is_some(),
                    "{} ships to unmapped region {region}",
                    product.name
                );
            }
        }
    }

    #[test]
    fn use_case_profiles_reference_known_sections() {
        let catalog = Catalog::builtin();
        for profile in catalog.use_cases() {
            for key in profile.sections {
                assert!(
                    catalog.section_by_key(key).is_some(),
                    "{} profile references unknown section {key}",
                    profile.name
                );
            }
        }
    }
}
