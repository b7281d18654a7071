//! Region-to-brand mapping.
//!
//! Every region code maps to exactly one brand and one theater.

use serde::Serialize;

/// Brand and theater for one region code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionalBrand {
    pub region: &'static str,
    /// Consumer brand in that market ("Breville" or "Sage").
    pub brand: &'static str,
    /// Regional theater for compliance ("APAC", "USCM", "EMEA").
    pub theater: &'static str,
}

/// The regional mapping table. GB and UK are distinct keys on purpose —
/// callers supply either.
pub const REGIONS: &[RegionalBrand] = &[
    RegionalBrand { region: "AU", brand: "Breville", theater: "APAC" },
    RegionalBrand { region: "US", brand: "Breville", theater: "USCM" },
    RegionalBrand { region: "CA", brand: "Breville", theater: "USCM" },
    RegionalBrand { region: "GB", brand: "Sage", theater: "EMEA" },
    RegionalBrand { region: "UK", brand: "Sage", theater: "EMEA" },
    RegionalBrand { region: "DE", brand: "Sage", theater: "EMEA" },
    RegionalBrand { region: "EU", brand: "Sage", theater: "EMEA" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_codes_are_unique() {
        let mut codes: Vec<&str> = REGIONS.iter().map(|r| r.region).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), REGIONS.len());
    }

    #[test]
    fn emea_regions_are_sage() {
        for region in REGIONS {
            match region.theater {
                "EMEA" => assert_eq!(region.brand, "Sage"),
                "APAC" | "USCM" => assert_eq!(region.brand, "Breville"),
                other => panic!("unexpected theater {other}"),
            }
        }
    }
}
