//! The 14 official Vault asset sections.
//!
//! Declaration order is load-bearing: the section extractor breaks score
//! ties by table position, and tests pin that ordering.

use serde::Serialize;

/// One asset section in the DAM, with the signals used to detect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetSection {
    /// Stable lookup key, e.g. "logos".
    pub key: &'static str,
    /// Display name as it appears in the Vault.
    pub name: &'static str,
    /// What the section holds.
    pub description: &'static str,
    /// Lowercase keyword substrings that indicate this section.
    pub keywords: &'static [&'static str],
    /// Deliverable types available within the section.
    pub deliverables: &'static [&'static str],
    /// Use-case names that align with this section (+3 score bonus).
    pub use_cases: &'static [&'static str],
}

/// The section table. The first seven entries carry the richest keyword
/// coverage; the remainder complete the official fourteen.
pub const SECTIONS: &[AssetSection] = &[
    AssetSection {
        key: "product_photography",
        name: "Product Photography",
        description: "Hero images for web product pages and detail pages",
        keywords: &["product photo", "hero image", "product shot", "product image"],
        deliverables: &["Low Res Product Photography", "Spare Parts Photography"],
        use_cases: &["web", "ecommerce", "product pages"],
    },
    AssetSection {
        key: "lifestyle_photography",
        name: "Lifestyle Photography",
        description: "Products in kitchen environment with food and coffee",
        keywords: &["lifestyle", "kitchen", "in use", "environment", "lifestyle photo"],
        deliverables: &["Lifestyle Photography"],
        use_cases: &["marketing", "social", "web", "advertising"],
    },
    AssetSection {
        key: "digital_assets",
        name: "Digital Assets (incl. Websites, Programmatic & EDM)",
        description: "Online assets including PDP, CLP, FLP, web banners, icons, 3D models",
        keywords: &["web banner", "icon", "3d model", "programmatic", "edm", "digital"],
        deliverables: &[
            "3D Model",
            "Amazon A+",
            "Amazon Infographics",
            "Colour Swatches",
            "EDM",
            "GIF",
            "Icon",
            "Key Visual",
            "PDP",
            "PLP",
            "Web Banners and Static Banners",
            "Website / App",
            "Programmatic Ads",
        ],
        use_cases: &["web", "digital", "online", "ecommerce"],
    },
    AssetSection {
        key: "social_media",
        name: "Social (incl. Videos, Statics, Stories & Keynotes)",
        description: "Social media assets for paid and organic content",
        keywords: &["social", "instagram", "facebook", "social media", "stories"],
        deliverables: &[
            "Instagram / Facebook - Campaign",
            "Instagram / Facebook - NPD",
            "Organic Social Assets",
            "Paid Social Assets",
            "Social Advertising",
            "Social Photography",
            "Social Video cutdowns",
        ],
        use_cases: &["social", "instagram", "facebook", "marketing"],
    },
    AssetSection {
        key: "point_of_sale",
        name: "Point of Sales (POS)",
        description: "In-store retail materials including banners, cards, displays",
        keywords: &["pos", "retail", "in-store", "banner", "display", "counter card"],
        deliverables: &[
            "T4 Horizontal",
            "T4 Vertical",
            "Hanging Banner",
            "Counter Card",
            "Banner POS",
            "Brochure",
            "Catalogue",
            "Display Fixture",
            "Posters",
        ],
        use_cases: &["retail", "in-store", "pos", "display"],
    },
    AssetSection {
        key: "youtube_videos",
        name: "YouTube Videos",
        description: "Video content including tutorials, demos, and promotional videos",
        keywords: &["video", "youtube", "tutorial", "demonstration", "how to"],
        deliverables: &[
            "Product Demonstration Video",
            "Tutorial/How to videos",
            "Care and Maintenance Video",
            "Training Video",
            "TVC",
            "Youtube Thumbnails",
        ],
        use_cases: &["youtube", "video", "training", "tutorial"],
    },
    AssetSection {
        key: "logos",
        name: "Logos",
        description: "Brand logos and partner logos",
        keywords: &["logo", "brand", "breville logo", "sage logo"],
        deliverables: &["Brands & Logos", "Partner Logos"],
        use_cases: &["branding", "presentations", "web", "print"],
    },
    AssetSection {
        key: "packaging",
        name: "Packaging",
        description: "Box images, packaging layouts, labels, and master cartons",
        keywords: &["packaging", "box", "label", "carton"],
        deliverables: &["Box Images", "Packaging Layouts", "Labels", "Master Carton"],
        use_cases: &["packaging", "retail launch"],
    },
    AssetSection {
        key: "toolkits",
        name: "Toolkits (incl. Sell-In, Retail Kits)",
        description: "Launch toolkits and retail presentation decks",
        keywords: &["toolkit", "sell-in", "retail kit", "launch kit"],
        deliverables: &["Launch Toolkits", "Retail Presentation Decks"],
        use_cases: &["sell-in", "retail kits"],
    },
    AssetSection {
        key: "instruction_booklets",
        name: "Instruction Booklets",
        description: "Quick start guides, safety guides, and manuals",
        keywords: &["instruction", "manual", "quick start", "safety guide", "booklet"],
        deliverables: &["Quick Start Guides", "Safety Guides", "Instruction Manuals"],
        use_cases: &["support", "manuals"],
    },
    AssetSection {
        key: "fact_sheets",
        name: "Fact Sheets",
        description: "Product specification sheets for retailers",
        keywords: &["fact sheet", "spec sheet", "specification", "specs"],
        deliverables: &["Product Specification Sheets"],
        use_cases: &["sell-in", "specifications"],
    },
    AssetSection {
        key: "recipes_food",
        name: "Recipes & Food",
        description: "Recipe photography, food videos, and recipe cards",
        keywords: &["recipe", "food", "cooking", "dish"],
        deliverables: &["Recipe Photography", "Food Videos", "Recipe Cards"],
        use_cases: &["content", "recipes"],
    },
    AssetSection {
        key: "brand_guidelines",
        name: "Brand Guidelines",
        description: "Brand style guides and presentation templates",
        keywords: &["guideline", "style guide", "brand guide", "template"],
        deliverables: &["Brand Style Guides", "Presentation Templates"],
        use_cases: &["branding", "presentations"],
    },
    AssetSection {
        key: "translation_working_files",
        name: "Working Files for Translation",
        description: "Multi-language asset sources",
        keywords: &["translation", "working file", "localisation", "localization"],
        deliverables: &["Translation Working Files"],
        use_cases: &["localisation"],
    },
];
