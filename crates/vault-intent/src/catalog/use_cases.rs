//! Use-case profiles: preferred formats and usage guidance per intended use.

use serde::Serialize;

/// Format preferences and notes for one use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UseCaseProfile {
    /// Use-case name as emitted by the use-case extractor.
    pub name: &'static str,
    /// Preferred file formats, most preferred first.
    pub preferred_formats: &'static [&'static str],
    /// Guidance surfaced as usage notes on synthesized results.
    pub notes: &'static [&'static str],
    /// Section keys this use case usually draws from.
    pub sections: &'static [&'static str],
}

pub const USE_CASES: &[UseCaseProfile] = &[
    UseCaseProfile {
        name: "presentation",
        preferred_formats: &["PNG", "SVG"],
        notes: &["Transparent backgrounds ideal", "High resolution for projectors"],
        sections: &["logos", "product_photography", "digital_assets"],
    },
    UseCaseProfile {
        name: "web",
        preferred_formats: &["PNG", "WebP", "SVG"],
        notes: &["Optimized file sizes", "Responsive design ready"],
        sections: &["digital_assets", "product_photography", "logos"],
    },
    UseCaseProfile {
        name: "social",
        preferred_formats: &["PNG", "JPG", "MP4"],
        notes: &["Platform-specific dimensions", "Engaging compositions"],
        sections: &["social_media", "lifestyle_photography"],
    },
    UseCaseProfile {
        name: "retail",
        preferred_formats: &["PDF", "EPS", "PNG"],
        notes: &["High resolution for print", "CMYK color space"],
        sections: &["point_of_sale", "logos", "product_photography"],
    },
    UseCaseProfile {
        name: "amazon",
        preferred_formats: &["JPG", "PNG"],
        notes: &["Amazon-specific requirements", "A+ content optimized"],
        sections: &["digital_assets", "product_photography"],
    },
    UseCaseProfile {
        name: "print",
        preferred_formats: &["PDF", "EPS", "TIFF"],
        notes: &["Minimum 300 DPI for print", "CMYK color profiles print accurately"],
        sections: &["point_of_sale", "brand_guidelines", "logos"],
    },
    UseCaseProfile {
        name: "email",
        preferred_formats: &["PNG", "JPG"],
        notes: &["Email-safe formats with universal client support", "Keep file sizes under 1MB"],
        sections: &["digital_assets", "logos"],
    },
    UseCaseProfile {
        name: "video",
        preferred_formats: &["MP4", "MOV"],
        notes: &["Platform-ready encodes", "Thumbnails available separately"],
        sections: &["youtube_videos", "social_media"],
    },
];
