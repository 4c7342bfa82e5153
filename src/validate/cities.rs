//! Reference cities used for proximity checks

/// A major city with a known center
#[derive(Debug, Clone, Copy)]
pub struct ReferenceCity {
    /// Display name
    pub name: &'static str,
    /// Hyphenated ASCII key, e.g. "ha-noi"
    pub key: &'static str,
    /// Extra spellings operators commonly type
    pub aliases: &'static [&'static str],
    pub lat: f64,
    pub lng: f64,
    /// Allowed distance from the center, in degrees
    pub tolerance_degrees: f64,
}

pub const REFERENCE_CITIES: [ReferenceCity; 5] = [
    ReferenceCity {
        name: "Hồ Chí Minh",
        key: "ho-chi-minh",
        aliases: &["sài gòn", "hcm"],
        lat: 10.8231,
        lng: 106.6297,
        tolerance_degrees: 0.5,
    },
    ReferenceCity {
        name: "Hà Nội",
        key: "ha-noi",
        aliases: &[],
        lat: 21.0285,
        lng: 105.8542,
        tolerance_degrees: 0.5,
    },
    ReferenceCity {
        name: "Đà Nẵng",
        key: "da-nang",
        aliases: &[],
        lat: 16.0544,
        lng: 108.2022,
        tolerance_degrees: 0.3,
    },
    ReferenceCity {
        name: "Cần Thơ",
        key: "can-tho",
        aliases: &[],
        lat: 10.0452,
        lng: 105.7469,
        tolerance_degrees: 0.3,
    },
    ReferenceCity {
        name: "Hải Phòng",
        key: "hai-phong",
        aliases: &[],
        lat: 20.8449,
        lng: 106.6881,
        tolerance_degrees: 0.3,
    },
];

impl ReferenceCity {
    /// Whether already-lowercased address text names this city
    ///
    /// Matches the display name, the key with hyphens removed or turned into
    /// spaces, and any alias.
    pub fn is_mentioned_in(&self, address_lower: &str) -> bool {
        address_lower.contains(&self.name.to_lowercase())
            || address_lower.contains(&self.key.replace('-', ""))
            || address_lower.contains(&self.key.replace('-', " "))
            || self.aliases.iter().any(|alias| address_lower.contains(alias))
    }
}
