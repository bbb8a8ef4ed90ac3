//! Typed filter criteria for the public property search.
//!
//! Every enumeration here is a fixed allow-list. Parsing is deliberately
//! permissive: the literal `"all"` and any unrecognized value yield `None`,
//! meaning "no constraint on this dimension", never an error.

use serde::{Deserialize, Serialize};

macro_rules! filter_enum {
    ($name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Permissive parse: `"all"` or an unknown value means
            /// "omit this filter".
            pub fn parse(value: &str) -> Option<Self> {
                match value.trim().to_lowercase().as_str() {
                    $($text => Some(Self::$variant),)+
                    _ => None,
                }
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }
    };
}

filter_enum!(ListingStatus {
    Sale => "sale",
    Rent => "rent",
});

filter_enum!(Category {
    Residential => "residential",
    Commercial => "commercial",
});

filter_enum!(PropertyType {
    Apartment => "apartment",
    Villa => "villa",
    IndependentHouse => "independent-house",
    Plot => "plot",
    Office => "office",
    Shop => "shop",
});

filter_enum!(SubType {
    BuilderFloor => "builder-floor",
    Penthouse => "penthouse",
    Studio => "studio",
    Farmhouse => "farmhouse",
    Duplex => "duplex",
    Showroom => "showroom",
    Warehouse => "warehouse",
});

filter_enum!(FurnishedStatus {
    Furnished => "furnished",
    SemiFurnished => "semi-furnished",
    Unfurnished => "unfurnished",
});

filter_enum!(Parking {
    Covered => "covered",
    Open => "open",
    None => "none",
});

filter_enum!(Facing {
    North => "north",
    South => "south",
    East => "east",
    West => "west",
    NorthEast => "north-east",
    NorthWest => "north-west",
    SouthEast => "south-east",
    SouthWest => "south-west",
});

/// Search criteria for the public property listing. Absent fields never
/// narrow the result set; numeric bounds that are zero or negative are
/// ignored by the query layer.
#[derive(Debug, Clone, Default)]
pub struct PropertyFilters {
    pub status: Option<ListingStatus>,
    pub category: Option<Category>,
    pub property_type: Option<PropertyType>,
    pub sub_type: Option<SubType>,
    pub furnished_status: Option<FurnishedStatus>,
    pub parking: Option<Parking>,
    pub facing: Option<Facing>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub min_area: Option<i64>,
    pub max_area: Option<i64>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub search: Option<String>,
}

impl PropertyFilters {
    /// The trimmed search term, or `None` when the search is empty or
    /// whitespace only.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_values() {
        assert_eq!(ListingStatus::parse("sale"), Some(ListingStatus::Sale));
        assert_eq!(ListingStatus::parse("RENT"), Some(ListingStatus::Rent));
        assert_eq!(
            PropertyType::parse("independent-house"),
            Some(PropertyType::IndependentHouse)
        );
        assert_eq!(Facing::parse(" north-east "), Some(Facing::NorthEast));
    }

    #[test]
    fn parse_treats_all_and_unknown_as_no_constraint() {
        assert_eq!(ListingStatus::parse("all"), None);
        assert_eq!(ListingStatus::parse("lease"), None);
        assert_eq!(Category::parse(""), None);
        assert_eq!(SubType::parse("castle"), None);
        assert_eq!(Parking::parse("all"), None);
    }

    #[test]
    fn as_str_round_trips() {
        for facing in [
            Facing::North,
            Facing::SouthWest,
            Facing::NorthEast,
            Facing::West,
        ] {
            assert_eq!(Facing::parse(facing.as_str()), Some(facing));
        }
    }

    #[test]
    fn search_term_trims_and_drops_empty() {
        let mut filters = PropertyFilters::default();
        assert_eq!(filters.search_term(), None);

        filters.search = Some("   ".to_string());
        assert_eq!(filters.search_term(), None);

        filters.search = Some("  kailash ".to_string());
        assert_eq!(filters.search_term(), Some("kailash"));
    }
}
