use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Resource categories a directory entry (and an AI recommendation) can carry.
///
/// "Biking Trail" shows up as an option in older admin forms but is not part
/// of this set, so it is neither storable nor extractable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceCategory {
    #[serde(rename = "Bike/Walk Trail")]
    BikeWalkTrail,
    #[serde(rename = "Public Transportation")]
    PublicTransportation,
    #[serde(rename = "Clothes Market")]
    ClothesMarket,
    #[serde(rename = "Grocery Store")]
    GroceryStore,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 4] = [
        ResourceCategory::BikeWalkTrail,
        ResourceCategory::PublicTransportation,
        ResourceCategory::ClothesMarket,
        ResourceCategory::GroceryStore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceCategory::BikeWalkTrail => "Bike/Walk Trail",
            ResourceCategory::PublicTransportation => "Public Transportation",
            ResourceCategory::ClothesMarket => "Clothes Market",
            ResourceCategory::GroceryStore => "Grocery Store",
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.as_str()).collect()
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown resource category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for ResourceCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
