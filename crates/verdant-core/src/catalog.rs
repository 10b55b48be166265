//! Plant catalog shown on the page.
//!
//! Plant cards are loaded from an embedded JSON document. Each card carries
//! the two facet values the filter works on (type and difficulty). Care
//! guide topics and seasonal tips are static page copy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{VerdantError, VerdantResult};

const EMBEDDED_PLANTS: &str = include_str!("../assets/plants.json");

/// Plant type facet
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlantType {
    Foliage,
    Succulent,
    Flowering,
    Herb,
}

impl PlantType {
    pub const ALL: [PlantType; 4] = [
        PlantType::Foliage,
        PlantType::Succulent,
        PlantType::Flowering,
        PlantType::Herb,
    ];

    /// Value written to `data-type` and accepted by the facet buttons
    pub fn as_str(&self) -> &'static str {
        match self {
            PlantType::Foliage => "foliage",
            PlantType::Succulent => "succulent",
            PlantType::Flowering => "flowering",
            PlantType::Herb => "herb",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            PlantType::Foliage => "Foliage",
            PlantType::Succulent => "Succulents",
            PlantType::Flowering => "Flowering",
            PlantType::Herb => "Herbs",
        }
    }
}

impl FromStr for PlantType {
    type Err = VerdantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlantType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| VerdantError::UnknownFacet {
                group: "type",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for PlantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Care difficulty facet
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Easy,
    Moderate,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Moderate, Difficulty::Expert];

    /// Value written to `data-difficulty` and accepted by the facet buttons
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Moderate => "moderate",
            Difficulty::Expert => "expert",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Expert => "Expert",
        }
    }
}

impl FromStr for Difficulty {
    type Err = VerdantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| VerdantError::UnknownFacet {
                group: "difficulty",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A plant card in the catalog grid
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Plant {
    pub id: String,
    pub name: String,
    /// Latin name, shown in italics under the title
    pub botanical: String,
    pub blurb: String,
    #[serde(rename = "type")]
    pub plant_type: PlantType,
    pub difficulty: Difficulty,
    pub light: String,
    pub water: String,
}

/// All plant cards, in display order
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub plants: Vec<Plant>,
}

impl Catalog {
    /// Parse a catalog document.
    ///
    /// Card ids must be unique; the filter and the reveal trigger key on them.
    pub fn from_json(json: &str) -> VerdantResult<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;

        let mut seen = std::collections::HashSet::new();
        for plant in &catalog.plants {
            if !seen.insert(plant.id.as_str()) {
                return Err(VerdantError::Catalog(format!(
                    "duplicate plant id: {}",
                    plant.id
                )));
            }
        }

        Ok(catalog)
    }

    /// The catalog bundled with the site
    pub fn embedded() -> VerdantResult<Self> {
        Self::from_json(EMBEDDED_PLANTS)
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == id)
    }
}

/// One panel of the care-guide accordion
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CareTopic {
    pub title: &'static str,
    pub body: &'static str,
}

pub const CARE_GUIDE: [CareTopic; 4] = [
    CareTopic {
        title: "How often should I water?",
        body: "Water when the top two centimetres of soil are dry. Most houseplants \
               are lost to overwatering, not thirst, so check before you pour.",
    },
    CareTopic {
        title: "What does bright, indirect light mean?",
        body: "A spot near a window where the plant sees the sky but not the sun's \
               direct rays. A sheer curtain turns direct light into indirect light.",
    },
    CareTopic {
        title: "When should I repot?",
        body: "Repot in spring when roots circle the pot or poke out of the drainage \
               hole. Go up one pot size at a time.",
    },
    CareTopic {
        title: "Do I need fertilizer?",
        body: "Feed at half strength every four weeks during the growing season and \
               stop in winter while growth slows.",
    },
];

/// A seasonal care card
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SeasonTip {
    pub season: &'static str,
    pub tip: &'static str,
}

pub const SEASONS: [SeasonTip; 4] = [
    SeasonTip {
        season: "Spring",
        tip: "Resume feeding, repot root-bound plants, and take cuttings.",
    },
    SeasonTip {
        season: "Summer",
        tip: "Water more often and move sun-lovers outdoors after the last frost.",
    },
    SeasonTip {
        season: "Autumn",
        tip: "Bring plants inside before nights drop below 10°C and cut back feeding.",
    },
    SeasonTip {
        season: "Winter",
        tip: "Water sparingly, keep away from radiators, and wipe dust off leaves.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = Catalog::embedded().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.get("snake-plant").is_some());
    }

    #[test]
    fn embedded_catalog_covers_every_facet_value() {
        let catalog = Catalog::embedded().unwrap();
        for t in PlantType::ALL {
            assert!(catalog.plants.iter().any(|p| p.plant_type == t), "no {t} plant");
        }
        for d in Difficulty::ALL {
            assert!(catalog.plants.iter().any(|p| p.difficulty == d), "no {d} plant");
        }
    }

    #[test]
    fn facet_values_parse_from_attributes() {
        assert_eq!("succulent".parse::<PlantType>().unwrap(), PlantType::Succulent);
        assert_eq!("expert".parse::<Difficulty>().unwrap(), Difficulty::Expert);
        assert!("Succulent".parse::<PlantType>().is_err());
        assert!("all".parse::<Difficulty>().is_err());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"{"plants": [
            {"id": "a", "name": "A", "botanical": "", "blurb": "", "type": "herb",
             "difficulty": "easy", "light": "", "water": ""},
            {"id": "a", "name": "B", "botanical": "", "blurb": "", "type": "herb",
             "difficulty": "easy", "light": "", "water": ""}
        ]}"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, VerdantError::Catalog(_)));
    }

    #[test]
    fn unknown_facet_in_json_is_a_parse_error() {
        let json = r#"{"plants": [
            {"id": "a", "name": "A", "botanical": "", "blurb": "", "type": "tree",
             "difficulty": "easy", "light": "", "water": ""}
        ]}"#;
        assert!(matches!(Catalog::from_json(json), Err(VerdantError::Json(_))));
    }
}
