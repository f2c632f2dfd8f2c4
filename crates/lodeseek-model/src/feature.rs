//! Feature kinds: the ores and structures the engine can search for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Multiplier applied to a structure's enum index to form its seed salt.
/// Keeps structure salts far away from ore salts and the biome salt.
pub const STRUCTURE_SALT_MULTIPLIER: i64 = 1_000_000;

/// Which dimension a feature occurs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dimension {
    Overworld,
    Nether,
    End,
}

/// Broad category of a feature: block-granular ore or chunk-granular structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureKind {
    Ore,
    Structure,
}

/// Everything the engine can search for. Declaration order is the tie-break
/// order for equally probable candidates, so new variants go at the end of
/// their group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureType {
    // Ores.
    Diamond,
    Gold,
    Iron,
    Coal,
    Redstone,
    Lapis,
    Netherite,
    // Structures.
    Village,
    Stronghold,
    EndCity,
    NetherFortress,
    Bastion,
    AncientCity,
    OceanMonument,
    WoodlandMansion,
    PillagerOutpost,
    RuinedPortal,
    Shipwreck,
    BuriedTreasure,
    DesertTemple,
    JungleTemple,
    WitchHut,
}

impl FeatureType {
    /// All feature types in declaration (tie-break) order.
    pub const ALL: [FeatureType; 22] = [
        FeatureType::Diamond,
        FeatureType::Gold,
        FeatureType::Iron,
        FeatureType::Coal,
        FeatureType::Redstone,
        FeatureType::Lapis,
        FeatureType::Netherite,
        FeatureType::Village,
        FeatureType::Stronghold,
        FeatureType::EndCity,
        FeatureType::NetherFortress,
        FeatureType::Bastion,
        FeatureType::AncientCity,
        FeatureType::OceanMonument,
        FeatureType::WoodlandMansion,
        FeatureType::PillagerOutpost,
        FeatureType::RuinedPortal,
        FeatureType::Shipwreck,
        FeatureType::BuriedTreasure,
        FeatureType::DesertTemple,
        FeatureType::JungleTemple,
        FeatureType::WitchHut,
    ];

    /// Stable position in [`Self::ALL`]; used as the final ordering tie-break.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn kind(self) -> FeatureKind {
        if self.index() < 7 {
            FeatureKind::Ore
        } else {
            FeatureKind::Structure
        }
    }

    pub fn dimension(self) -> Dimension {
        match self {
            FeatureType::Netherite
            | FeatureType::NetherFortress
            | FeatureType::Bastion => Dimension::Nether,
            FeatureType::EndCity => Dimension::End,
            _ => Dimension::Overworld,
        }
    }

    /// Seed salt for this feature kind. Ore salts are small constants;
    /// structure salts are the enum index scaled by
    /// [`STRUCTURE_SALT_MULTIPLIER`]. Stable across releases: saved results
    /// depend on them.
    pub fn salt(self) -> i64 {
        match self.kind() {
            FeatureKind::Ore => self.index() as i64 + 1,
            FeatureKind::Structure => self.index() as i64 * STRUCTURE_SALT_MULTIPLIER,
        }
    }

    /// The JSON wire name, e.g. `netherFortress`.
    pub fn wire_name(self) -> &'static str {
        match self {
            FeatureType::Diamond => "diamond",
            FeatureType::Gold => "gold",
            FeatureType::Iron => "iron",
            FeatureType::Coal => "coal",
            FeatureType::Redstone => "redstone",
            FeatureType::Lapis => "lapis",
            FeatureType::Netherite => "netherite",
            FeatureType::Village => "village",
            FeatureType::Stronghold => "stronghold",
            FeatureType::EndCity => "endCity",
            FeatureType::NetherFortress => "netherFortress",
            FeatureType::Bastion => "bastion",
            FeatureType::AncientCity => "ancientCity",
            FeatureType::OceanMonument => "oceanMonument",
            FeatureType::WoodlandMansion => "woodlandMansion",
            FeatureType::PillagerOutpost => "pillagerOutpost",
            FeatureType::RuinedPortal => "ruinedPortal",
            FeatureType::Shipwreck => "shipwreck",
            FeatureType::BuriedTreasure => "buriedTreasure",
            FeatureType::DesertTemple => "desertTemple",
            FeatureType::JungleTemple => "jungleTemple",
            FeatureType::WitchHut => "witchHut",
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Error for unrecognized feature names on the CLI surface.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown feature type: {0:?}")]
pub struct UnknownFeature(pub String);

impl FromStr for FeatureType {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|feature| feature.wire_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFeature(s.to_string()))
    }
}
