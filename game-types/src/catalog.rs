use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One row of a catalog list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EntitySummary {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl BaseStats {
    pub fn total(&self) -> u32 {
        self.hp + self.attack + self.defense + self.special_attack + self.special_defense + self.speed
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpriteUrls {
    pub front_default: Option<String>,
    pub official_artwork: Option<String>,
}

/// A creature as returned by the catalog, still keyed by its English slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EntityRecord {
    pub id: u32,
    pub name: String,
    /// Type keys ordered by slot.
    pub types: Vec<String>,
    pub base_stats: BaseStats,
    pub sprites: SpriteUrls,
    pub species_name: String,
}

impl EntityRecord {
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LocalizedName {
    pub language: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpeciesRecord {
    pub id: u32,
    pub name: String,
    pub generation: Option<u32>,
    pub evolution_chain_id: Option<u32>,
    pub evolves_from: Option<String>,
    pub names: Vec<LocalizedName>,
}

/// Attacking types by their effect on a defending type, as catalog keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DamageRelations {
    pub double_damage_from: Vec<String>,
    pub half_damage_from: Vec<String>,
    pub no_damage_from: Vec<String>,
}

impl SpeciesRecord {
    pub fn name_in(&self, language: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|n| n.language == language)
            .map(|n| n.name.as_str())
    }
}

/// One node of an evolution tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvolutionNode {
    pub name: String,
    pub id: Option<u32>,
    pub children: Vec<EvolutionNode>,
}

impl EvolutionNode {
    /// Names in breadth-first order, root first.
    pub fn names(&self) -> Vec<String> {
        let mut names = Vec::new();
        let mut queue = std::collections::VecDeque::from([self]);
        while let Some(node) = queue.pop_front() {
            names.push(node.name.clone());
            queue.extend(node.children.iter());
        }
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name == name || self.children.iter().any(|child| child.contains(name))
    }
}
