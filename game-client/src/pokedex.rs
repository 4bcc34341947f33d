//! Catalog browsing: display entries and list filters.

use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use ts_rs::TS;

use game_types::{
    BaseStats, DamageRelations, EntityRecord, EntitySummary, EvolutionNode, SpeciesRecord,
};

use crate::catalog::{Catalog, CatalogError};
use crate::pokeapi::{artwork_url, image_url, sprite_url};
use crate::translation::{TYPE_NAMES, Translator};

/// Entries fetched concurrently while loading the full list.
pub const LOAD_BATCH_SIZE: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PokedexEntry {
    pub id: u32,
    pub name: String,
    pub slug: String,
    /// French type names, primary first.
    pub types: Vec<String>,
    pub generation: u32,
    pub image_url: String,
    pub sprite_url: String,
    pub base_stats: BaseStats,
    /// Names of the whole evolution family, root first.
    pub evolution_line: Vec<String>,
    pub pre_evolution: Option<String>,
    /// Weaknesses and resistances of the primary type.
    pub resistances: Vec<TypeResistance>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum DamageRelation {
    Weak,
    Resistant,
    Immune,
    Normal,
}

impl DamageRelation {
    pub fn multiplier(self) -> f64 {
        match self {
            DamageRelation::Weak => 2.0,
            DamageRelation::Resistant => 0.5,
            DamageRelation::Immune => 0.0,
            DamageRelation::Normal => 1.0,
        }
    }
}

/// How one attacking type fares against an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TypeResistance {
    /// French type name.
    pub type_name: String,
    pub relation: DamageRelation,
}

/// One row per known type: weaknesses, then resistances, then immunities,
/// then every remaining type at normal damage.
pub fn resistances(
    relations: &DamageRelations,
    translator: &dyn Translator,
) -> Vec<TypeResistance> {
    let mut covered: Vec<&str> = Vec::new();
    let mut rows = Vec::new();

    let groups = [
        (&relations.double_damage_from, DamageRelation::Weak),
        (&relations.half_damage_from, DamageRelation::Resistant),
        (&relations.no_damage_from, DamageRelation::Immune),
    ];
    for (keys, relation) in groups {
        for key in keys {
            if covered.contains(&key.as_str()) {
                continue;
            }
            covered.push(key.as_str());
            rows.push(TypeResistance {
                type_name: translator.type_name(key),
                relation,
            });
        }
    }

    for (key, _) in TYPE_NAMES.iter().filter(|(key, _)| !covered.contains(key)) {
        rows.push(TypeResistance {
            type_name: translator.type_name(key),
            relation: DamageRelation::Normal,
        });
    }
    rows
}

impl PokedexEntry {
    /// Used when the catalog could not describe the entity.
    pub fn minimal(summary: &EntitySummary, translator: &dyn Translator) -> Self {
        Self {
            id: summary.id,
            name: translator.entity_name(&summary.name),
            slug: summary.name.clone(),
            types: Vec::new(),
            generation: 1,
            image_url: artwork_url(summary.id),
            sprite_url: sprite_url(summary.id),
            base_stats: BaseStats::default(),
            evolution_line: Vec::new(),
            pre_evolution: None,
            resistances: Vec::new(),
        }
    }

    pub fn from_records(
        record: &EntityRecord,
        species: Option<&SpeciesRecord>,
        chain: Option<&EvolutionNode>,
        translator: &dyn Translator,
    ) -> Self {
        Self {
            id: record.id,
            name: translator.display_name(record, species),
            slug: record.name.clone(),
            types: record.types.iter().map(|t| translator.type_name(t)).collect(),
            generation: species.and_then(|s| s.generation).unwrap_or(1),
            image_url: image_url(record),
            sprite_url: record
                .sprites
                .front_default
                .clone()
                .unwrap_or_else(|| sprite_url(record.id)),
            base_stats: record.base_stats,
            evolution_line: chain
                .map(|chain| evolution_line(chain, translator))
                .unwrap_or_default(),
            pre_evolution: species
                .and_then(|s| s.evolves_from.as_deref())
                .map(|name| translator.entity_name(name)),
            resistances: Vec::new(),
        }
    }
}

/// Display names of an evolution family, breadth-first from the root.
pub fn evolution_line(chain: &EvolutionNode, translator: &dyn Translator) -> Vec<String> {
    chain.names().iter().map(|name| translator.entity_name(name)).collect()
}

/// Generation number for a region name.
pub fn region_generation(region: &str) -> Option<u32> {
    match region.trim().to_lowercase().as_str() {
        "kanto" => Some(1),
        "johto" => Some(2),
        "hoenn" => Some(3),
        "sinnoh" => Some(4),
        "unova" => Some(5),
        "kalos" => Some(6),
        "alola" => Some(7),
        "galar" => Some(8),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PokedexFilters {
    /// Matched against the name, the slug and the number.
    pub search: String,
    /// French type name.
    pub type_name: Option<String>,
    pub generation: Option<u32>,
    pub region: Option<String>,
}

impl PokedexFilters {
    pub fn matches(&self, entry: &PokedexEntry) -> bool {
        let search = self.search.trim().to_lowercase();
        if !search.is_empty()
            && !entry.name.to_lowercase().contains(&search)
            && !entry.slug.to_lowercase().contains(&search)
            && !entry.id.to_string().contains(&search)
        {
            return false;
        }

        if let Some(type_name) = &self.type_name {
            let type_name = type_name.to_lowercase();
            if !entry.types.iter().any(|t| t.to_lowercase() == type_name) {
                return false;
            }
        }

        if self.generation.is_some_and(|g| entry.generation != g) {
            return false;
        }

        // Unknown regions do not filter
        let region = self.region.as_deref().and_then(region_generation);
        if region.is_some_and(|g| entry.generation != g) {
            return false;
        }

        true
    }
}

/// Entries passing every filter, ordered by number.
pub fn filter_entries(entries: &[PokedexEntry], filters: &PokedexFilters) -> Vec<PokedexEntry> {
    let mut filtered: Vec<PokedexEntry> = entries
        .iter()
        .filter(|entry| filters.matches(entry))
        .cloned()
        .collect();
    filtered.sort_by_key(|entry| entry.id);
    filtered
}

/// Describe one entity. Never fails: missing pieces degrade to less detail
/// and a failed lookup yields [`PokedexEntry::minimal`].
pub async fn build_entry<C: Catalog + ?Sized>(
    catalog: &C,
    translator: &dyn Translator,
    summary: &EntitySummary,
) -> PokedexEntry {
    let record = match catalog.entity(&summary.id.to_string()).await {
        Ok(record) => record,
        Err(err) => {
            warn!("Falling back to a minimal entry for #{}: {}", summary.id, err);
            return PokedexEntry::minimal(summary, translator);
        }
    };

    let species = catalog.species(&record.species_name).await.ok();
    let chain = match species.as_ref().and_then(|s| s.evolution_chain_id) {
        Some(chain_id) => catalog.evolution_chain(chain_id).await.ok(),
        None => None,
    };

    let mut entry =
        PokedexEntry::from_records(&record, species.as_ref(), chain.as_ref(), translator);
    if let Some(primary) = record.primary_type() {
        match catalog.damage_relations(primary).await {
            Ok(relations) => entry.resistances = resistances(&relations, translator),
            Err(err) => warn!("No damage relations for type '{}': {}", primary, err),
        }
    }
    entry
}

/// Load the first `limit` entries of the catalog, in batches.
pub async fn load_pokedex<C: Catalog + ?Sized>(
    catalog: &C,
    translator: &dyn Translator,
    limit: u32,
) -> Result<Vec<PokedexEntry>, CatalogError> {
    let summaries = catalog.list_entities(limit, 0).await?;
    let mut entries = Vec::with_capacity(summaries.len());

    for batch in summaries.chunks(LOAD_BATCH_SIZE) {
        let built = join_all(
            batch
                .iter()
                .map(|summary| build_entry(catalog, translator, summary)),
        )
        .await;
        entries.extend(built);
    }

    info!("Pokédex loaded with {} entries", entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::FrenchDictionary;

    fn entry(id: u32, name: &str, slug: &str, types: &[&str], generation: u32) -> PokedexEntry {
        PokedexEntry {
            types: types.iter().map(|t| t.to_string()).collect(),
            generation,
            name: name.to_string(),
            ..PokedexEntry::minimal(
                &EntitySummary {
                    id,
                    name: slug.to_string(),
                },
                &FrenchDictionary,
            )
        }
    }

    fn sample() -> Vec<PokedexEntry> {
        vec![
            entry(152, "Germignon", "chikorita", &["plante"], 2),
            entry(25, "Pikachu", "pikachu", &["électrik"], 1),
            entry(4, "Salamèche", "charmander", &["feu"], 1),
            entry(6, "Dracaufeu", "charizard", &["feu", "vol"], 1),
        ]
    }

    fn ids(entries: &[PokedexEntry]) -> Vec<u32> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_no_filters_sorts_by_number() {
        let filtered = filter_entries(&sample(), &PokedexFilters::default());
        assert_eq!(ids(&filtered), vec![4, 6, 25, 152]);
    }

    #[test]
    fn test_search_matches_name_slug_or_number() {
        let mut filters = PokedexFilters {
            search: "SALA".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_entries(&sample(), &filters)), vec![4]);

        filters.search = "chari".to_string();
        assert_eq!(ids(&filter_entries(&sample(), &filters)), vec![6]);

        filters.search = "15".to_string();
        assert_eq!(ids(&filter_entries(&sample(), &filters)), vec![152]);
    }

    #[test]
    fn test_type_generation_and_region() {
        let filters = PokedexFilters {
            type_name: Some("Feu".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_entries(&sample(), &filters)), vec![4, 6]);

        let filters = PokedexFilters {
            generation: Some(2),
            ..Default::default()
        };
        assert_eq!(ids(&filter_entries(&sample(), &filters)), vec![152]);

        let filters = PokedexFilters {
            region: Some("Kanto".to_string()),
            type_name: Some("vol".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_entries(&sample(), &filters)), vec![6]);

        let filters = PokedexFilters {
            region: Some("atlantis".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_entries(&sample(), &filters).len(), 4);
    }

    #[test]
    fn test_resistance_table_covers_every_type() {
        let fire = DamageRelations {
            double_damage_from: vec!["ground".into(), "rock".into(), "water".into()],
            half_damage_from: vec!["bug".into(), "fairy".into(), "fire".into()],
            no_damage_from: Vec::new(),
        };
        let rows = resistances(&fire, &FrenchDictionary);

        assert_eq!(rows.len(), TYPE_NAMES.len());
        assert_eq!(
            rows[0],
            TypeResistance {
                type_name: "sol".to_string(),
                relation: DamageRelation::Weak,
            }
        );
        let resistant: Vec<&str> = rows
            .iter()
            .filter(|r| r.relation == DamageRelation::Resistant)
            .map(|r| r.type_name.as_str())
            .collect();
        assert_eq!(resistant, vec!["insecte", "fée", "feu"]);
        assert_eq!(
            rows.iter().filter(|r| r.relation == DamageRelation::Normal).count(),
            12
        );
        assert_eq!(rows[3].relation.multiplier(), 0.5);
    }

    #[test]
    fn test_immunity() {
        let ghost = DamageRelations {
            double_damage_from: vec!["ghost".into(), "dark".into()],
            half_damage_from: vec!["poison".into(), "bug".into()],
            no_damage_from: vec!["normal".into(), "fighting".into()],
        };
        let rows = resistances(&ghost, &FrenchDictionary);
        let normal = rows.iter().find(|r| r.type_name == "normal").unwrap();
        assert_eq!(normal.relation, DamageRelation::Immune);
        assert_eq!(normal.relation.multiplier(), 0.0);
        assert_eq!(rows.len(), 18);
    }

    #[test]
    fn test_minimal_entry() {
        let minimal = PokedexEntry::minimal(
            &EntitySummary {
                id: 1,
                name: "bulbasaur".to_string(),
            },
            &FrenchDictionary,
        );
        assert_eq!(minimal.name, "Bulbizarre");
        assert_eq!(minimal.generation, 1);
        assert!(minimal.types.is_empty());
        assert!(minimal.image_url.ends_with("/official-artwork/1.png"));
        assert_eq!(minimal.base_stats.total(), 0);
        assert!(minimal.resistances.is_empty());
    }
}
