use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use game_types::{
    BaseStats, DamageRelations, EntityRecord, EntitySummary, EvolutionNode, LocalizedName,
    SpeciesRecord, SpriteUrls,
};

use crate::catalog::{Catalog, CatalogError};

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

const SPRITES_BASE_URL: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

static RESOURCE_ID: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"/(\d+)/?$").ok());

/// Numeric id at the end of a resource URL (`.../pokemon/25/` -> 25).
pub fn id_from_url(url: &str) -> Option<u32> {
    RESOURCE_ID
        .as_ref()?
        .captures(url)
        .and_then(|caps| caps.get(1))
        .and_then(|id| id.as_str().parse().ok())
}

pub fn artwork_url(id: u32) -> String {
    format!("{}/other/official-artwork/{}.png", SPRITES_BASE_URL, id)
}

pub fn sprite_url(id: u32) -> String {
    format!("{}/{}.png", SPRITES_BASE_URL, id)
}

/// The image to show for a record, falling back to the artwork repository.
pub fn image_url(record: &EntityRecord) -> String {
    record
        .sprites
        .official_artwork
        .clone()
        .unwrap_or_else(|| artwork_url(record.id))
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct UrlResource {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    results: Vec<NamedResource>,
}

#[derive(Debug, Deserialize)]
struct PokemonResponse {
    id: u32,
    name: String,
    types: Vec<PokemonTypeSlot>,
    stats: Vec<PokemonStat>,
    sprites: PokemonSprites,
    species: NamedResource,
}

#[derive(Debug, Deserialize)]
struct PokemonTypeSlot {
    slot: u32,
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct PokemonStat {
    base_stat: u32,
    stat: NamedResource,
}

#[derive(Debug, Deserialize)]
struct PokemonSprites {
    front_default: Option<String>,
    other: Option<OtherSprites>,
}

#[derive(Debug, Deserialize)]
struct OtherSprites {
    #[serde(rename = "official-artwork")]
    official_artwork: Option<ArtworkSprites>,
}

#[derive(Debug, Deserialize)]
struct ArtworkSprites {
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SpeciesResponse {
    id: u32,
    name: String,
    generation: Option<NamedResource>,
    evolution_chain: Option<UrlResource>,
    evolves_from_species: Option<NamedResource>,
    #[serde(default)]
    names: Vec<SpeciesName>,
}

#[derive(Debug, Deserialize)]
struct SpeciesName {
    name: String,
    language: NamedResource,
}

#[derive(Debug, Deserialize)]
struct TypeResponse {
    #[serde(default)]
    pokemon: Vec<TypeMember>,
    #[serde(default)]
    damage_relations: RawDamageRelations,
}

#[derive(Debug, Default, Deserialize)]
struct RawDamageRelations {
    #[serde(default)]
    double_damage_from: Vec<NamedResource>,
    #[serde(default)]
    half_damage_from: Vec<NamedResource>,
    #[serde(default)]
    no_damage_from: Vec<NamedResource>,
}

#[derive(Debug, Deserialize)]
struct TypeMember {
    pokemon: NamedResource,
}

#[derive(Debug, Deserialize)]
struct EvolutionChainResponse {
    chain: ChainLink,
}

#[derive(Debug, Deserialize)]
struct ChainLink {
    species: NamedResource,
    #[serde(default)]
    evolves_to: Vec<ChainLink>,
}

fn summary(resource: NamedResource) -> Option<EntitySummary> {
    let id = id_from_url(&resource.url)?;
    Some(EntitySummary {
        id,
        name: resource.name,
    })
}

fn convert_pokemon(raw: PokemonResponse) -> EntityRecord {
    let mut slots = raw.types;
    slots.sort_by_key(|slot| slot.slot);

    let mut base_stats = BaseStats::default();
    for stat in raw.stats {
        match stat.stat.name.as_str() {
            "hp" => base_stats.hp = stat.base_stat,
            "attack" => base_stats.attack = stat.base_stat,
            "defense" => base_stats.defense = stat.base_stat,
            "special-attack" => base_stats.special_attack = stat.base_stat,
            "special-defense" => base_stats.special_defense = stat.base_stat,
            "speed" => base_stats.speed = stat.base_stat,
            _ => {}
        }
    }

    EntityRecord {
        id: raw.id,
        name: raw.name,
        types: slots.into_iter().map(|slot| slot.kind.name).collect(),
        base_stats,
        sprites: SpriteUrls {
            front_default: raw.sprites.front_default,
            official_artwork: raw
                .sprites
                .other
                .and_then(|other| other.official_artwork)
                .and_then(|artwork| artwork.front_default),
        },
        species_name: raw.species.name,
    }
}

fn convert_species(raw: SpeciesResponse) -> SpeciesRecord {
    SpeciesRecord {
        id: raw.id,
        name: raw.name,
        generation: raw.generation.and_then(|g| id_from_url(&g.url)),
        evolution_chain_id: raw.evolution_chain.and_then(|c| id_from_url(&c.url)),
        evolves_from: raw.evolves_from_species.map(|s| s.name),
        names: raw
            .names
            .into_iter()
            .map(|n| LocalizedName {
                language: n.language.name,
                name: n.name,
            })
            .collect(),
    }
}

fn convert_relations(raw: RawDamageRelations) -> DamageRelations {
    let names = |types: Vec<NamedResource>| -> Vec<String> {
        types.into_iter().map(|t| t.name).collect()
    };
    DamageRelations {
        double_damage_from: names(raw.double_damage_from),
        half_damage_from: names(raw.half_damage_from),
        no_damage_from: names(raw.no_damage_from),
    }
}

fn convert_chain(link: ChainLink) -> EvolutionNode {
    EvolutionNode {
        id: id_from_url(&link.species.url),
        name: link.species.name,
        children: link.evolves_to.into_iter().map(convert_chain).collect(),
    }
}

/// PokéAPI v2 over HTTP. Successful entity and species lookups are cached
/// for the lifetime of the client.
pub struct PokeApiClient {
    client: Client,
    base_url: String,
    entities: DashMap<String, EntityRecord>,
    species: DashMap<String, SpeciesRecord>,
}

impl PokeApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Request {
                url: base_url.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url,
            entities: DashMap::new(),
            species: DashMap::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!("Fetching {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!("Catalog request to {} failed: {:?}", url, e);
            CatalogError::Request {
                url: url.clone(),
                message: e.to_string(),
            }
        })?;

        if !response.status().is_success() {
            tracing::warn!("Catalog request to {} returned status: {}", url, response.status());
            return Err(CatalogError::Status {
                url,
                status: response.status().as_u16(),
            });
        }

        response.json().await.map_err(|e| {
            tracing::warn!("Failed to parse catalog response from {}: {:?}", url, e);
            CatalogError::Decode {
                url: url.clone(),
                message: e.to_string(),
            }
        })
    }
}

fn cache_key(id_or_name: &str) -> String {
    id_or_name.trim().to_lowercase()
}

#[async_trait]
impl Catalog for PokeApiClient {
    async fn list_entities(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<EntitySummary>, CatalogError> {
        let page: ListResponse = self
            .get_json(&format!("pokemon?limit={}&offset={}", limit, offset))
            .await?;
        Ok(page.results.into_iter().filter_map(summary).collect())
    }

    async fn entity(&self, id_or_name: &str) -> Result<EntityRecord, CatalogError> {
        let key = cache_key(id_or_name);
        if let Some(record) = self.entities.get(&key) {
            tracing::debug!("Using cached entity '{}'", key);
            return Ok(record.clone());
        }

        let raw: PokemonResponse = self.get_json(&format!("pokemon/{}", key)).await?;
        let record = convert_pokemon(raw);
        // Reachable by id and by slug
        self.entities.insert(record.id.to_string(), record.clone());
        self.entities.insert(record.name.clone(), record.clone());
        Ok(record)
    }

    async fn species(&self, id_or_name: &str) -> Result<SpeciesRecord, CatalogError> {
        let key = cache_key(id_or_name);
        if let Some(record) = self.species.get(&key) {
            return Ok(record.clone());
        }

        let raw: SpeciesResponse = self.get_json(&format!("pokemon-species/{}", key)).await?;
        let record = convert_species(raw);
        self.species.insert(record.id.to_string(), record.clone());
        self.species.insert(record.name.clone(), record.clone());
        Ok(record)
    }

    async fn type_members(&self, type_key: &str) -> Result<Vec<EntitySummary>, CatalogError> {
        let raw: TypeResponse = self.get_json(&format!("type/{}", cache_key(type_key))).await?;
        Ok(raw
            .pokemon
            .into_iter()
            .filter_map(|member| summary(member.pokemon))
            .collect())
    }

    async fn damage_relations(&self, type_key: &str) -> Result<DamageRelations, CatalogError> {
        let raw: TypeResponse = self.get_json(&format!("type/{}", cache_key(type_key))).await?;
        Ok(convert_relations(raw.damage_relations))
    }

    async fn evolution_chain(&self, chain_id: u32) -> Result<EvolutionNode, CatalogError> {
        let raw: EvolutionChainResponse =
            self.get_json(&format!("evolution-chain/{}", chain_id)).await?;
        Ok(convert_chain(raw.chain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_from_url() {
        assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/25/"), Some(25));
        assert_eq!(id_from_url("https://pokeapi.co/api/v2/generation/1"), Some(1));
        assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/pikachu/"), None);
        assert_eq!(id_from_url(""), None);
    }

    #[test]
    fn test_convert_pokemon() {
        let raw: PokemonResponse = serde_json::from_value(json!({
            "id": 6,
            "name": "charizard",
            "types": [
                { "slot": 2, "type": { "name": "flying", "url": "https://pokeapi.co/api/v2/type/3/" } },
                { "slot": 1, "type": { "name": "fire", "url": "https://pokeapi.co/api/v2/type/10/" } }
            ],
            "stats": [
                { "base_stat": 78, "effort": 0, "stat": { "name": "hp", "url": "" } },
                { "base_stat": 84, "effort": 0, "stat": { "name": "attack", "url": "" } },
                { "base_stat": 109, "effort": 3, "stat": { "name": "special-attack", "url": "" } },
                { "base_stat": 100, "effort": 0, "stat": { "name": "speed", "url": "" } }
            ],
            "sprites": {
                "front_default": "https://example.test/6.png",
                "other": { "official-artwork": { "front_default": null } }
            },
            "species": { "name": "charizard", "url": "https://pokeapi.co/api/v2/pokemon-species/6/" },
            "height": 17
        }))
        .unwrap();

        let record = convert_pokemon(raw);
        assert_eq!(record.types, vec!["fire", "flying"]);
        assert_eq!(record.primary_type(), Some("fire"));
        assert_eq!(record.base_stats.hp, 78);
        assert_eq!(record.base_stats.special_attack, 109);
        assert_eq!(record.base_stats.defense, 0);
        assert_eq!(record.sprites.official_artwork, None);
        assert_eq!(image_url(&record), artwork_url(6));
    }

    #[test]
    fn test_convert_species() {
        let raw: SpeciesResponse = serde_json::from_value(json!({
            "id": 5,
            "name": "charmeleon",
            "generation": { "name": "generation-i", "url": "https://pokeapi.co/api/v2/generation/1/" },
            "evolution_chain": { "url": "https://pokeapi.co/api/v2/evolution-chain/2/" },
            "evolves_from_species": { "name": "charmander", "url": "https://pokeapi.co/api/v2/pokemon-species/4/" },
            "names": [
                { "name": "Reptincel", "language": { "name": "fr", "url": "" } },
                { "name": "Charmeleon", "language": { "name": "en", "url": "" } }
            ]
        }))
        .unwrap();

        let species = convert_species(raw);
        assert_eq!(species.generation, Some(1));
        assert_eq!(species.evolution_chain_id, Some(2));
        assert_eq!(species.evolves_from.as_deref(), Some("charmander"));
        assert_eq!(species.name_in("fr"), Some("Reptincel"));
    }

    #[test]
    fn test_convert_chain() {
        let raw: EvolutionChainResponse = serde_json::from_value(json!({
            "chain": {
                "species": { "name": "oddish", "url": "https://pokeapi.co/api/v2/pokemon-species/43/" },
                "evolves_to": [{
                    "species": { "name": "gloom", "url": "https://pokeapi.co/api/v2/pokemon-species/44/" },
                    "evolves_to": [
                        { "species": { "name": "vileplume", "url": "https://pokeapi.co/api/v2/pokemon-species/45/" }, "evolves_to": [] },
                        { "species": { "name": "bellossom", "url": "https://pokeapi.co/api/v2/pokemon-species/182/" }, "evolves_to": [] }
                    ]
                }]
            }
        }))
        .unwrap();

        let chain = convert_chain(raw.chain);
        assert_eq!(chain.id, Some(43));
        assert_eq!(chain.names(), vec!["oddish", "gloom", "vileplume", "bellossom"]);
    }

    #[test]
    fn test_convert_type_relations() {
        let raw: TypeResponse = serde_json::from_value(json!({
            "name": "fire",
            "damage_relations": {
                "double_damage_from": [
                    { "name": "ground", "url": "https://pokeapi.co/api/v2/type/5/" },
                    { "name": "rock", "url": "https://pokeapi.co/api/v2/type/6/" },
                    { "name": "water", "url": "https://pokeapi.co/api/v2/type/11/" }
                ],
                "half_damage_from": [
                    { "name": "bug", "url": "https://pokeapi.co/api/v2/type/7/" },
                    { "name": "fairy", "url": "https://pokeapi.co/api/v2/type/18/" }
                ],
                "no_damage_from": [],
                "double_damage_to": [{ "name": "grass", "url": "https://pokeapi.co/api/v2/type/12/" }]
            },
            "pokemon": [
                { "slot": 1, "pokemon": { "name": "charmander", "url": "https://pokeapi.co/api/v2/pokemon/4/" } }
            ]
        }))
        .unwrap();

        assert_eq!(raw.pokemon.len(), 1);
        let relations = convert_relations(raw.damage_relations);
        assert_eq!(relations.double_damage_from, vec!["ground", "rock", "water"]);
        assert_eq!(relations.half_damage_from, vec!["bug", "fairy"]);
        assert!(relations.no_damage_from.is_empty());
    }

    #[test]
    fn test_list_skips_unparseable_urls() {
        let raw: ListResponse = serde_json::from_value(json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "broken", "url": "https://pokeapi.co/api/v2/pokemon/" }
            ]
        }))
        .unwrap();

        let entries: Vec<_> = raw.results.into_iter().filter_map(summary).collect();
        assert_eq!(
            entries,
            vec![EntitySummary {
                id: 1,
                name: "bulbasaur".to_string()
            }]
        );
    }

    #[test]
    fn test_client_trims_base_url() {
        let client = PokeApiClient::new("https://pokeapi.co/api/v2/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }
}
