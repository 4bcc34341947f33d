pub mod catalog;
pub mod config;
pub mod loader;
pub mod pokeapi;
pub mod pokedex;
pub mod translation;

pub use catalog::{Catalog, CatalogError};
pub use config::Config;
pub use loader::{EntityLoader, LoadError, LoadedEntity, SelectionFilter};
pub use pokeapi::PokeApiClient;
pub use pokedex::{
    DamageRelation, PokedexEntry, PokedexFilters, TypeResistance, build_entry, filter_entries,
    load_pokedex,
};
pub use translation::{FrenchDictionary, Translator};
