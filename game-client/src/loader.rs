//! Random entity selection where only the latest request may deliver.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info, warn};

use game_core::canonical_secret;
use game_types::{Entity, EntityRecord, EntitySummary, GameError, SpeciesRecord};

use crate::catalog::{Catalog, CatalogError};
use crate::pokeapi::image_url;
use crate::translation::{FrenchDictionary, Translator};

/// How the next entity is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionFilter {
    /// Among the first `n` catalog entries.
    Limit(u32),
    /// Among the members of a type, named in French or by catalog key.
    ByType(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("A newer request replaced this one")]
    Superseded,
    #[error(transparent)]
    Fetch(#[from] CatalogError),
    #[error("'{name}' cannot be played: {reason}")]
    Unplayable { name: String, reason: String },
}

impl LoadError {
    /// The error to show, if any. Superseded loads are dropped silently.
    pub fn game_error(&self) -> Option<GameError> {
        match self {
            LoadError::Superseded => None,
            LoadError::Fetch(err) => Some(err.clone().into()),
            LoadError::Unplayable { reason, .. } => Some(GameError::InvalidEntity {
                reason: reason.clone(),
            }),
        }
    }
}

/// A playable entity together with the catalog data it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedEntity {
    pub entity: Entity,
    pub record: EntityRecord,
}

pub struct EntityLoader<C: Catalog> {
    catalog: Arc<C>,
    translator: Arc<dyn Translator>,
    generation: AtomicU64,
    rng: Mutex<StdRng>,
}

impl<C: Catalog> EntityLoader<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    pub fn with_rng(catalog: Arc<C>, rng: StdRng) -> Self {
        Self {
            catalog,
            translator: Arc::new(FrenchDictionary),
            generation: AtomicU64::new(0),
            rng: Mutex::new(rng),
        }
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    pub fn catalog(&self) -> &Arc<C> {
        &self.catalog
    }

    /// Fetch a random entity. Only the most recent call can succeed; any
    /// older call still in flight resolves to [`LoadError::Superseded`].
    pub async fn load(&self, filter: SelectionFilter) -> Result<LoadedEntity, LoadError> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Load #{} started with {:?}", ticket, filter);

        let result = self.fetch(&filter).await;

        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!("Load #{} superseded, discarding its result", ticket);
            return Err(LoadError::Superseded);
        }

        match &result {
            Ok(loaded) => info!(
                "Loaded '{}' ({:?}) for {:?}",
                loaded.entity.name, loaded.entity.category, filter
            ),
            Err(err) => warn!("Load #{} failed: {}", ticket, err),
        }
        result
    }

    /// Invalidate any load still in flight.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    async fn fetch(&self, filter: &SelectionFilter) -> Result<LoadedEntity, LoadError> {
        let (candidates, category) = match filter {
            SelectionFilter::Limit(limit) => {
                let page = self.catalog.list_entities(*limit, 0).await?;
                (page, None)
            }
            SelectionFilter::ByType(type_name) => {
                let key = self.translator.type_key(type_name);
                let members = self.catalog.type_members(&key).await?;
                (members, Some(self.translator.type_name(&key)))
            }
        };

        let Some(pick) = self.pick(&candidates) else {
            return Err(CatalogError::Empty(format!("{:?}", filter)).into());
        };

        let record = self.catalog.entity(&pick.id.to_string()).await?;
        let species = self.species_for(&record).await;
        let name = self.translator.display_name(&record, species.as_ref());

        if let Err(err) = canonical_secret(&name) {
            return Err(LoadError::Unplayable {
                name,
                reason: err.to_string(),
            });
        }

        // Limit mode only learns the type from the record itself
        let category =
            category.or_else(|| record.primary_type().map(|t| self.translator.type_name(t)));
        let entity = Entity::new(name, category).with_image(image_url(&record));
        Ok(LoadedEntity { entity, record })
    }

    async fn species_for(&self, record: &EntityRecord) -> Option<SpeciesRecord> {
        match self.catalog.species(&record.species_name).await {
            Ok(species) => Some(species),
            Err(err) => {
                warn!(
                    "No species data for '{}', using the name dictionary: {}",
                    record.name, err
                );
                None
            }
        }
    }

    fn pick(&self, candidates: &[EntitySummary]) -> Option<EntitySummary> {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        candidates.choose(&mut *rng).cloned()
    }
}
