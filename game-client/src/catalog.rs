use async_trait::async_trait;
use game_types::{
    DamageRelations, EntityRecord, EntitySummary, EvolutionNode, GameError, SpeciesRecord,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("Unreadable response from {url}: {message}")]
    Decode { url: String, message: String },
    #[error("No entries found for {0}")]
    Empty(String),
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::Status { status: 404, .. })
    }
}

impl From<CatalogError> for GameError {
    fn from(err: CatalogError) -> Self {
        GameError::FetchFailed {
            message: err.to_string(),
        }
    }
}

/// Read-only access to the creature catalog.
///
/// Every call may fail; nothing here retries.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// A page of the catalog listing, in catalog order.
    async fn list_entities(&self, limit: u32, offset: u32)
    -> Result<Vec<EntitySummary>, CatalogError>;

    async fn entity(&self, id_or_name: &str) -> Result<EntityRecord, CatalogError>;

    async fn species(&self, id_or_name: &str) -> Result<SpeciesRecord, CatalogError>;

    /// Every creature carrying the type, by its English key (`"fire"`).
    async fn type_members(&self, type_key: &str) -> Result<Vec<EntitySummary>, CatalogError>;

    /// How attacking types fare against the given defending type.
    async fn damage_relations(&self, type_key: &str) -> Result<DamageRelations, CatalogError>;

    async fn evolution_chain(&self, chain_id: u32) -> Result<EvolutionNode, CatalogError>;
}
