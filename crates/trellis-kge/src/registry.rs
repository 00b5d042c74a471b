//! Name → scoring layer registry.
//!
//! Model assembly code picks the scoring function by name (usually from a
//! config file), so layers are looked up here rather than constructed
//! directly. Built-in layers are registered on first use.
//!
//! ```rust,ignore
//! use trellis_kge::registry;
//!
//! let layer = registry::build_layer("TransE", 100)?;
//!
//! // Persist and rebuild
//! let json = layer.config().to_json()?;
//! let again = registry::build_from_config(&LayerConfig::from_json(&json)?)?;
//! ```

use crate::error::{Error, Result};
use crate::layer::{LayerConfig, ScoringLayer};
use crate::models::{ComplEx, DistMult, RotatE, TransE};
use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};
use tracing::debug;

/// Builds a layer from its config.
pub type LayerConstructor = fn(&LayerConfig) -> Result<Box<dyn ScoringLayer>>;

static REGISTRY: OnceLock<RwLock<HashMap<String, LayerConstructor>>> = OnceLock::new();

fn registry() -> &'static RwLock<HashMap<String, LayerConstructor>> {
    REGISTRY.get_or_init(|| {
        let mut layers: HashMap<String, LayerConstructor> = HashMap::new();
        layers.insert("TransE".into(), TransE::from_config);
        layers.insert("DistMult".into(), DistMult::from_config);
        layers.insert("ComplEx".into(), ComplEx::from_config);
        layers.insert("RotatE".into(), RotatE::from_config);
        RwLock::new(layers)
    })
}

/// Register a layer under `name`, replacing any previous entry.
pub fn register_layer(name: impl Into<String>, constructor: LayerConstructor) {
    let name = name.into();
    debug!(layer = %name, "registering scoring layer");
    registry()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(name, constructor);
}

/// Names of all registered layers, sorted.
pub fn registered_layers() -> Vec<String> {
    let mut names: Vec<String> = registry()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .keys()
        .cloned()
        .collect();
    names.sort();
    names
}

/// Instantiate the layer registered under `name` with dimension `k`.
pub fn build_layer(name: &str, k: usize) -> Result<Box<dyn ScoringLayer>> {
    build_from_config(&LayerConfig::new(name, k))
}

/// Instantiate a layer from a full config.
pub fn build_from_config(config: &LayerConfig) -> Result<Box<dyn ScoringLayer>> {
    let constructor = registry()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&config.name)
        .copied()
        .ok_or_else(|| Error::UnknownLayer(config.name.clone()))?;
    debug!(layer = %config.name, k = config.k, "building scoring layer");
    constructor(config)
}
