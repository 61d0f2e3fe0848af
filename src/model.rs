//! Shared application state stored in Serenity's global `TypeMap`.
//!
//! Nothing mutable lives here: castlist navigation travels in custom_ids and the store
//! is re-read per interaction, so concurrent clicks never contend.
use crate::castlist::LayoutLimits;
use crate::database::store::JsonStore;
use serenity::prelude::TypeMapKey;
use std::sync::Arc;

pub struct AppState {
    pub store: JsonStore,
    pub limits: LayoutLimits,
}

impl AppState {
    pub fn new(store: JsonStore, limits: LayoutLimits) -> Self {
        Self { store, limits }
    }

    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
