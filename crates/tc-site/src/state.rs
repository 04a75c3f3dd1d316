//! Shared request state

use leptos::*;
use std::sync::Arc;
use tc_core::{Catalog, Clock, SiteConfig};

/// Loaded once at startup and handed to every render through context
#[derive(Clone)]
pub struct SiteState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<SiteConfig>,
    pub clock: Arc<dyn Clock>,
}

impl SiteState {
    pub fn new(catalog: Catalog, config: SiteConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
            clock,
        }
    }

    pub fn year(&self) -> i32 {
        self.clock.current_year()
    }
}

pub fn use_site_state() -> Option<SiteState> {
    use_context::<SiteState>()
}
