use crate::ports::{PageStore, SiteConfig};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: PageStore, C: SiteConfig> {
    pages: S,
    site_config: C,
}

impl<S: PageStore, C: SiteConfig> AppContext<S, C> {
    /// Create a new application context.
    pub fn new(pages: S, site_config: C) -> Self {
        Self { pages, site_config }
    }

    /// Get a reference to the page store.
    pub fn pages(&self) -> &S {
        &self.pages
    }

    /// Get a reference to the live site configuration.
    pub fn site_config(&self) -> &C {
        &self.site_config
    }
}
