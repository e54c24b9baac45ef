mod page_store;
mod site_config;

pub use page_store::PageStore;
pub use site_config::{SiteConfig, UnavailableSiteConfig};
