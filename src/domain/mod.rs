pub mod build_options;
pub mod error;
pub mod manifest;
pub mod overrides;
pub mod page_shell;
pub mod placeholders;
pub mod site;
pub mod substitution;

pub use build_options::BuildOptions;
pub use error::AppError;
pub use manifest::{FileEntry, Manifest, Requirement};
pub use overrides::Overrides;
pub use page_shell::PageShell;
pub use placeholders::{CliValues, PlaceholderMap, PlaceholderSources};
pub use site::{SiteContext, SiteIdentity};
