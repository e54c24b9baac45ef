pub mod page_filesystem;
pub mod wp_cli;

pub use page_filesystem::FilesystemPageStore;
pub use wp_cli::WpCliSiteConfig;
