//! Live site configuration lookups.

/// Port for reading named options from a live site installation.
///
/// Implementations never fail: an unavailable site, an unset option or a
/// failed lookup all yield `fallback`.
pub trait SiteConfig {
    /// Value of option `name`, or `fallback` when it is unset or empty.
    fn option(&self, name: &str, fallback: &str) -> String;
}

/// Provider used when no live installation was detected.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableSiteConfig;

impl SiteConfig for UnavailableSiteConfig {
    fn option(&self, _name: &str, fallback: &str) -> String {
        fallback.to_string()
    }
}

impl<T: SiteConfig + ?Sized> SiteConfig for Box<T> {
    fn option(&self, name: &str, fallback: &str) -> String {
        (**self).option(name, fallback)
    }
}
