//! Startup configuration, provided once via context instead of being read
//! ambiently from browser storage.

/// EmailJS identifiers, fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    /// The current build always forces dark mode; the flag is still persisted
    /// to local storage once at startup for compatibility with the previous
    /// revision of the site.
    pub dark_mode: bool,
    pub relay: RelayConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            relay: RelayConfig {
                service_id: "service_qkbicqh",
                template_id: "template_6srabxi",
                public_key: "jrLWe4CbOOmIIJQa3",
            },
        }
    }
}
