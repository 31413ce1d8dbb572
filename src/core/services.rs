//! Unified service container for docshelf
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::loader::SectionLoader;
use crate::core::searcher::DocSearcher;
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access. Every field
/// is stateless between calls; cloning shares the same instances.
#[derive(Clone)]
pub struct Services {
    /// Section loading (index-file and listing fallbacks included)
    pub loader: Arc<SectionLoader>,

    /// Regex content search
    pub searcher: Arc<DocSearcher>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        let loader = Arc::new(SectionLoader::new(
            config.docs.dir.clone(),
            config.docs.extension.clone(),
            config.docs.index_file.clone(),
        ));

        let searcher = Arc::new(DocSearcher::new(
            config.docs.dir.clone(),
            config.docs.extension.clone(),
        ));

        Self {
            loader,
            searcher,
            config: Arc::new(config),
        }
    }
}
