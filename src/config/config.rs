use std::{fmt::Debug, sync::Arc};

use super::logger::{Logger, TracingLogger};

/// Settings shared by one lex + parse run.
///
/// Cloning is cheap; clones share the same logger.
#[derive(Clone)]
pub struct Configuration {
    /// Log the rendered trees after a successful parse
    pub verbose: bool,
    /// Reject characters no grammar rule matches instead of dropping them
    pub strict: bool,
    logger: Arc<dyn Logger>,
}

impl Configuration {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Configuration {
            verbose: false,
            strict: false,
            logger,
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn logger(&self) -> &dyn Logger {
        self.logger.as_ref()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(Arc::new(TracingLogger))
    }
}

impl Debug for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Configuration")
            .field("verbose", &self.verbose)
            .field("strict", &self.strict)
            .finish_non_exhaustive()
    }
}
