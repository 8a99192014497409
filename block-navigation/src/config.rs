//! Block navigation configuration.

use std::path::PathBuf;

use simplelog::LevelFilter;

/// Configuration for a [`BlockNavigation`](crate::BlockNavigation) panel.
#[derive(Debug, Clone)]
pub struct NavigationConfig {
    /// Element ID of the grid container.
    pub id: String,

    /// Close each expanded block's inner blocks with an "Add block" row.
    pub show_appender: bool,

    /// Render "Move up"/"Move down" buttons next to each block.
    pub show_movers: bool,

    /// Level used by [`init_logging`](crate::logging::init_logging).
    pub log_level: LevelFilter,

    /// Log file. Logging stays off when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            id: "block-navigation".to_string(),
            show_appender: false,
            show_movers: false,
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl NavigationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn show_appender(mut self, show: bool) -> Self {
        self.show_appender = show;
        self
    }

    pub fn show_movers(mut self, show: bool) -> Self {
        self.show_movers = show;
        self
    }

    pub fn log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// Write logs to `path`.
    pub fn log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }
}
