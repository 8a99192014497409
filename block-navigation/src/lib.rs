//! Block navigation panel for a block editor.
//!
//! Lists the editor's blocks as a keyboard-navigable tree grid: arrow keys
//! move between blocks and their controls, Enter or a click selects a block,
//! and optional mover and appender controls edit the block tree.

pub mod block;
pub mod config;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod row;
pub mod store;

pub use block::{Block, DEFAULT_BLOCK_NAME, title_from_name};
pub use config::NavigationConfig;
pub use error::{LoggingError, StoreError};
pub use logging::init_logging;
pub use navigation::{BlockNavigation, HierarchyMode};
pub use row::{BlockRowRenderer, RowAction};
pub use store::{BlockStore, MoveDirection};
