//! Keyboard-navigable tree grid.
//!
//! A tree of items is flattened into rows ([`flatten`]), rendered into a
//! [`navdom`] element tree ([`TreeGrid::render`]) and driven by arrow keys
//! ([`navigate`]) while a single control stays reachable by Tab
//! ([`RovingTabIndex`]).

pub mod flatten;
pub mod grid;
pub mod item;
pub mod navigate;
pub mod options;
pub mod render;
pub mod roving;
pub mod scan;

pub use flatten::{FlattenedGrid, RowDescriptor, RowKind, escape_key, flatten};
pub use grid::{Activation, TreeGrid};
pub use item::{TreeItem, TreeSource};
pub use navigate::{FocusPosition, Navigation, focus_position, navigate};
pub use options::{ExpandPolicy, TreeGridOptions};
pub use render::{RowContext, RowRenderer};
pub use roving::RovingTabIndex;
pub use scan::{DefaultFocusQuery, FocusQuery, containing_row, focusables_in_row, rows_in};
