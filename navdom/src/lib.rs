pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod focus;
pub mod types;

pub use document::{Document, KeyHandler};
pub use element::Element;
pub use error::DomError;
pub use event::{Event, EventResult, Key, Modifiers, MouseButton, NavDirection};
pub use focus::{collect_focusable, collect_tabbable, FocusState};
pub use types::*;
