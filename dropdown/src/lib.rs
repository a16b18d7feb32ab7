//! A selectable-list control ("dropdown") for terminal front-ends.
//!
//! A [`Dropdown`] shows a trigger that opens a sheet of options. It supports
//! single and multiple selection, reports picks through a callback, and can
//! either own its selection or mirror one owned by the host.
//!
//! The control itself is pure state: [`Dropdown::trigger_view`] and
//! [`Dropdown::sheet_view`] describe what to show, and the [`render`] and
//! [`terminal`] modules draw those descriptions with crossterm.

pub mod buffer;
mod dropdown;
pub mod error;
pub mod event;
pub mod glyph;
pub mod hit;
mod input;
pub mod layout;
mod option;
mod props;
pub mod render;
mod selection;
pub mod terminal;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use buffer::{Buffer, Cell};
pub use dropdown::Dropdown;
pub use error::{Error, Result};
pub use event::{Event, EventResult, Key, Modifiers, MouseButton};
pub use glyph::{Glyph, GlyphSize, GlyphSource, SymbolGlyphs};
pub use hit::Target;
pub use layout::{Rect, Viewport};
pub use option::DropdownOption;
pub use props::{DropdownProps, Metrics, OnSelect};
pub use render::RenderContext;
pub use selection::{SelectValue, Selection, SelectionSource};
pub use terminal::Terminal;
pub use theme::{DefaultTheme, Theme};
pub use types::*;
pub use view::{RowConfig, RowView, SheetView, TriggerView, row_view};
