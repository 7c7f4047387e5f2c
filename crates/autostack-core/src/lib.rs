//! Autostack Core Library
//!
//! Platform-agnostic state and interaction logic for the architecture canvas:
//! the component catalog, the canvas store, and pointer-driven editing.

pub mod camera;
pub mod component;
pub mod config;
pub mod controller;
pub mod drag;
pub mod input;
pub mod selection;
pub mod snap;
pub mod store;
pub mod templates;

pub use camera::{Camera, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
pub use component::{
    ComponentCategory, ComponentId, ComponentMetadata, ComponentProperties, ComponentTemplate, ComponentType,
    CornerRadius, PlacedComponent,
};
pub use config::{CanvasConfig, ConfigError};
pub use controller::{ContextMenu, ContextMenuAction, InteractionController, MIN_COMPONENT_SIZE, ResizeHandle, anchored_position, apply_resize};
pub use drag::{DragContext, DragData, DragKind, DropError, DropResult};
pub use input::{KeyEvent, Modifiers, MouseButton, PointerEvent};
pub use selection::{SelectionBox, SelectionState};
pub use snap::{GRID_SIZE, SnapResult, snap_point, snap_size, snap_to_grid};
pub use store::{CanvasEvent, CanvasEventKind, CanvasSettings, CanvasSnapshot, CanvasStore, DUPLICATE_OFFSET};
pub use templates::TemplateRegistry;
