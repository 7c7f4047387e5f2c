//! Drag payloads passed from the component menu to the canvas.
//!
//! The payload travels in an explicit [`DragContext`] owned by whoever drives
//! both ends of the gesture, instead of a globally reachable slot.

use crate::component::{ComponentId, ComponentType};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// What is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragKind {
    Component,
    Connection,
}

/// Transfer object describing an in-progress drag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragData {
    #[serde(rename = "type")]
    pub kind: DragKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_type: Option<ComponentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<ComponentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<Uuid>,
}

impl DragData {
    /// Payload for dragging a new component out of the catalog.
    pub fn component(component_type: ComponentType) -> Self {
        Self {
            kind: DragKind::Component,
            component_type: Some(component_type),
            component_id: None,
            connection_id: None,
        }
    }
}

/// Reasons a drop onto the canvas is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropError {
    #[error("No component type provided")]
    MissingComponentType,
    #[error("Invalid component type: {0}")]
    InvalidTemplate(ComponentType),
    #[error("Drag payload is not a component")]
    NotAComponentDrag,
    #[error("No drag in progress")]
    NoActiveDrag,
}

/// Outcome of a drop: the snapped canvas position on success.
pub type DropResult = Result<Point, DropError>;

/// Holds the payload of the drag gesture currently in flight, if any.
#[derive(Debug, Clone, Default)]
pub struct DragContext {
    active: Option<DragData>,
}

impl DragContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag with the given payload, replacing any stale one.
    pub fn begin(&mut self, data: DragData) {
        if self.active.is_some() {
            log::debug!("Replacing unfinished drag payload");
        }
        self.active = Some(data);
    }

    /// Start dragging a catalog template.
    pub fn begin_component(&mut self, component_type: ComponentType) {
        self.begin(DragData::component(component_type));
    }

    /// Payload of the current drag.
    pub fn current(&self) -> Option<&DragData> {
        self.active.as_ref()
    }

    /// Consume the payload (on drop).
    pub fn take(&mut self) -> Option<DragData> {
        self.active.take()
    }

    /// Discard the payload (drag ended without a drop).
    pub fn end(&mut self) {
        self.active = None;
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}
