//! Gesture scripts: recorded UI input replayed against a canvas.
//!
//! Components are addressed by their index in stacking order, since ids are
//! generated at drop time.

use autostack_core::{
    CanvasStore, ComponentId, ComponentType, ContextMenuAction, DragContext, InteractionController, KeyEvent,
    Modifiers, PointerEvent, ResizeHandle,
};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Script errors.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Step {step}: no component at index {index}")]
    NoSuchComponent { step: usize, index: usize },
}

/// One recorded input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    Pointer { event: PointerEvent },
    Key { event: KeyEvent },
    Wheel { delta_y: f64 },
    /// Pick up a template from the component menu.
    BeginDrag { component_type: ComponentType },
    /// Release a menu drag outside the canvas.
    CancelDrag,
    Drop { at: Point },
    Click {
        component: usize,
        #[serde(default)]
        modifiers: Modifiers,
    },
    DragStart { component: usize, at: Point },
    DragEnd { at: Point },
    ResizeStart { component: usize, handle: ResizeHandle, at: Point },
    ContextMenu { at: Point },
    ContextAction { action: ContextMenuAction },
    Undo,
    Redo,
    ToggleGrid,
    SetSnap { enabled: bool },
}

/// A sequence of steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub steps: Vec<Step>,
}

impl Script {
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let json = fs::read_to_string(path)
            .map_err(|e| ScriptError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        serde_json::from_str(json).map_err(|e| ScriptError::Parse(e.to_string()))
    }
}

/// Summary of a replay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayReport {
    pub steps: usize,
    pub rejected_drops: usize,
}

/// Drives a store through the same paths the UI would.
pub struct Replayer<'a> {
    store: &'a mut CanvasStore,
    controller: InteractionController,
    drag: DragContext,
    report: ReplayReport,
}

impl<'a> Replayer<'a> {
    pub fn new(store: &'a mut CanvasStore) -> Self {
        Self {
            store,
            controller: InteractionController::new(),
            drag: DragContext::new(),
            report: ReplayReport::default(),
        }
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    fn component_at(&self, step: usize, index: usize) -> Result<ComponentId, ScriptError> {
        self.store
            .components()
            .get(index)
            .map(|c| c.id)
            .ok_or(ScriptError::NoSuchComponent { step, index })
    }

    /// Apply a single step. `index` is only used in error messages.
    pub fn apply(&mut self, index: usize, step: &Step) -> Result<(), ScriptError> {
        log::trace!("Step {}: {:?}", index, step);
        match step {
            Step::Pointer { event } => self.controller.handle_pointer_event(self.store, event.clone()),
            Step::Key { event } => self.controller.handle_key_event(self.store, event.clone()),
            Step::Wheel { delta_y } => self.controller.on_wheel(self.store, *delta_y),
            Step::BeginDrag { component_type } => self.drag.begin_component(*component_type),
            Step::CancelDrag => self.drag.end(),
            Step::Drop { at } => {
                if let Err(e) = self.controller.on_drop(self.store, &mut self.drag, *at) {
                    log::warn!("Step {}: drop rejected: {}", index, e);
                    self.report.rejected_drops += 1;
                }
            }
            Step::Click { component, modifiers } => {
                let id = self.component_at(index, *component)?;
                self.controller.on_component_click(self.store, id, *modifiers);
            }
            Step::DragStart { component, at } => {
                let id = self.component_at(index, *component)?;
                self.controller.on_component_drag_started(self.store, id, *at);
            }
            Step::DragEnd { at } => {
                self.controller.on_component_drag_ended(self.store, *at);
            }
            Step::ResizeStart { component, handle, at } => {
                let id = self.component_at(index, *component)?;
                self.controller.on_resize_handle_down(self.store, id, *handle, *at);
            }
            Step::ContextMenu { at } => {
                self.controller.on_context_menu(self.store, *at);
            }
            Step::ContextAction { action } => {
                self.controller.on_context_menu_action(self.store, *action);
            }
            Step::Undo => {
                self.store.undo();
            }
            Step::Redo => {
                self.store.redo();
            }
            Step::ToggleGrid => self.store.toggle_grid(),
            Step::SetSnap { enabled } => self.store.set_snap_to_grid(*enabled),
        }
        self.report.steps += 1;
        Ok(())
    }

    /// Apply every step in order, stopping at the first error.
    pub fn run(mut self, script: &Script) -> Result<ReplayReport, ScriptError> {
        for (index, step) in script.steps.iter().enumerate() {
            self.apply(index, step)?;
        }
        Ok(self.report)
    }
}
