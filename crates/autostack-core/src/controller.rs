//! Translates raw pointer, wheel and keyboard input into store mutations.
//!
//! The controller owns only transient gesture state. All persistent state
//! lives in the [`CanvasStore`] passed into each call, and every conversion
//! between screen and canvas space uses the store's [`Camera`](crate::camera::Camera).

use crate::camera::ZOOM_STEP;
use crate::component::{ComponentId, PlacedComponent};
use crate::drag::{DragContext, DragKind, DropError, DropResult};
use crate::input::{KeyEvent, Modifiers, MouseButton, PointerEvent};
use crate::snap::snap_size;
use crate::store::CanvasStore;
use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Smallest width or height a resize can produce, in canvas units.
pub const MIN_COMPONENT_SIZE: f64 = 50.0;

/// Corner handle used to resize a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    Se,
    Sw,
    Ne,
    Nw,
}

/// Apply a canvas-space cursor delta to a component's geometry.
///
/// The corner opposite `handle` stays fixed, including when the size is
/// clamped to [`MIN_COMPONENT_SIZE`].
pub fn apply_resize(handle: ResizeHandle, position: Point, size: Size, delta: Vec2) -> (Point, Size) {
    let grows_left = matches!(handle, ResizeHandle::Sw | ResizeHandle::Nw);
    let grows_up = matches!(handle, ResizeHandle::Ne | ResizeHandle::Nw);

    let width = if grows_left { size.width - delta.x } else { size.width + delta.x };
    let height = if grows_up { size.height - delta.y } else { size.height + delta.y };
    let new_size = Size::new(width.max(MIN_COMPONENT_SIZE), height.max(MIN_COMPONENT_SIZE));

    (anchored_position(handle, position, size, new_size), new_size)
}

/// Top-left corner that keeps the corner opposite `handle` where it was
/// when the component changes from `size` to `new_size`.
pub fn anchored_position(handle: ResizeHandle, position: Point, size: Size, new_size: Size) -> Point {
    let mut new_position = position;
    if matches!(handle, ResizeHandle::Sw | ResizeHandle::Nw) {
        new_position.x += size.width - new_size.width;
    }
    if matches!(handle, ResizeHandle::Ne | ResizeHandle::Nw) {
        new_position.y += size.height - new_size.height;
    }
    new_position
}

/// Action offered by the component context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextMenuAction {
    Delete,
    Duplicate,
}

/// An open context menu.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContextMenu {
    /// Screen position relative to the canvas container.
    pub position: Point,
    /// Component under the pointer when the menu opened.
    pub component_id: Option<ComponentId>,
}

/// Gesture currently in progress.
#[derive(Debug, Clone, Default)]
enum Gesture {
    #[default]
    Idle,
    Panning,
    Moving {
        original: PlacedComponent,
        /// Pointer position relative to the component's top-left, in canvas units.
        grab_offset: Vec2,
        /// Component list before the gesture, recorded for undo once something changes.
        checkpoint: Vec<PlacedComponent>,
    },
    Resizing {
        original: PlacedComponent,
        handle: ResizeHandle,
        start: Point,
        checkpoint: Vec<PlacedComponent>,
    },
}

/// Pointer-driven editing of a [`CanvasStore`].
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    gesture: Gesture,
    last_mouse_position: Option<Point>,
    context_menu: Option<ContextMenu>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Moving { .. })
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.gesture, Gesture::Panning)
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.gesture, Gesture::Resizing { .. })
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.gesture, Gesture::Idle)
    }

    pub fn resize_handle(&self) -> Option<ResizeHandle> {
        match self.gesture {
            Gesture::Resizing { handle, .. } => Some(handle),
            _ => None,
        }
    }

    pub fn last_mouse_position(&self) -> Option<Point> {
        self.last_mouse_position
    }

    pub fn context_menu(&self) -> Option<&ContextMenu> {
        self.context_menu.as_ref()
    }

    pub fn close_context_menu(&mut self) {
        self.context_menu = None;
    }

    /// Dispatch a pointer event on the canvas background.
    pub fn handle_pointer_event(&mut self, store: &mut CanvasStore, event: PointerEvent) {
        match event {
            PointerEvent::Down {
                position,
                button,
                modifiers,
            } => self.on_pointer_down(store, position, button, modifiers),
            PointerEvent::Move { position } => self.on_pointer_move(store, position),
            PointerEvent::Up { position } => self.on_pointer_up(store, position),
            PointerEvent::Scroll { delta, .. } => self.on_wheel(store, delta.y),
            PointerEvent::Leave => self.on_pointer_leave(store),
        }
    }

    /// Dispatch a keyboard event.
    pub fn handle_key_event(&mut self, store: &mut CanvasStore, event: KeyEvent) {
        let KeyEvent::Pressed(key) = event else {
            return;
        };
        match key.as_str() {
            "Escape" => {
                self.cancel(store);
                self.close_context_menu();
            }
            "Delete" | "Backspace" => {
                if !self.is_idle() {
                    return;
                }
                let selected = store.selection().selected_components.clone();
                if selected.is_empty() {
                    return;
                }
                store.with_undo(|s| {
                    let mut changed = false;
                    for id in selected {
                        changed |= s.delete_component(id);
                    }
                    changed
                });
            }
            _ => {}
        }
    }

    /// Drop the payload held by `drag` at a screen position.
    pub fn on_drop(&mut self, store: &mut CanvasStore, drag: &mut DragContext, screen_point: Point) -> DropResult {
        let data = drag.take().ok_or(DropError::NoActiveDrag)?;
        if data.kind != DragKind::Component {
            return Err(DropError::NotAComponentDrag);
        }

        let canvas_point = store.camera().screen_to_canvas(screen_point);
        let mut result = Err(DropError::NoActiveDrag);
        store.with_undo(|s| {
            result = s.add_component(&data, canvas_point);
            result.is_ok()
        });
        self.close_context_menu();
        result
    }

    /// Begin moving a placed component that was grabbed at `screen_point`.
    pub fn on_component_drag_started(&mut self, store: &mut CanvasStore, id: ComponentId, screen_point: Point) {
        self.close_context_menu();
        self.cancel(store);
        let Some(component) = store.component(id) else {
            log::debug!("Drag started on unknown component {}", id);
            return;
        };

        let canvas_point = store.camera().screen_to_canvas(screen_point);
        self.gesture = Gesture::Moving {
            grab_offset: canvas_point - component.position,
            original: component.clone(),
            checkpoint: store.checkpoint(),
        };
        self.last_mouse_position = Some(screen_point);
    }

    /// Finish a component move with the pointer at `screen_point`.
    /// Returns false if no move was in progress.
    pub fn on_component_drag_ended(&mut self, store: &mut CanvasStore, screen_point: Point) -> bool {
        let Gesture::Moving {
            original,
            grab_offset,
            checkpoint,
        } = std::mem::take(&mut self.gesture)
        else {
            return false;
        };
        self.last_mouse_position = None;
        let target = store.camera().screen_to_canvas(screen_point) - grab_offset;
        let moved = store.update_component_position(original.id, target);
        commit_if_changed(store, &original, checkpoint);
        moved
    }

    /// Pointer pressed on the canvas background.
    ///
    /// Right button or Alt starts panning; a plain press clears the selection.
    pub fn on_pointer_down(&mut self, store: &mut CanvasStore, position: Point, button: MouseButton, modifiers: Modifiers) {
        if button == MouseButton::Right || modifiers.alt {
            self.cancel(store);
            self.gesture = Gesture::Panning;
            self.last_mouse_position = Some(position);
            self.close_context_menu();
        } else if self.is_idle() {
            store.deselect_all();
            self.close_context_menu();
        }
    }

    pub fn on_pointer_move(&mut self, store: &mut CanvasStore, position: Point) {
        match &self.gesture {
            Gesture::Idle => return,
            Gesture::Panning => {
                if let Some(last) = self.last_mouse_position {
                    let pan = store.settings().pan + (position - last);
                    store.update_pan(pan);
                }
            }
            Gesture::Moving {
                original, grab_offset, ..
            } => {
                let target = store.camera().screen_to_canvas(position) - *grab_offset;
                store.update_component_position(original.id, target);
            }
            Gesture::Resizing {
                original, handle, start, ..
            } => {
                let delta = store.camera().screen_delta_to_canvas(position - *start);
                let (_, size) = apply_resize(*handle, original.position, original.size, delta);
                // Round first so the anchored corner is computed from the stored size.
                let size = snap_size(size, store.settings().grid_size);
                let new_position = anchored_position(*handle, original.position, original.size, size);
                store.update_component_geometry(original.id, new_position, size);
            }
        }
        self.last_mouse_position = Some(position);
    }

    /// Pointer released: complete any move or resize and return to idle.
    pub fn on_pointer_up(&mut self, store: &mut CanvasStore, position: Point) {
        if self.is_dragging() {
            self.on_component_drag_ended(store, position);
        } else if let Gesture::Resizing {
            original, checkpoint, ..
        } = std::mem::take(&mut self.gesture)
        {
            commit_if_changed(store, &original, checkpoint);
        }
        self.gesture = Gesture::Idle;
        self.last_mouse_position = None;
    }

    /// Pointer left the canvas: abandon the gesture instead of leaving it stuck.
    pub fn on_pointer_leave(&mut self, store: &mut CanvasStore) {
        self.cancel(store);
    }

    /// Abort the current gesture, restoring the component it was editing.
    /// No undo point is recorded.
    pub fn cancel(&mut self, store: &mut CanvasStore) {
        match std::mem::take(&mut self.gesture) {
            Gesture::Moving { original, .. } | Gesture::Resizing { original, .. } => {
                log::debug!("Cancelled gesture on component {}", original.id);
                if geometry_changed(store, &original) {
                    store.restore_component(original);
                }
            }
            Gesture::Panning | Gesture::Idle => {}
        }
        self.last_mouse_position = None;
    }

    /// Wheel tick: zoom in for negative `delta_y`, out for positive.
    pub fn on_wheel(&mut self, store: &mut CanvasStore, delta_y: f64) {
        if delta_y == 0.0 {
            return;
        }
        let step = if delta_y > 0.0 { -ZOOM_STEP } else { ZOOM_STEP };
        let zoom = store.settings().zoom + step;
        store.update_zoom(zoom);
    }

    /// Click on a component; Ctrl/Cmd adds it to the selection.
    pub fn on_component_click(&mut self, store: &mut CanvasStore, id: ComponentId, modifiers: Modifiers) {
        store.select_component(id, modifiers.is_multi_select());
        self.close_context_menu();
    }

    /// Press on one of a component's resize handles.
    pub fn on_resize_handle_down(
        &mut self,
        store: &mut CanvasStore,
        id: ComponentId,
        handle: ResizeHandle,
        screen_point: Point,
    ) {
        self.cancel(store);
        let Some(component) = store.component(id) else {
            log::debug!("Resize started on unknown component {}", id);
            return;
        };
        self.gesture = Gesture::Resizing {
            original: component.clone(),
            handle,
            start: screen_point,
            checkpoint: store.checkpoint(),
        };
        self.last_mouse_position = Some(screen_point);
        store.select_component(id, false);
    }

    /// First component, in stacking order, whose on-screen box contains `screen_point`.
    pub fn hit_test(&self, store: &CanvasStore, screen_point: Point) -> Option<ComponentId> {
        let camera = store.camera();
        store
            .components()
            .iter()
            .find(|c| contains_inclusive(camera.canvas_rect_to_screen(c.bounds()), screen_point))
            .map(|c| c.id)
    }

    /// Open the context menu at `screen_point`, bound to the component under it.
    pub fn on_context_menu(&mut self, store: &CanvasStore, screen_point: Point) -> Option<ComponentId> {
        let component_id = self.hit_test(store, screen_point);
        self.context_menu = Some(ContextMenu {
            position: screen_point,
            component_id,
        });
        component_id
    }

    /// Run a context-menu action against the menu's component and close the menu.
    /// Returns true if the store changed.
    pub fn on_context_menu_action(&mut self, store: &mut CanvasStore, action: ContextMenuAction) -> bool {
        let Some(id) = self.context_menu.take().and_then(|menu| menu.component_id) else {
            return false;
        };
        store.with_undo(|s| match action {
            ContextMenuAction::Delete => s.delete_component(id),
            ContextMenuAction::Duplicate => s.duplicate_component(id).is_some(),
        })
    }
}

fn geometry_changed(store: &CanvasStore, original: &PlacedComponent) -> bool {
    store
        .component(original.id)
        .is_some_and(|c| c.position != original.position || c.size != original.size)
}

/// Record the pre-gesture undo point only if the gesture actually changed something.
fn commit_if_changed(store: &mut CanvasStore, original: &PlacedComponent, checkpoint: Vec<PlacedComponent>) {
    if geometry_changed(store, original) {
        store.push_undo_state(checkpoint);
    }
}

fn contains_inclusive(rect: Rect, point: Point) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}
