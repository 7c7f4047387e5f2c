//! Canvas state store.
//!
//! [`CanvasStore`] is the single owner of placed components, view settings and
//! selection. Every mutation goes through it and is pushed to subscribers as a
//! fresh [`CanvasSnapshot`], plus a [`CanvasEvent`] describing what happened.

use crate::camera::{Camera, clamp_zoom};
use crate::component::{ComponentId, PlacedComponent};
use crate::drag::{DragData, DragKind, DropError, DropResult};
use crate::selection::SelectionState;
use crate::snap::{GRID_SIZE, snap_point, snap_size};
use crate::templates::TemplateRegistry;
use chrono::{DateTime, Utc};
use kurbo::{Point, Size, Vec2};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

/// Maximum number of undo states to keep.
const MAX_UNDO_HISTORY: usize = 50;

/// Offset applied to a duplicated component, in canvas units.
pub const DUPLICATE_OFFSET: Vec2 = Vec2::new(20.0, 20.0);

/// View settings of the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasSettings {
    /// Zoom factor, always within `[MIN_ZOOM, MAX_ZOOM]`.
    pub zoom: f64,
    /// Pan offset in screen pixels.
    pub pan: Vec2,
    /// Whether the visual grid is drawn.
    pub grid_enabled: bool,
    pub grid_size: f64,
    /// Whether positions snap to the grid.
    pub snap_to_grid: bool,
    pub background_color: String,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
            grid_enabled: true,
            grid_size: GRID_SIZE,
            snap_to_grid: true,
            background_color: "#f5f5f5".to_string(),
        }
    }
}

impl CanvasSettings {
    /// The view transform described by these settings.
    pub fn camera(&self) -> Camera {
        Camera::new(self.pan, self.zoom)
    }
}

/// Everything the rendering layer needs to draw the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasSnapshot {
    pub components: Vec<PlacedComponent>,
    pub settings: CanvasSettings,
    pub selection: SelectionState,
}

/// Kind of change published by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanvasEventKind {
    ComponentAdded,
    ComponentRemoved,
    ComponentMoved,
    ComponentResized,
    ComponentSelected,
    SelectionCleared,
    CanvasZoomed,
    CanvasPanned,
    GridToggled,
    SnapToggled,
    HistoryRestored,
}

/// A change notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasEvent {
    pub kind: CanvasEventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<ComponentId>,
    pub timestamp: DateTime<Utc>,
}

/// Single source of truth for canvas state.
#[derive(Debug)]
pub struct CanvasStore {
    registry: Arc<TemplateRegistry>,
    components: Vec<PlacedComponent>,
    settings: CanvasSettings,
    selection: SelectionState,
    undo_stack: Vec<Vec<PlacedComponent>>,
    redo_stack: Vec<Vec<PlacedComponent>>,
    snapshot_subscribers: Vec<Sender<CanvasSnapshot>>,
    event_subscribers: Vec<Sender<CanvasEvent>>,
}

impl CanvasStore {
    /// Create an empty canvas with default settings.
    pub fn new(registry: Arc<TemplateRegistry>) -> Self {
        Self::with_settings(registry, CanvasSettings::default())
    }

    /// Create an empty canvas with the given settings.
    pub fn with_settings(registry: Arc<TemplateRegistry>, mut settings: CanvasSettings) -> Self {
        settings.zoom = clamp_zoom(settings.zoom);
        Self {
            registry,
            components: Vec::new(),
            settings,
            selection: SelectionState::default(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            snapshot_subscribers: Vec::new(),
            event_subscribers: Vec::new(),
        }
    }

    // --- Queries ---

    pub fn registry(&self) -> &Arc<TemplateRegistry> {
        &self.registry
    }

    /// Components in stacking order (back to front).
    pub fn components(&self) -> &[PlacedComponent] {
        &self.components
    }

    pub fn component(&self, id: ComponentId) -> Option<&PlacedComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn settings(&self) -> &CanvasSettings {
        &self.settings
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The current view transform.
    pub fn camera(&self) -> Camera {
        self.settings.camera()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Copy of the full state.
    pub fn snapshot(&self) -> CanvasSnapshot {
        CanvasSnapshot {
            components: self.components.clone(),
            settings: self.settings.clone(),
            selection: self.selection.clone(),
        }
    }

    // --- Subscriptions ---

    /// Receive a snapshot after every change.
    ///
    /// The receiver starts out holding the current state.
    pub fn subscribe(&mut self) -> Receiver<CanvasSnapshot> {
        let (tx, rx) = channel();
        // Cannot fail: the receiver is still alive.
        let _ = tx.send(self.snapshot());
        self.snapshot_subscribers.push(tx);
        rx
    }

    /// Receive a [`CanvasEvent`] after every change.
    pub fn subscribe_events(&mut self) -> Receiver<CanvasEvent> {
        let (tx, rx) = channel();
        self.event_subscribers.push(tx);
        rx
    }

    fn publish(&mut self, kind: CanvasEventKind, component_id: Option<ComponentId>) {
        log::debug!("Canvas change: {:?} {:?}", kind, component_id);

        if !self.snapshot_subscribers.is_empty() {
            let snapshot = self.snapshot();
            self.snapshot_subscribers
                .retain(|tx| tx.send(snapshot.clone()).is_ok());
        }

        if !self.event_subscribers.is_empty() {
            let event = CanvasEvent {
                kind,
                component_id,
                timestamp: Utc::now(),
            };
            self.event_subscribers
                .retain(|tx| tx.send(event.clone()).is_ok());
        }
    }

    // --- Components ---

    fn snap(&self, position: Point) -> Point {
        snap_point(position, self.settings.snap_to_grid, self.settings.grid_size).point
    }

    fn find_mut(&mut self, id: ComponentId) -> Option<&mut PlacedComponent> {
        self.components.iter_mut().find(|c| c.id == id)
    }

    /// Place a new component from a drag payload at a canvas-space position.
    ///
    /// Returns the snapped position, or why the drop was rejected. A rejected
    /// drop leaves the store untouched.
    pub fn add_component(&mut self, drag: &DragData, position: Point) -> DropResult {
        if drag.kind != DragKind::Component {
            return Err(DropError::NotAComponentDrag);
        }
        let component_type = drag.component_type.ok_or(DropError::MissingComponentType)?;
        let Some(template) = self.registry.get_template(component_type) else {
            log::warn!("Rejected drop of unknown component type {}", component_type);
            return Err(DropError::InvalidTemplate(component_type));
        };

        let snapped = self.snap(position);
        let component = PlacedComponent::from_template(template, snapped, self.components.len());
        let id = component.id;
        self.components.push(component);
        self.publish(CanvasEventKind::ComponentAdded, Some(id));
        Ok(snapped)
    }

    /// Move a component, snapping to the grid when enabled.
    /// Returns false if `id` is unknown.
    pub fn update_component_position(&mut self, id: ComponentId, position: Point) -> bool {
        let snapped = self.snap(position);
        let Some(component) = self.find_mut(id) else {
            log::debug!("Ignoring move of unknown component {}", id);
            return false;
        };
        component.position = snapped;
        component.touch();
        self.publish(CanvasEventKind::ComponentMoved, Some(id));
        true
    }

    /// Resize a component; width and height round to the nearest grid multiple.
    /// Returns false if `id` is unknown.
    pub fn update_component_size(&mut self, id: ComponentId, size: Size) -> bool {
        let snapped = snap_size(size, self.settings.grid_size);
        let Some(component) = self.find_mut(id) else {
            log::debug!("Ignoring resize of unknown component {}", id);
            return false;
        };
        component.size = snapped;
        component.touch();
        self.publish(CanvasEventKind::ComponentResized, Some(id));
        true
    }

    /// Move and resize a component as one change.
    ///
    /// The size rounds to the grid and the position snaps when snapping is on,
    /// exactly as the separate updates do. Returns false if `id` is unknown.
    pub fn update_component_geometry(&mut self, id: ComponentId, position: Point, size: Size) -> bool {
        let snapped_position = self.snap(position);
        let snapped_size = snap_size(size, self.settings.grid_size);
        let Some(component) = self.find_mut(id) else {
            log::debug!("Ignoring geometry update of unknown component {}", id);
            return false;
        };
        component.position = snapped_position;
        component.size = snapped_size;
        component.touch();
        self.publish(CanvasEventKind::ComponentResized, Some(id));
        true
    }

    /// Put back a previously captured copy of a component, geometry included.
    ///
    /// Used to abandon a gesture. Returns false if the component no longer exists.
    pub fn restore_component(&mut self, original: PlacedComponent) -> bool {
        let id = original.id;
        let Some(component) = self.find_mut(id) else {
            return false;
        };
        *component = original;
        self.publish(CanvasEventKind::ComponentMoved, Some(id));
        true
    }

    /// Remove a component and drop it from the selection.
    /// Returns false if `id` is unknown.
    pub fn delete_component(&mut self, id: ComponentId) -> bool {
        let before = self.components.len();
        self.components.retain(|c| c.id != id);
        if self.components.len() == before {
            log::debug!("Ignoring delete of unknown component {}", id);
            return false;
        }
        self.selection.remove(id);
        self.publish(CanvasEventKind::ComponentRemoved, Some(id));
        true
    }

    /// Clone a component next to the original and select the clone.
    /// Returns the new id, or `None` if `id` is unknown.
    pub fn duplicate_component(&mut self, id: ComponentId) -> Option<ComponentId> {
        let Some(source) = self.component(id) else {
            log::debug!("Ignoring duplicate of unknown component {}", id);
            return None;
        };
        let copy = source.duplicate(DUPLICATE_OFFSET, self.components.len());
        let new_id = copy.id;
        self.components.push(copy);
        self.publish(CanvasEventKind::ComponentAdded, Some(new_id));
        self.select_component(new_id, false);
        Some(new_id)
    }

    // --- Selection ---

    /// Select a component. Without `multi_select` the selection becomes
    /// exactly `[id]`; with it, `id` is appended once.
    pub fn select_component(&mut self, id: ComponentId, multi_select: bool) -> bool {
        if self.component(id).is_none() {
            log::debug!("Ignoring selection of unknown component {}", id);
            return false;
        }
        self.selection.select(id, multi_select);
        self.publish(CanvasEventKind::ComponentSelected, Some(id));
        true
    }

    /// Clear the selection and any selection box.
    pub fn deselect_all(&mut self) {
        self.selection.clear();
        self.publish(CanvasEventKind::SelectionCleared, None);
    }

    // --- View ---

    /// Set the zoom factor, clamped into range.
    pub fn update_zoom(&mut self, zoom: f64) {
        self.settings.zoom = clamp_zoom(zoom);
        self.publish(CanvasEventKind::CanvasZoomed, None);
    }

    /// Replace the pan offset.
    pub fn update_pan(&mut self, pan: Vec2) {
        self.settings.pan = pan;
        self.publish(CanvasEventKind::CanvasPanned, None);
    }

    /// Show or hide the visual grid.
    pub fn toggle_grid(&mut self) {
        self.settings.grid_enabled = !self.settings.grid_enabled;
        self.publish(CanvasEventKind::GridToggled, None);
    }

    /// Turn position snapping on or off.
    pub fn set_snap_to_grid(&mut self, enabled: bool) {
        if self.settings.snap_to_grid == enabled {
            return;
        }
        self.settings.snap_to_grid = enabled;
        self.publish(CanvasEventKind::SnapToggled, None);
    }

    // --- History ---

    /// Push current components to the undo stack (call before making changes).
    pub fn push_undo(&mut self) {
        self.push_undo_state(self.components.clone());
    }

    /// Copy of the component list, for recording an undo point after the fact.
    pub fn checkpoint(&self) -> Vec<PlacedComponent> {
        self.components.clone()
    }

    /// Record a previously captured component list as the latest undo point.
    pub fn push_undo_state(&mut self, components: Vec<PlacedComponent>) {
        self.undo_stack.push(components);
        self.redo_stack.clear();
        if self.undo_stack.len() > MAX_UNDO_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    /// Run `op` and record an undo point for it if it reports a change.
    pub fn with_undo(&mut self, op: impl FnOnce(&mut Self) -> bool) -> bool {
        let checkpoint = self.checkpoint();
        let changed = op(self);
        if changed {
            self.push_undo_state(checkpoint);
        }
        changed
    }

    /// Undo the last recorded change.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.components, previous);
        self.redo_stack.push(current);
        self.after_history_change();
        true
    }

    /// Redo the last undone change.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.components, next);
        self.undo_stack.push(current);
        self.after_history_change();
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    fn after_history_change(&mut self) {
        let components = &self.components;
        self.selection
            .retain_existing(|id| components.iter().any(|c| c.id == id));
        self.publish(CanvasEventKind::HistoryRestored, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{MAX_ZOOM, MIN_ZOOM};
    use crate::component::{ComponentCategory, ComponentProperties, ComponentTemplate, ComponentType};
    use uuid::Uuid;

    fn store() -> CanvasStore {
        CanvasStore::new(Arc::new(TemplateRegistry::builtin()))
    }

    fn add(store: &mut CanvasStore, component_type: ComponentType, at: Point) -> ComponentId {
        store
            .add_component(&DragData::component(component_type), at)
            .unwrap();
        store.components().last().unwrap().id
    }

    #[test]
    fn test_add_component_snaps_to_grid() {
        let registry = TemplateRegistry::new(vec![ComponentTemplate {
            component_type: ComponentType::Database,
            default_name: "Database".to_string(),
            icon: "database".to_string(),
            color: "#3B82F6".to_string(),
            default_size: Size::new(120.0, 80.0),
            default_properties: ComponentProperties::default(),
            description: String::new(),
            category: ComponentCategory::Data,
        }]);
        let mut store = CanvasStore::new(Arc::new(registry));

        let position = store
            .add_component(
                &DragData::component(ComponentType::Database),
                Point::new(47.0, 53.0),
            )
            .unwrap();

        assert_eq!(position, Point::new(40.0, 60.0));
        let component = &store.components()[0];
        assert_eq!(component.position, Point::new(40.0, 60.0));
        assert_eq!(component.size, Size::new(120.0, 80.0));
        assert_eq!(component.metadata.z_index, 0);
    }

    #[test]
    fn test_add_unknown_template_is_rejected() {
        let mut store = CanvasStore::new(Arc::new(TemplateRegistry::new(Vec::new())));
        let result = store.add_component(
            &DragData::component(ComponentType::Cache),
            Point::new(10.0, 10.0),
        );

        assert_eq!(result, Err(DropError::InvalidTemplate(ComponentType::Cache)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_without_type_or_wrong_kind() {
        let mut store = store();
        let mut data = DragData::component(ComponentType::Api);
        data.component_type = None;
        assert_eq!(
            store.add_component(&data, Point::ZERO),
            Err(DropError::MissingComponentType)
        );

        data.kind = DragKind::Connection;
        assert_eq!(
            store.add_component(&data, Point::ZERO),
            Err(DropError::NotAComponentDrag)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_z_index_follows_count() {
        let mut store = store();
        add(&mut store, ComponentType::Api, Point::ZERO);
        add(&mut store, ComponentType::Cache, Point::ZERO);
        let z: Vec<_> = store.components().iter().map(|c| c.metadata.z_index).collect();
        assert_eq!(z, vec![0, 1]);
    }

    #[test]
    fn test_update_position_snaps() {
        let mut store = store();
        let id = add(&mut store, ComponentType::Api, Point::ZERO);

        assert!(store.update_component_position(id, Point::new(31.0, 9.0)));
        assert_eq!(store.component(id).unwrap().position, Point::new(40.0, 0.0));

        store.set_snap_to_grid(false);
        assert!(store.update_component_position(id, Point::new(31.0, 9.0)));
        assert_eq!(store.component(id).unwrap().position, Point::new(31.0, 9.0));
    }

    #[test]
    fn test_update_size_rounds_to_grid() {
        let mut store = store();
        let id = add(&mut store, ComponentType::Service, Point::ZERO);

        assert!(store.update_component_size(id, Size::new(131.0, 49.0)));
        assert_eq!(store.component(id).unwrap().size, Size::new(140.0, 40.0));
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut store = store();
        add(&mut store, ComponentType::Api, Point::ZERO);
        let before = store.snapshot();
        let events = store.subscribe_events();

        let ghost = Uuid::new_v4();
        assert!(!store.update_component_position(ghost, Point::new(100.0, 100.0)));
        assert!(!store.update_component_size(ghost, Size::new(100.0, 100.0)));
        assert!(!store.delete_component(ghost));
        assert!(store.duplicate_component(ghost).is_none());
        assert!(!store.select_component(ghost, false));

        assert_eq!(store.snapshot(), before);
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn test_delete_then_move_is_noop() {
        let mut store = store();
        let keep = add(&mut store, ComponentType::Api, Point::ZERO);
        let gone = add(&mut store, ComponentType::Cache, Point::new(100.0, 0.0));
        store.select_component(gone, false);

        assert!(store.delete_component(gone));
        assert!(store.selection().selected_components.is_empty());
        let after_delete = store.components().to_vec();

        assert!(!store.update_component_position(gone, Point::new(300.0, 300.0)));
        assert_eq!(store.components(), after_delete.as_slice());
        assert_eq!(store.len(), 1);
        assert!(store.component(keep).is_some());
    }

    #[test]
    fn test_duplicate_component() {
        let mut store = store();
        let id = add(&mut store, ComponentType::Queue, Point::new(40.0, 60.0));
        assert!(store.selection().selected_components.is_empty());

        let copy_id = store.duplicate_component(id).unwrap();
        assert_ne!(copy_id, id);

        let source = store.component(id).unwrap().clone();
        let copy = store.component(copy_id).unwrap();
        assert_eq!(copy.position, source.position + Vec2::new(20.0, 20.0));
        assert_eq!(copy.metadata.z_index, 1);
        assert_eq!(copy.name, source.name);
        assert_eq!(store.selection().selected_components, vec![copy_id]);
    }

    #[test]
    fn test_selection_rules() {
        let mut store = store();
        let a = add(&mut store, ComponentType::Api, Point::ZERO);
        let b = add(&mut store, ComponentType::Cache, Point::ZERO);

        store.select_component(a, false);
        store.select_component(b, false);
        assert_eq!(store.selection().selected_components, vec![b]);

        store.select_component(a, true);
        store.select_component(a, true);
        assert_eq!(store.selection().selected_components, vec![b, a]);

        store.deselect_all();
        assert!(store.selection().is_empty());
        assert!(!store.selection().multi_select);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut store = store();
        for zoom in [0.1, 3.0, 1.7, -4.0, 2.0000001, 0.4999, f64::INFINITY] {
            store.update_zoom(zoom);
            let current = store.settings().zoom;
            assert!((MIN_ZOOM..=MAX_ZOOM).contains(&current), "zoom {current}");
        }
        store.update_zoom(1.25);
        assert!((store.settings().zoom - 1.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pan_and_grid() {
        let mut store = store();
        store.update_pan(Vec2::new(-35.0, 12.5));
        assert_eq!(store.settings().pan, Vec2::new(-35.0, 12.5));

        assert!(store.settings().grid_enabled);
        store.toggle_grid();
        assert!(!store.settings().grid_enabled);
        // Snapping is controlled separately from the visual grid.
        assert!(store.settings().snap_to_grid);
    }

    #[test]
    fn test_subscribe_receives_current_then_updates() {
        let mut store = store();
        let rx = store.subscribe();

        let initial = rx.try_recv().unwrap();
        assert!(initial.components.is_empty());

        add(&mut store, ComponentType::Cdn, Point::new(20.0, 20.0));
        let update = rx.try_recv().unwrap();
        assert_eq!(update.components.len(), 1);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let mut store = store();
        let rx = store.subscribe();
        drop(rx);
        store.toggle_grid();
        assert!(store.snapshot_subscribers.is_empty());
    }

    #[test]
    fn test_events() {
        let mut store = store();
        let events = store.subscribe_events();
        let id = add(&mut store, ComponentType::Api, Point::ZERO);
        store.update_zoom(1.5);

        let first = events.try_recv().unwrap();
        assert_eq!(first.kind, CanvasEventKind::ComponentAdded);
        assert_eq!(first.component_id, Some(id));
        assert_eq!(events.try_recv().unwrap().kind, CanvasEventKind::CanvasZoomed);
    }

    #[test]
    fn test_undo_redo() {
        let mut store = store();

        store.push_undo();
        let id = add(&mut store, ComponentType::Api, Point::ZERO);
        store.select_component(id, false);
        assert!(store.can_undo());

        assert!(store.undo());
        assert!(store.is_empty());
        assert!(store.selection().selected_components.is_empty());
        assert!(store.can_redo());

        assert!(store.redo());
        assert!(store.component(id).is_some());
        assert!(!store.redo());
    }

    #[test]
    fn test_push_undo_clears_redo_and_is_bounded() {
        let mut store = store();
        store.push_undo();
        add(&mut store, ComponentType::Api, Point::ZERO);
        store.undo();
        store.push_undo();
        assert!(!store.can_redo());

        for _ in 0..(MAX_UNDO_HISTORY + 10) {
            store.push_undo();
        }
        assert_eq!(store.undo_stack.len(), MAX_UNDO_HISTORY);
    }

    #[test]
    fn test_with_undo_records_only_changes() {
        let mut store = store();
        assert!(!store.with_undo(|s| s.delete_component(Uuid::new_v4())));
        assert!(!store.can_undo());

        let id = add(&mut store, ComponentType::Api, Point::ZERO);
        assert!(store.with_undo(|s| s.delete_component(id)));
        assert!(store.undo());
        assert!(store.component(id).is_some());
    }

    #[test]
    fn test_update_geometry_publishes_once() {
        let mut store = store();
        store.set_snap_to_grid(false);
        let id = add(&mut store, ComponentType::Database, Point::new(100.0, 100.0));
        let rx = store.subscribe();
        let _ = rx.try_recv();

        assert!(store.update_component_geometry(id, Point::new(93.0, 87.0), Size::new(127.0, 93.0)));
        let update = rx.try_recv().unwrap();
        assert_eq!(update.components[0].position, Point::new(93.0, 87.0));
        assert_eq!(update.components[0].size, Size::new(120.0, 100.0));
        assert!(rx.try_recv().is_err());

        assert!(!store.update_component_geometry(Uuid::new_v4(), Point::ZERO, Size::new(60.0, 60.0)));
    }

    #[test]
    fn test_push_undo_state_records_checkpoint() {
        let mut store = store();
        let checkpoint = store.checkpoint();
        let id = add(&mut store, ComponentType::Api, Point::ZERO);

        store.push_undo_state(checkpoint);
        assert!(store.undo());
        assert!(store.component(id).is_none());
    }

    #[test]
    fn test_restore_component() {
        let mut store = store();
        let id = add(&mut store, ComponentType::Service, Point::ZERO);
        let original = store.component(id).unwrap().clone();

        store.update_component_size(id, Size::new(300.0, 300.0));
        assert!(store.restore_component(original.clone()));
        assert_eq!(store.component(id), Some(&original));
    }

    #[test]
    fn test_settings_zoom_clamped_on_construction() {
        let settings = CanvasSettings {
            zoom: 7.0,
            ..Default::default()
        };
        let store = CanvasStore::with_settings(Arc::new(TemplateRegistry::builtin()), settings);
        assert!((store.settings().zoom - MAX_ZOOM).abs() < f64::EPSILON);
    }
}
