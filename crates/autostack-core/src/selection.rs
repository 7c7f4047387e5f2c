//! Selection state for components and connections.

use crate::component::ComponentId;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Rubber-band selection rectangle in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionBox {
    pub start: Point,
    pub end: Point,
    pub active: bool,
}

impl SelectionBox {
    /// Normalized rectangle spanned by the two corners.
    pub fn to_rect(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }
}

/// Currently selected items.
///
/// Without `multi_select`, at most one component is selected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    pub selected_components: Vec<ComponentId>,
    pub selected_connections: Vec<Uuid>,
    pub multi_select: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_box: Option<SelectionBox>,
}

impl SelectionState {
    /// Select `id`, replacing the selection unless `multi_select` is set.
    pub fn select(&mut self, id: ComponentId, multi_select: bool) {
        if multi_select {
            if !self.selected_components.contains(&id) {
                self.selected_components.push(id);
            }
        } else {
            self.selected_components.clear();
            self.selected_components.push(id);
        }
        self.multi_select = multi_select;
    }

    /// Remove `id` from the selection. Returns true if it was selected.
    pub fn remove(&mut self, id: ComponentId) -> bool {
        let before = self.selected_components.len();
        self.selected_components.retain(|&c| c != id);
        self.selected_components.len() != before
    }

    /// Drop every selected component for which `exists` is false.
    pub fn retain_existing(&mut self, exists: impl Fn(ComponentId) -> bool) {
        self.selected_components.retain(|&id| exists(id));
    }

    /// Reset to an empty selection.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_selected(&self, id: ComponentId) -> bool {
        self.selected_components.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected_components.is_empty() && self.selected_connections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_select_replaces() {
        let mut selection = SelectionState::default();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        selection.select(a, false);
        selection.select(b, false);

        assert_eq!(selection.selected_components, vec![b]);
        assert!(!selection.multi_select);
    }

    #[test]
    fn test_multi_select_has_no_duplicates() {
        let mut selection = SelectionState::default();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        selection.select(a, true);
        selection.select(b, true);
        selection.select(a, true);

        assert_eq!(selection.selected_components, vec![a, b]);
        assert!(selection.multi_select);
    }

    #[test]
    fn test_single_select_after_multi_collapses() {
        let mut selection = SelectionState::default();
        let a = Uuid::new_v4();
        selection.select(a, true);
        selection.select(Uuid::new_v4(), true);
        selection.select(a, false);

        assert_eq!(selection.selected_components, vec![a]);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut selection = SelectionState::default();
        let a = Uuid::new_v4();
        selection.select(a, false);
        selection.selection_box = Some(SelectionBox {
            start: Point::ZERO,
            end: Point::new(10.0, 10.0),
            active: true,
        });

        assert!(selection.remove(a));
        assert!(!selection.remove(a));

        selection.clear();
        assert!(selection.is_empty());
        assert!(selection.selection_box.is_none());
    }

    #[test]
    fn test_selection_box_rect_is_normalized() {
        let selection_box = SelectionBox {
            start: Point::new(50.0, 40.0),
            end: Point::new(10.0, 90.0),
            active: true,
        };
        assert_eq!(selection_box.to_rect(), Rect::new(10.0, 40.0, 50.0, 90.0));
    }
}
