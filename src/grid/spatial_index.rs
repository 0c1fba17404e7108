//! Spatial index over drawn event boxes.
//!
//! R-tree based point queries so pointer hit testing stays O(log n) on busy
//! days with many staff columns.

use rstar::{AABB, RTree, RTreeObject};

use crate::grid::layout::Rect;

/// One drawn event box, keyed by its position in the grid's event list.
#[derive(Debug, Clone, Copy)]
pub struct EventBox {
    pub index: usize,
    pub z_index: i32,
    pub rect: Rect,
}

impl RTreeObject for EventBox {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.rect.min_x, self.rect.min_y],
            [self.rect.max_x, self.rect.max_y],
        )
    }
}

impl PartialEq for EventBox {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

/// Point-queryable set of event boxes.
pub struct EventIndex {
    tree: RTree<EventBox>,
}

impl EventIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Build from boxes in one pass
    pub fn from_boxes<I>(boxes: I) -> Self
    where
        I: IntoIterator<Item = EventBox>,
    {
        Self {
            tree: RTree::bulk_load(boxes.into_iter().collect()),
        }
    }

    pub fn insert(&mut self, event_box: EventBox) {
        self.tree.insert(event_box);
    }

    /// All boxes containing the point
    pub fn query_point(&self, x: f32, y: f32) -> Vec<EventBox> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|b| b.rect.contains(x, y))
            .copied()
            .collect()
    }

    /// Box drawn on top at the point: highest z-index, later event on ties
    pub fn topmost_at(&self, x: f32, y: f32) -> Option<EventBox> {
        self.query_point(x, y)
            .into_iter()
            .max_by_key(|b| (b.z_index, b.index))
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl Default for EventIndex {
    fn default() -> Self {
        Self::new()
    }
}
