//! Geometry of the resource/time grid.
//!
//! Columns are laid out resource-major: every visible day for the first
//! resource, then every day for the next. Without resources there is one
//! column per day. A header band of date cells sits above the slot rows.
//!
//! ```text
//! origin
//!   +-----------+-----------+
//!   | date cell | date cell |   header_height
//!   +-----------+-----------+
//!   | 06:00     | 06:00     |   slot_height
//!   | 06:15     | 06:15     |
//!   | ...       | ...       |
//!   +-----------+-----------+
//!     column_width
//! ```

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{CalendarError, CalendarResult};
use crate::input::{CellInfo, ResourceRef};
use crate::settings::CalendarSettings;
use crate::types::{CalendarEvent, Id, Resource, ViewportPoint};
use crate::view::CalendarView;

/// Axis-aligned rectangle, half-open on the max edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + width,
            max_y: y + height,
        }
    }

    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// One day for one resource
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub date: NaiveDate,
    pub resource_id: Option<Id>,
}

/// Cell under a point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutCell {
    Header { column: usize },
    Slot { column: usize, start: NaiveDateTime },
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
    pub origin: ViewportPoint,
    pub columns: Vec<Column>,
    pub column_width: f32,
    pub header_height: f32,
    pub slot_height: f32,
    pub min_time: NaiveTime,
    pub max_time: NaiveTime,
    pub step_minutes: u32,
    /// Slot rows per time-gutter label
    pub timeslots: u32,
}

impl GridLayout {
    /// Lay out `view` around `anchor`. Month view has no time grid.
    pub fn new(
        view: CalendarView,
        anchor: NaiveDate,
        resources: &[Resource],
        settings: &CalendarSettings,
    ) -> CalendarResult<Self> {
        if !view.has_time_grid() {
            return Err(CalendarError::UnsupportedView(view));
        }
        let days = view.visible_days(anchor);
        let columns = if resources.is_empty() {
            days.iter()
                .map(|date| Column {
                    date: *date,
                    resource_id: None,
                })
                .collect()
        } else {
            resources
                .iter()
                .flat_map(|resource| {
                    days.iter().map(move |date| Column {
                        date: *date,
                        resource_id: Some(resource.resource_id.clone()),
                    })
                })
                .collect()
        };

        Ok(Self {
            origin: ViewportPoint::default(),
            columns,
            column_width: settings.column_width,
            header_height: settings.header_height,
            slot_height: settings.slot_height,
            min_time: settings.min_time,
            max_time: settings.max_time,
            step_minutes: settings.step_minutes.max(1),
            timeslots: settings.timeslots.max(1),
        })
    }

    /// Place the grid's top-left corner in the viewport
    pub fn with_origin(mut self, origin: ViewportPoint) -> Self {
        self.origin = origin;
        self
    }

    pub fn slot_count(&self) -> u32 {
        let minutes = (self.max_time - self.min_time).num_minutes().max(0) as u32;
        minutes.div_ceil(self.step_minutes)
    }

    pub fn width(&self) -> f32 {
        self.columns.len() as f32 * self.column_width
    }

    pub fn height(&self) -> f32 {
        self.header_height + self.slot_count() as f32 * self.slot_height
    }

    /// Time-gutter labels: one per group of `timeslots` rows, at the top
    /// edge of the group
    pub fn gutter_labels(&self) -> Vec<(f32, NaiveTime)> {
        (0..self.slot_count())
            .step_by(self.timeslots as usize)
            .map(|row| {
                let y = self.origin.y + self.header_height + row as f32 * self.slot_height;
                let time = self.min_time + Duration::minutes(i64::from(row * self.step_minutes));
                (y, time)
            })
            .collect()
    }

    fn column_at(&self, x: f32) -> Option<usize> {
        let local = x - self.origin.x;
        if local < 0.0 {
            return None;
        }
        let column = (local / self.column_width) as usize;
        (column < self.columns.len()).then_some(column)
    }

    /// Header or slot cell under a viewport point
    pub fn cell_at(&self, point: ViewportPoint) -> Option<LayoutCell> {
        let column = self.column_at(point.x)?;
        let local_y = point.y - self.origin.y;
        if local_y < 0.0 {
            return None;
        }
        if local_y < self.header_height {
            return Some(LayoutCell::Header { column });
        }
        let row = ((local_y - self.header_height) / self.slot_height) as u32;
        if row >= self.slot_count() {
            return None;
        }
        let start = self.columns.get(column)?.date.and_time(self.min_time)
            + Duration::minutes(i64::from(row * self.step_minutes));
        Some(LayoutCell::Slot { column, start })
    }

    /// What the cell wrapper would report for a cell; `None` for a column
    /// this layout does not have
    pub fn cell_info(&self, cell: LayoutCell) -> Option<CellInfo> {
        let (column, value) = match cell {
            LayoutCell::Header { column } => {
                let column = self.columns.get(column)?;
                (column, column.date.and_time(NaiveTime::default()))
            }
            LayoutCell::Slot { column, start } => (self.columns.get(column)?, start),
        };
        Some(CellInfo {
            resource: column.resource_id.clone().map(ResourceRef::Id),
            value: Some(value),
        })
    }

    /// Box an event occupies, clipped to the visible window.
    ///
    /// `None` when the event is outside the window or its column is not
    /// shown. With resources, events without a resource are not shown.
    pub fn event_rect(&self, event: &CalendarEvent) -> Option<Rect> {
        let day = event.start().date();
        let column = self.columns.iter().position(|c| {
            c.date == day
                && match (&c.resource_id, event.resource_id()) {
                    (None, _) => true,
                    (Some(column_id), Some(event_id)) => column_id == event_id,
                    (Some(_), None) => false,
                }
        })?;

        let window_start = day.and_time(self.min_time);
        let window_end = day.and_time(self.max_time);
        let start = event.start().max(window_start);
        let end = event.end().min(window_end);
        if start >= end {
            return None;
        }

        let px_per_minute = self.slot_height / self.step_minutes as f32;
        let minutes = |from: NaiveDateTime, to: NaiveDateTime| (to - from).num_seconds() as f32 / 60.0;
        let top = self.origin.y + self.header_height + minutes(window_start, start) * px_per_minute;
        let height = minutes(start, end) * px_per_minute;
        let left = self.origin.x + column as f32 * self.column_width;

        Some(Rect::new(left, top, self.column_width, height))
    }
}
