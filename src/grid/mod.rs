//! Resource/time grid geometry and hit testing.
//!
//! ## Modules
//!
//! - `layout` - Column and slot geometry for day and week views
//! - `spatial_index` - R-tree over drawn event boxes
//! - `hit_test` - Point to [`GridRegion`](crate::input::GridRegion) resolution

mod layout;
mod spatial_index;

pub use hit_test::TimeGrid;
pub use layout::{Column, GridLayout, LayoutCell, Rect};
pub use spatial_index::{EventBox, EventIndex};
