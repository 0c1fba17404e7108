//! Resource pre-selection.
//!
//! The grid reports slot selections without saying which resource column
//! they came from. Pointer-down always fires before click, so capturing the
//! column on pointer-down gives the later "create appointment" callback a
//! reliable resource. The captured [`InteractionContext`] lives for one
//! gesture only.
//!
//! ## Resource extraction
//!
//! ```text
//! record.resourceId  ->  record.id  ->  the reference itself (if an id)  ->  None
//! ```
//!
//! A present field short-circuits the chain, matching the grid's own
//! accessor order.

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;

use crate::types::{Id, wall_clock_from_value};

/// What a grid cell says about its column
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourceRef {
    /// Bare id
    Id(Id),
    /// A resource record or slot-metrics resource object
    Record {
        resource_id: Option<Id>,
        id: Option<Id>,
    },
}

impl ResourceRef {
    pub fn record(resource_id: Option<Id>, id: Option<Id>) -> Self {
        ResourceRef::Record { resource_id, id }
    }

    /// Walk the fallback chain
    pub fn resource_id(&self) -> Option<Id> {
        match self {
            ResourceRef::Id(id) => Some(id.clone()),
            ResourceRef::Record { resource_id, id } => resource_id.clone().or_else(|| id.clone()),
        }
    }

    /// Lenient read from untyped props; `None` for null and shapes that
    /// cannot name a column.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(map) => {
                let field = |name: &str| map.get(name).filter(|v| !v.is_null());
                match field("resourceId") {
                    Some(v) => Some(ResourceRef::record(Id::from_value(v), None)),
                    None => Some(ResourceRef::record(None, field("id").and_then(Id::from_value))),
                }
            }
            other => Id::from_value(other).map(ResourceRef::Id),
        }
    }
}

impl From<Id> for ResourceRef {
    fn from(id: Id) -> Self {
        ResourceRef::Id(id)
    }
}

/// Grid cell as seen on pointer-down
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CellInfo {
    pub resource: Option<ResourceRef>,
    /// The slot or day the cell stands for
    pub value: Option<NaiveDateTime>,
}

/// Which cell wrapper the props came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellRegion {
    TimeSlot,
    DateCell,
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl CellInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, resource: impl Into<ResourceRef>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn at(mut self, value: NaiveDateTime) -> Self {
        self.value = Some(value);
        self
    }

    /// Read a cell from the grid's wrapper props.
    ///
    /// Time-slot cells fall back to `slotMetrics.resource` when `resource`
    /// is falsy; date cells only carry `resource`. A `value` that is not a
    /// timestamp reads as `None`. Never fails.
    pub fn from_props(props: &Value, region: CellRegion) -> Self {
        let direct = props.get("resource").filter(|v| is_truthy(v));
        let resource = match region {
            CellRegion::TimeSlot => direct.or_else(|| {
                props
                    .get("slotMetrics")
                    .and_then(|metrics| metrics.get("resource"))
            }),
            CellRegion::DateCell => direct,
        };
        let resource = resource.and_then(ResourceRef::from_value);
        if resource.is_none() {
            tracing::trace!(?region, "cell props carry no usable resource");
        }
        Self {
            resource,
            value: props.get("value").and_then(wall_clock_from_value),
        }
    }

    pub fn resource_id(&self) -> Option<Id> {
        self.resource.as_ref().and_then(ResourceRef::resource_id)
    }
}

/// Which resource and date the current gesture started on
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionContext {
    pub resource_id: Option<Id>,
    #[serde(with = "crate::types::wall_clock::option")]
    pub date: Option<NaiveDateTime>,
}

/// Holds the context captured by the latest cell pointer-down.
#[derive(Debug, Default)]
pub struct ResourcePreselector {
    current: Option<InteractionContext>,
}

impl ResourcePreselector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture and publish the context for a cell pointer-down
    pub fn on_cell_pointer_down(&mut self, cell: &CellInfo) -> &InteractionContext {
        let context = InteractionContext {
            resource_id: cell.resource_id(),
            date: cell.value,
        };
        self.current.insert(context)
    }

    pub fn current(&self) -> Option<&InteractionContext> {
        self.current.as_ref()
    }

    /// Pre-selected resource of the current gesture, if any
    pub fn resource_id(&self) -> Option<&Id> {
        self.current.as_ref().and_then(|c| c.resource_id.as_ref())
    }

    /// Consume the context; a gesture reads it at most once
    pub fn take(&mut self) -> Option<InteractionContext> {
        self.current.take()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
