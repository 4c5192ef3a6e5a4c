use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Marker property touched by a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerProperty {
    Paint,
    Stroke,
    OutlinePaint,
    OutlineStroke,
    Alpha,
    Label,
    LabelFont,
    LabelPaint,
    LabelAnchor,
    LabelTextAnchor,
    LabelOffset,
    LabelOffsetType,
    Value,
    StartValue,
    EndValue,
    GradientTransformer,
}

/// Event delivered to change listeners after a marker mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerChangeEvent {
    pub property: MarkerProperty,
}

impl MarkerChangeEvent {
    #[must_use]
    pub const fn new(property: MarkerProperty) -> Self {
        Self { property }
    }
}

/// Handle returned by listener registration, used for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Callback = Box<dyn Fn(&MarkerChangeEvent)>;

/// Ordered set of change callbacks owned by a marker.
///
/// Callbacks run synchronously in registration order.
#[derive(Default)]
pub struct MarkerListeners {
    next_id: u64,
    callbacks: IndexMap<ListenerId, Callback>,
}

impl MarkerListeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, callback: impl Fn(&MarkerChangeEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.callbacks.insert(id, Box::new(callback));
        id
    }

    /// Returns `false` when `id` was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        self.callbacks.shift_remove(&id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    pub fn notify(&self, event: &MarkerChangeEvent) {
        for callback in self.callbacks.values() {
            callback(event);
        }
    }
}

impl fmt::Debug for MarkerListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkerListeners")
            .field("registered", &self.callbacks.len())
            .finish()
    }
}
