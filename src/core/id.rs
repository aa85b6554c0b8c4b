use serde::{Deserialize, Serialize};
use crate::core::domain::EntityId;

// IdSequence hands out sequential ids starting at 1, one sequence per entity kind.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct IdSequence {
    last: EntityId,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> EntityId {
        self.last = self.last.saturating_add(1);
        self.last
    }
}
