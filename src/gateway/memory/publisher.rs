use tracing::debug;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

// MemoryPublisher retains published events in order
#[derive(Debug, Default)]
pub struct MemoryPublisher {
    events: Vec<DomainEvent>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&mut self, event: DomainEvent) -> LibraryResult<()> {
        debug!(event_id = %event.event_id, name = %event.name, "retaining event");
        self.events.push(event);
        Ok(())
    }

    fn history(&self) -> &[DomainEvent] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use crate::core::events::{DomainEvent, DomainEventType};
    use crate::gateway::events::EventPublisher;
    use crate::gateway::factory::create_publisher;
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_keep_events_in_order() {
        let mut publisher = create_publisher(GatewayPublisherVia::Memory);
        let added = DomainEvent::added("book_added", "books", "1", &BTreeMap::new(), &"Dune").expect("build event");
        let issued = DomainEvent::issued("book_issued", "circulation", "1", &BTreeMap::new(), &1u64).expect("build event");
        publisher.publish(added).expect("should publish");
        publisher.publish(issued).expect("should publish");

        let kinds: Vec<DomainEventType> = publisher.history().iter().map(|e| e.kind).collect();
        assert_eq!(vec![DomainEventType::Added, DomainEventType::Issued], kinds);
    }
}
