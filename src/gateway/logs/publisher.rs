use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

// LogPublisher forwards every event to the tracing subscriber and keeps nothing
#[derive(Debug, Default)]
pub struct LogPublisher;

impl LogPublisher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&mut self, event: DomainEvent) -> LibraryResult<()> {
        let payload = serde_json::to_string(&event)?;
        info!(event_id = %event.event_id, name = %event.name, kind = ?event.kind, "{}", payload);
        Ok(())
    }

    fn history(&self) -> &[DomainEvent] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::logs::publisher::LogPublisher;

    #[test]
    fn test_should_publish_without_history() {
        let mut publisher = LogPublisher::new();
        let event = DomainEvent::added("book_added", "books", "1", &BTreeMap::new(), &"Dune").expect("build event");
        publisher.publish(event).expect("should publish");
        assert!(publisher.history().is_empty());
    }
}
