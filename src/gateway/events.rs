use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;

pub trait EventPublisher {
    fn publish(&mut self, event: DomainEvent) -> LibraryResult<()>;

    // events kept by the publisher, oldest first; publishers that forward events keep none
    fn history(&self) -> &[DomainEvent];
}
