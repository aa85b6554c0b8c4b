use std::collections::BTreeMap;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::serializer;

// DomainEventType defines type of event for catalog changes
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Removed,
    Issued,
    Returned,
}

// DomainEvent abstracts a change applied to the catalog
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub group: String,
    pub key: String,
    pub kind: DomainEventType,
    pub metadata: BTreeMap<String, String>,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn added<T: Serialize>(name: &str, group: &str, key: &str, metadata: &BTreeMap<String, String>, data: &T) -> serde_json::Result<Self> {
        Self::build(name, group, key, DomainEventType::Added, metadata, data)
    }

    pub fn removed<T: Serialize>(name: &str, group: &str, key: &str, metadata: &BTreeMap<String, String>, data: &T) -> serde_json::Result<Self> {
        Self::build(name, group, key, DomainEventType::Removed, metadata, data)
    }

    pub fn issued<T: Serialize>(name: &str, group: &str, key: &str, metadata: &BTreeMap<String, String>, data: &T) -> serde_json::Result<Self> {
        Self::build(name, group, key, DomainEventType::Issued, metadata, data)
    }

    pub fn returned<T: Serialize>(name: &str, group: &str, key: &str, metadata: &BTreeMap<String, String>, data: &T) -> serde_json::Result<Self> {
        Self::build(name, group, key, DomainEventType::Returned, metadata, data)
    }

    fn build<T: Serialize>(name: &str, group: &str, key: &str, kind: DomainEventType,
                           metadata: &BTreeMap<String, String>, data: &T) -> serde_json::Result<Self> {
        Ok(DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            group: group.to_string(),
            key: key.to_string(),
            kind,
            metadata: metadata.clone(),
            json_data: serde_json::to_string(data)?,
            created_at: Utc::now().naive_utc(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use crate::core::events::{DomainEvent, DomainEventType};

    fn metadata() -> BTreeMap<String, String> {
        BTreeMap::from([("branch".to_string(), "test".to_string())])
    }

    #[test]
    fn test_should_build_added() {
        let data = BTreeMap::from([("title", "Dune")]);
        let event = DomainEvent::added("book_added", "books", "1", &metadata(), &data).expect("build event");
        assert_eq!("book_added", event.name.as_str());
        assert_eq!("1", event.key.as_str());
        assert_eq!(DomainEventType::Added, event.kind);
        assert_eq!(r#"{"title":"Dune"}"#, event.json_data.as_str());
    }

    #[test]
    fn test_should_build_issued_and_returned() {
        let issued = DomainEvent::issued("book_issued", "circulation", "1", &metadata(), &1u64).expect("build event");
        let returned = DomainEvent::returned("book_returned", "circulation", "1", &metadata(), &1u64).expect("build event");
        assert_eq!(DomainEventType::Issued, issued.kind);
        assert_eq!(DomainEventType::Returned, returned.kind);
        assert_ne!(issued.event_id, returned.event_id);
        assert_eq!(Some(&"test".to_string()), issued.metadata.get("branch"));
    }

    #[test]
    fn test_should_build_removed() {
        let event = DomainEvent::removed("book_removed", "books", "7", &BTreeMap::new(), &"Dune").expect("build event");
        assert_eq!(DomainEventType::Removed, event.kind);
        assert!(event.metadata.is_empty());
    }

    #[test]
    fn test_should_serialize_event() {
        let event = DomainEvent::added("member_added", "parties", "2", &metadata(), &"Alice").expect("build event");
        let json = serde_json::to_string(&event).expect("serialize event");
        let parsed: DomainEvent = serde_json::from_str(&json).expect("parse event");
        assert_eq!(event.event_id, parsed.event_id);
        assert_eq!(event.created_at.and_utc().timestamp_micros(), parsed.created_at.and_utc().timestamp_micros());
    }
}
