use serde::{Deserialize, Serialize};

/// What happened to a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    UserCreated,
    UserUpdated,
    UserDeleted,
}

/// Domain event emitted once per successful mutating operation.
///
/// Events are ephemeral: they are handed to the publisher port and
/// forgotten, never persisted or retried. The field names below are the
/// wire contract consumed by downstream subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "eventType")]
    pub kind: EventKind,
    #[serde(rename = "userID")]
    pub user_id: String,
    pub age: u32,
    #[serde(rename = "noFiles")]
    pub file_count: usize,
}

impl Event {
    pub fn created(user_id: impl Into<String>, age: u32, file_count: usize) -> Self {
        Self {
            kind: EventKind::UserCreated,
            user_id: user_id.into(),
            age,
            file_count,
        }
    }

    pub fn updated(user_id: impl Into<String>, age: u32, file_count: usize) -> Self {
        Self {
            kind: EventKind::UserUpdated,
            user_id: user_id.into(),
            age,
            file_count,
        }
    }

    /// Deletion events carry no record state: age and file count are zero.
    pub fn deleted(user_id: impl Into<String>) -> Self {
        Self {
            kind: EventKind::UserDeleted,
            user_id: user_id.into(),
            age: 0,
            file_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_uses_contract_field_names() {
        let json = serde_json::to_value(Event::created("jane@example.com", 30, 2)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "eventType": "UserCreated",
                "userID": "jane@example.com",
                "age": 30,
                "noFiles": 2,
            })
        );
    }

    #[test]
    fn deleted_event_zeroes_record_state() {
        let ev = Event::deleted("jane@example.com");
        assert_eq!(ev.kind, EventKind::UserDeleted);
        assert_eq!(ev.age, 0);
        assert_eq!(ev.file_count, 0);
    }
}
