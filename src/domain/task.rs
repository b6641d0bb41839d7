use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Identifier assigned by the task store.
///
/// The store decides the representation, so both JSON numbers and strings
/// are accepted and written back in the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Number(n) => f.pad(&n.to_string()),
            TaskId::Text(s) => f.pad(s),
        }
    }
}

impl FromStr for TaskId {
    type Err = std::convert::Infallible;

    /// Parse a user-supplied id (numeric when it looks numeric)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.parse::<i64>() {
            Ok(n) => TaskId::Number(n),
            Err(_) => TaskId::Text(trimmed.to_string()),
        })
    }
}

impl From<i64> for TaskId {
    fn from(n: i64) -> Self {
        TaskId::Number(n)
    }
}

impl From<i32> for TaskId {
    fn from(n: i32) -> Self {
        TaskId::Number(i64::from(n))
    }
}

/// A todo item as held by the task store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    /// Fields the client does not interpret; sent back untouched on updates
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    #[cfg(test)]
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed,
            extra: Map::new(),
        }
    }

    /// Full replacement record with `completed` flipped
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }

    /// Full replacement record with a new title
    pub fn retitled(&self, title: String) -> Self {
        Self {
            title,
            ..self.clone()
        }
    }
}

/// Payload for creating a task (the store assigns the id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub completed: bool,
}

impl NewTask {
    /// Build a create payload from raw input, rejecting blank titles
    pub fn from_input(input: &str) -> Option<Self> {
        let title = input.trim();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            title: title.to_string(),
            completed: false,
        })
    }
}
