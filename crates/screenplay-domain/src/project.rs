use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
}

impl Project {
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation("El nombre del proyecto no puede estar vacío".to_string()));
        }
        Ok(Project { id: Uuid::new_v4(),
                     name: name.to_string(),
                     created_at: Utc::now() })
    }

    pub fn id(&self) -> Uuid { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
}
