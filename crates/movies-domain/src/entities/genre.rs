use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Entity: Genre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    /// Genre identifier
    pub id: Uuid,
    /// Genre name
    pub name: String,
}
