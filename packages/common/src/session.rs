use serde::{Deserialize, Serialize};

/// The authenticated owner on whose behalf a flow runs.
///
/// Every record a flow reads or writes is scoped to `user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
