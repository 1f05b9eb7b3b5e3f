use crate::ProfileUpdate;

use serde::{Deserialize, Serialize};

/// Signup request: an optional phone plus any initial profile attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(flatten)]
    pub profile: ProfileUpdate,
}
