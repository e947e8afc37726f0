//! Dashboard users
//!
//! Users exist for display only (the name shown in the header); no
//! permission enforcement is attached to the role.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Role a user holds in the association's board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "Administrador")]
    Admin,
    #[serde(rename = "Tesorero")]
    Treasurer,
    #[serde(rename = "Secretario")]
    Secretary,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Admin => write!(f, "Administrador"),
            UserRole::Treasurer => write!(f, "Tesorero"),
            UserRole::Secretary => write!(f, "Secretario"),
        }
    }
}

/// Someone who can open the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub role: UserRole,
}

impl User {
    pub fn new(name: &str, role: UserRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            role,
        }
    }
}
