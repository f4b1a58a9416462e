use serde::{Deserialize, Serialize};

use crate::domain::User;
use crate::error::{Error, Result};

/// Response envelope shared by every gateway endpoint: `{ success, data, message }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default = "none")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

fn none<T>() -> Option<T> {
    None
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Unwraps the payload; `success: false` becomes [`Error::Rejected`].
    pub fn into_data(self) -> Result<Option<T>> {
        if self.success {
            Ok(self.data)
        } else {
            Err(Error::Rejected {
                message: self.message.filter(|m| !m.trim().is_empty()),
            })
        }
    }
}

impl<T> Envelope<Vec<T>> {
    /// List endpoints may omit `data` when empty.
    pub fn into_list(self) -> Result<Vec<T>> {
        Ok(self.into_data()?.unwrap_or_default())
    }
}

/// Payload of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: User,
}
