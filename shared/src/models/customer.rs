//! Customer Model

use serde::{Deserialize, Serialize};

/// Customer identity with prior promo-code usage history
///
/// Supplied by the account collaborator; guest orders carry no customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    /// Ids of promo codes this customer has used before
    #[serde(default)]
    pub promo_code_usages: Vec<String>,
}

impl Customer {
    pub fn has_used_code(&self, code_id: &str) -> bool {
        self.promo_code_usages.iter().any(|id| id == code_id)
    }
}
