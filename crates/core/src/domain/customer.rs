use serde::{Deserialize, Serialize};

/// A single customer entry. `id` is caller-supplied and is the only field
/// that participates in identity matching; nothing enforces uniqueness.
///
/// Every optional field follows the same wire rule: empty-string (or zero
/// credit) values are omitted from serialized output entirely, so an
/// all-default record serializes as `{}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub registered_at: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub postal_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(default, skip_serializing_if = "credit_is_zero")]
    pub account_credit: i64,
}

fn credit_is_zero(credit: &i64) -> bool {
    *credit == 0
}
