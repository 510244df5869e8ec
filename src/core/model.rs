//! Catalog items, users and the raw user payload accepted over HTTP

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A keyed record held by a [`ResourceStore`](crate::core::store::ResourceStore)
pub trait Record: Clone + Send + Sync + 'static {
    /// Display name used in store error messages ("Item", "User")
    const ENTITY: &'static str;

    /// Unique key of the record
    fn id(&self) -> &str;
}

/// A catalog entry. Price is kept as text exactly as the dataset spells it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price: price.into(),
        }
    }
}

impl Record for Item {
    const ENTITY: &'static str = "Item";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Roles a user may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Buyer,
    Seller,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Buyer, Role::Seller];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Buyer => "buyer",
            Role::Seller => "seller",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    /// Exact, case-sensitive match
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or(())
    }
}

/// A validated user
///
/// Two users are equal when their identifiers are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
        }
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Record for User {
    const ENTITY: &'static str = "User";

    fn id(&self) -> &str {
        &self.id
    }
}

/// User body as sent by clients, before validation
///
/// Every field is optional so that a missing field reaches the matching
/// validator instead of failing the parse. An `id` in the body is ignored
/// like any other unknown field; the path identifier is authoritative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}
