use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(name: String, email: String, phone: String, address: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            address,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technician {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl Technician {
    pub fn new(name: String, email: String, phone: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            created_at: Utc::now(),
        }
    }

    /// Roster inserted by the bootstrap binary into an empty technician table
    pub fn default_roster() -> Vec<Technician> {
        [
            ("Adams Usman", "adams@yopmail.com", "08011111111"),
            ("Faridah Adamu", "faridah@yopmail.com", "08022222222"),
            ("Yakubu Usman", "yakubu@yopmail.com", "08033333333"),
            ("Hilary Martins", "hilary@yopmail.com", "08044444444"),
            ("Samuel Oguju", "sam@yopmail.com", "08055555555"),
        ]
        .into_iter()
        .map(|(name, email, phone)| Technician::new(name.into(), email.into(), phone.into()))
        .collect()
    }
}
