//! Field kinds known to the registry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The kind of value a form field holds.
///
/// The wire names (`as_str`, serde, `FromStr`) are the short keys used by
/// callers: `name`, `group`, `tg`, `vk`, `email`, `phone`, `password`, `id`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum FieldKind {
    /// Two or three Cyrillic words: "Иван Иванов"
    Name = 0,
    /// Academic group code: "МТ01-18А"
    Group = 1,
    /// Telegram handle or t.me link
    #[serde(rename = "tg")]
    Telegram = 2,
    /// VK handle or vk.com link
    Vk = 3,
    Email = 4,
    /// Russian phone number starting with +7 or 8
    Phone = 5,
    Password = 6,
    /// UUID, optionally prefixed with '#'
    Id = 7,
}

impl FieldKind {
    pub const COUNT: usize = 8;

    /// Every kind, in registry order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Name,
        Self::Group,
        Self::Telegram,
        Self::Vk,
        Self::Email,
        Self::Phone,
        Self::Password,
        Self::Id,
    ];

    /// Returns the wire name of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Group => "group",
            Self::Telegram => "tg",
            Self::Vk => "vk",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
            Self::Id => "id",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "group" => Ok(Self::Group),
            "tg" => Ok(Self::Telegram),
            "vk" => Ok(Self::Vk),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "password" => Ok(Self::Password),
            "id" => Ok(Self::Id),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}
