//! Task data model

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

/// Display format of the `created` field, e.g. `Mon, 01/02/06, 03:04PM`.
pub const CREATED_FORMAT: &str = "%a, %m/%d/%y, %I:%M%p";

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique within a store, assigned as max id + 1
    pub id: i64,

    pub description: String,

    /// Creation time, already formatted with [`CREATED_FORMAT`]
    pub created: String,

    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new, incomplete task stamped with the current local time
    pub fn new(id: i64, description: impl Into<String>) -> Self {
        Self::created_at(id, description, Local::now())
    }

    /// Create a new, incomplete task stamped with the given time
    pub fn created_at<Tz: TimeZone>(
        id: i64,
        description: impl Into<String>,
        at: DateTime<Tz>,
    ) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            id,
            description: description.into(),
            created: format_created(&at),
            completed: false,
        }
    }

    /// Checkbox shown in listings
    pub fn checkbox(&self) -> &'static str {
        if self.completed {
            "[x]"
        } else {
            "[ ]"
        }
    }

    /// Uncoloured listing line: `  1  : [ ] Mon, 01/02/06, 03:04PM buy milk`
    pub fn to_line(&self) -> String {
        format!(
            "{:>3}  : {} {} {}",
            self.id,
            self.checkbox(),
            self.created,
            self.description
        )
    }
}

pub fn format_created<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(CREATED_FORMAT).to_string()
}
