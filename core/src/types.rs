//! Wire records for the todo.ly API.
//!
//! # Design
//! Field names on the wire are PascalCase. Every field is optional on the
//! wire and defaults to its zero value when absent, so partial bodies (the
//! service frequently omits fields) never fail a decode. Integer-coded enums
//! keep unknown codes as data instead of rejecting them — the service may
//! grow new item types, and an unrecognized priority or type must not break
//! a `list`.

use serde::{Deserialize, Serialize};

use crate::date::JsonDate;

/// The server's item classification codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "i64")]
pub enum ItemType {
    CheckItem,
    ProjectItem,
    DoneItem,
    FilterItem,
    PlaceholderItem,
    PlaceholderDoneItem,
    DeletedItem,
    Unknown(i64),
}

impl From<i64> for ItemType {
    fn from(code: i64) -> Self {
        match code {
            1 => ItemType::CheckItem,
            2 => ItemType::ProjectItem,
            3 => ItemType::DoneItem,
            4 => ItemType::FilterItem,
            5 => ItemType::PlaceholderItem,
            6 => ItemType::PlaceholderDoneItem,
            7 => ItemType::DeletedItem,
            other => ItemType::Unknown(other),
        }
    }
}

impl Default for ItemType {
    fn default() -> Self {
        ItemType::Unknown(0)
    }
}

/// Recurrence repeat interval codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "i64")]
pub enum RepeatType {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Unknown(i64),
}

impl From<i64> for RepeatType {
    fn from(code: i64) -> Self {
        match code {
            1 => RepeatType::Daily,
            2 => RepeatType::Weekly,
            3 => RepeatType::Monthly,
            4 => RepeatType::Yearly,
            other => RepeatType::Unknown(other),
        }
    }
}

impl Default for RepeatType {
    fn default() -> Self {
        RepeatType::Unknown(0)
    }
}

/// Recurrence schedule attached to an item. Pure data; the client never
/// computes occurrences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Recurrence {
    pub repeat_type: RepeatType,
    pub select_days: i64,
    pub select_weeks: i64,
    pub weekday0: bool,
    pub weekday1: bool,
    pub weekday2: bool,
    pub weekday3: bool,
    pub weekday4: bool,
    pub weekday5: bool,
    pub weekday6: bool,
    pub select_months: i64,
    pub month_by_month_day: bool,
    pub month_by_day: bool,
    pub select_years: i64,
    pub original_date: JsonDate,
}

/// A to-do entry. `children` is an owned recursive tree; nodes carry
/// `parent_id` as data but no back-reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Item {
    pub id: i64,
    pub content: String,
    pub checked: bool,
    pub priority: i64,
    pub created_date: JsonDate,
    pub item_type: ItemType,
    pub item_order: i64,
    pub parent_id: i64,
    pub project_id: i64,
    pub owner_id: i64,
    pub deleted: bool,
    pub collapsed: bool,
    pub in_history: bool,
    pub due_time_specified: bool,
    pub date_string: String,
    pub date_string_priority: i64,
    pub due_date: String,
    pub due_date_time: String,
    pub last_checked_date: String,
    pub last_synced_date_time: String,
    pub last_updated_date: String,
    pub notes: String,
    pub path: String,
    pub recurrence: Option<Recurrence>,
    pub children: Vec<Item>,
}

/// Token issued by the authentication endpoint. Held for the lifetime of one
/// process invocation, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Token {
    pub user_email: String,
    pub token_string: String,
    pub expiration_time: JsonDate,
}

/// Request payload for creating an item. The service assigns everything
/// else, including the id.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateItem {
    pub content: String,
}

/// Request payload for checking or unchecking an item.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateChecked {
    pub checked: bool,
}
