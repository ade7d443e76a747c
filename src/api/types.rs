// Employee API types.
// Wire shapes returned by the employee web API and the decoded domain record.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Body of `GET /employee/employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeListResponse {
    /// Total reported by the server; not necessarily `employees.len()`.
    pub total_employee_count: u64,
    pub employees: Vec<RawEmployee>,
}

/// Employee as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEmployee {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub gender: String,
    pub hire_date: String,
    pub mail_address: String,
    pub zip_code: String,
    pub address: String,
    pub telephone: String,
    pub salary: i64,
    pub characteristics: String,
    pub dependents_count: u32,
}

/// Decoded employee record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub gender: String,
    /// Hire timestamp in the offset the API sent it with.
    pub hire_date: DateTime<FixedOffset>,
    pub mail_address: String,
    pub zip_code: String,
    pub address: String,
    pub telephone: String,
    pub salary: i64,
    pub characteristics: String,
    pub dependents_count: u32,
}

impl Employee {
    /// Hire date for display, e.g. `2020/01/01`, as a calendar day in the record's own offset.
    pub fn formatted_hire_date(&self) -> String {
        self.hire_date.format("%Y/%m/%d").to_string()
    }
}

impl TryFrom<RawEmployee> for Employee {
    type Error = StoreError;

    fn try_from(raw: RawEmployee) -> Result<Self, Self::Error> {
        let hire_date = parse_hire_date(&raw.hire_date).ok_or_else(|| StoreError::Decode {
            id: raw.id,
            reason: format!("unrecognized hire date {:?}", raw.hire_date),
        })?;

        Ok(Self {
            id: raw.id,
            name: raw.name,
            image: raw.image,
            gender: raw.gender,
            hire_date,
            mail_address: raw.mail_address,
            zip_code: raw.zip_code,
            address: raw.address,
            telephone: raw.telephone,
            salary: raw.salary,
            characteristics: raw.characteristics,
            dependents_count: raw.dependents_count,
        })
    }
}

/// Parse a hire date in any of the shapes the API emits.
/// Accepts RFC 3339 timestamps, naive timestamps (taken as UTC), and plain dates (midnight UTC).
/// Explicit offsets are kept so the displayed day matches the record.
fn parse_hire_date(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt);
    }

    // Offsets without a colon, e.g. 2020-01-01T00:00:00.000+0000
    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt);
    }

    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;
    Some(naive.and_utc().fixed_offset())
}
