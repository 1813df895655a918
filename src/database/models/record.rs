use chrono::{FixedOffset, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Civil time zone used for display timestamps. Buenos Aires has no DST,
/// so a fixed UTC-3 offset is exact.
const BUENOS_AIRES_OFFSET_SECS: i32 = -3 * 3600;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Pending,
    Complete,
}

impl sqlx::Type<sqlx::Sqlite> for RecordStatus {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <String as sqlx::Type<sqlx::Sqlite>>::type_info()
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for RecordStatus {
    fn encode_by_ref(
        &self,
        args: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        let s = match self {
            RecordStatus::Pending => "pending",
            RecordStatus::Complete => "complete",
        };
        <&str as sqlx::Encode<'q, sqlx::Sqlite>>::encode_by_ref(&s, args)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for RecordStatus {
    fn decode(value: sqlx::sqlite::SqliteValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Sqlite>>::decode(value)?;
        match s.as_str() {
            "pending" => Ok(RecordStatus::Pending),
            "complete" => Ok(RecordStatus::Complete),
            _ => Err(format!("Invalid RecordStatus: {}", s).into()),
        }
    }
}

impl Default for RecordStatus {
    fn default() -> Self {
        RecordStatus::Pending
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordStatus::Pending => write!(f, "pending"),
            RecordStatus::Complete => write!(f, "complete"),
        }
    }
}

impl std::str::FromStr for RecordStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(RecordStatus::Pending),
            "complete" => Ok(RecordStatus::Complete),
            _ => Err(format!("Invalid RecordStatus: {}", s)),
        }
    }
}

/// One checkout-to-return lifecycle event. Timestamps are stored as naive
/// UTC; `equipment_name`, `checked_out_by` and `returned_by` are text
/// snapshots of the reference names at the time of the action.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Record {
    pub id: String,
    pub checkout_time: NaiveDateTime,
    pub user_name: String,
    pub equipment_name: String,
    pub checked_out_by: String,
    pub return_time: Option<NaiveDateTime>,
    pub returned_by: Option<String>,
    pub status: RecordStatus,
}

impl Record {
    pub fn new(user_name: String, equipment_name: String, checked_out_by: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            checkout_time: Utc::now().naive_utc(),
            user_name,
            equipment_name,
            checked_out_by,
            return_time: None,
            returned_by: None,
            status: RecordStatus::Pending,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckoutInput {
    pub user_name: String,
    pub equipment_name: String,
    pub checked_out_by: String,
}

impl CheckoutInput {
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("user_name", &self.user_name),
            ("equipment_name", &self.equipment_name),
            ("checked_out_by", &self.checked_out_by),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{} is required", field)));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnInput {
    pub returned_by: String,
}

impl ReturnInput {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.returned_by.trim().is_empty() {
            return Err(AppError::Validation("returned_by is required".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct BatchReturnInput {
    pub record_ids: Vec<String>,
    pub returned_by: Option<String>,
    pub action: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchReturnResponse {
    pub updated: u64,
}

/// Listing projection: timestamps rendered in Buenos Aires local time as
/// `DD/MM/YYYY HH:MM`, absent timestamps as an empty string.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordView {
    pub id: String,
    pub checkout_time: String,
    pub user_name: String,
    pub equipment_name: String,
    pub checked_out_by: String,
    pub return_time: String,
    pub returned_by: Option<String>,
    pub status: RecordStatus,
}

impl From<Record> for RecordView {
    fn from(record: Record) -> Self {
        Self {
            id: record.id,
            checkout_time: format_local(Some(record.checkout_time)),
            user_name: record.user_name,
            equipment_name: record.equipment_name,
            checked_out_by: record.checked_out_by,
            return_time: format_local(record.return_time),
            returned_by: record.returned_by,
            status: record.status,
        }
    }
}

fn format_local(timestamp: Option<NaiveDateTime>) -> String {
    let offset = FixedOffset::east_opt(BUENOS_AIRES_OFFSET_SECS).expect("valid offset");
    match timestamp {
        Some(ts) => Utc
            .from_utc_datetime(&ts)
            .with_timezone(&offset)
            .format("%d/%m/%Y %H:%M")
            .to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn formats_timestamps_in_buenos_aires_time() {
        // 15:30 UTC is 12:30 in Buenos Aires (UTC-3)
        let ts = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(15, 30, 0)
            .unwrap();
        assert_eq!(format_local(Some(ts)), "09/03/2024 12:30");
    }

    #[test]
    fn crosses_the_date_line_backwards_near_midnight() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(1, 15, 0)
            .unwrap();
        assert_eq!(format_local(Some(ts)), "31/12/2023 22:15");
    }

    #[test]
    fn absent_timestamp_renders_empty() {
        assert_eq!(format_local(None), "");
    }

    #[test]
    fn new_record_starts_pending_with_no_return_fields() {
        let record = Record::new(
            "Juan".to_string(),
            "Laptop-01".to_string(),
            "Ana".to_string(),
        );
        assert_eq!(record.status, RecordStatus::Pending);
        assert!(record.return_time.is_none());
        assert!(record.returned_by.is_none());
        assert!(!record.id.is_empty());
    }

    #[test]
    fn checkout_input_rejects_blank_fields() {
        let input = CheckoutInput {
            user_name: "Juan".to_string(),
            equipment_name: "  ".to_string(),
            checked_out_by: "Ana".to_string(),
        };
        assert!(input.validate().is_err());

        let input = CheckoutInput {
            user_name: "Juan".to_string(),
            equipment_name: "Laptop-01".to_string(),
            checked_out_by: "Ana".to_string(),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn status_round_trips_through_strings() {
        assert_eq!(
            "pending".parse::<RecordStatus>().unwrap(),
            RecordStatus::Pending
        );
        assert_eq!(
            "Complete".parse::<RecordStatus>().unwrap(),
            RecordStatus::Complete
        );
        assert!("archived".parse::<RecordStatus>().is_err());
        assert_eq!(RecordStatus::Complete.to_string(), "complete");
    }
}
