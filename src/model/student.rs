use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Campus a student is enrolled at. Serialized with the full display name on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Campus {
    #[serde(rename = "VU Lahore Campus")]
    Lahore,
    #[serde(rename = "VU Karachi Campus")]
    Karachi,
    #[serde(rename = "VU Islamabad Campus")]
    Islamabad,
    #[serde(rename = "VU Faisalabad Campus")]
    Faisalabad,
    #[serde(rename = "VU Multan Campus")]
    Multan,
}

/// Degree program a student is enrolled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Program {
    #[serde(rename = "BS Computer Science")]
    ComputerScience,
    #[serde(rename = "BS Business Administration")]
    BusinessAdministration,
    #[serde(rename = "BS Mathematics")]
    Mathematics,
    #[serde(rename = "BS Psychology")]
    Psychology,
    #[serde(rename = "BS English")]
    English,
}

/// Department a student belongs to. Each program maps to exactly one department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Department {
    #[serde(rename = "Computer Science Department")]
    ComputerScience,
    #[serde(rename = "Business Administration Department")]
    BusinessAdministration,
    #[serde(rename = "Mathematics Department")]
    Mathematics,
    #[serde(rename = "Psychology Department")]
    Psychology,
    #[serde(rename = "English Department")]
    English,
}

impl Program {
    /// Returns the department a program belongs to.
    ///
    /// The program/department relationship is a fixed 1:1 table; every write
    /// is checked against it before anything is persisted.
    pub fn department(self) -> Department {
        match self {
            Program::ComputerScience => Department::ComputerScience,
            Program::BusinessAdministration => Department::BusinessAdministration,
            Program::Mathematics => Department::Mathematics,
            Program::Psychology => Department::Psychology,
            Program::English => Department::English,
        }
    }
}

/// Student data fields as submitted by clients on create and update.
///
/// Identifiers and timestamps are server-owned and never part of this payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentPayloadDto {
    pub full_name: String,
    pub father_name: String,
    pub age: i32,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub campus: Campus,
    pub program: Program,
    pub department: Department,
}

/// A full student record as returned by read endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentRecordDto {
    /// Storage-native id (24-char hex ObjectId).
    pub id: String,
    /// Allocated sequential identifier (`bc` + 5 digits).
    pub student_id: String,
    pub full_name: String,
    pub father_name: String,
    pub age: i32,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub campus: Campus,
    pub program: Program,
    pub department: Department,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response body for a successful create: both identifiers of the new record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateStudentResponseDto {
    /// Storage-native id of the inserted document.
    pub id: String,
    /// Newly allocated student identifier.
    pub student_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the wire spelling of the closed enum values.
    ///
    /// Clients and stored documents both use the full display names, so the
    /// serde renames are part of the API contract.
    ///
    /// Expected: each variant serializes to its display name
    #[test]
    fn enums_serialize_with_display_names() {
        assert_eq!(
            serde_json::to_value(Program::ComputerScience).unwrap(),
            "BS Computer Science"
        );
        assert_eq!(
            serde_json::to_value(Department::BusinessAdministration).unwrap(),
            "Business Administration Department"
        );
        assert_eq!(
            serde_json::to_value(Campus::Multan).unwrap(),
            "VU Multan Campus"
        );
    }

    /// Tests that values outside the closed enums are rejected at deserialization.
    ///
    /// Expected: Err for a program that is not one of the 5 fixed values
    #[test]
    fn unknown_enum_values_are_rejected() {
        let result = serde_json::from_value::<Program>(serde_json::json!("BS Chemistry"));
        assert!(result.is_err());
    }
}
