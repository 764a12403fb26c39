//! Student domain models and parameters.
//!
//! Provides the domain representation of a persisted student record along with
//! the validated parameter type used by create and update operations. Domain
//! models are converted from document models at the repository boundary and
//! transformed to DTOs at the controller boundary. Field-shape validation
//! lives here so no unvalidated record can reach the service layer.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};

use crate::{
    model::student::{Campus, Department, Program, StudentPayloadDto, StudentRecordDto},
    server::{
        data::document::StudentDocument,
        error::{internal::InternalError, validation::ValidationError, AppError},
    },
};

const NAME_MAX_CHARS: usize = 50;
const ADDRESS_MAX_CHARS: usize = 100;
const AGE_MIN: i32 = 15;
const AGE_MAX: i32 = 30;
const PHONE_DIGITS: usize = 11;

/// A persisted student record with both of its identifiers.
///
/// Unlike the write payload, a record always carries the storage-native
/// ObjectId, the allocated student identifier, and both timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    /// Storage-native id assigned by MongoDB.
    pub id: ObjectId,
    /// Allocated sequential identifier (`bc` + 5 digits), immutable.
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
    /// Set once at creation, never modified afterwards.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every update.
    pub updated_at: DateTime<Utc>,
}

impl StudentRecord {
    /// Converts a document model to a domain record at the repository boundary.
    ///
    /// # Arguments
    /// - `document` - The document model fetched from the store
    ///
    /// # Returns
    /// - `Ok(StudentRecord)` - The converted domain record
    /// - `Err(AppError::InternalErr(MissingDocumentId))` - The fetched document
    ///   carries no `_id`, which a stored document always should
    pub fn from_document(document: StudentDocument) -> Result<Self, AppError> {
        let id = document.id.ok_or(InternalError::MissingDocumentId)?;

        Ok(Self {
            id,
            student_id: document.student_id,
            full_name: document.full_name,
            father_name: document.father_name,
            age: document.age,
            phone: document.phone,
            email: document.email,
            address: document.address,
            campus: document.campus,
            program: document.program,
            department: document.department,
            created_at: document.created_at,
            updated_at: document.updated_at,
        })
    }

    /// Converts the domain record to a DTO for API responses.
    ///
    /// # Returns
    /// - `StudentRecordDto` - The converted DTO with the ObjectId rendered as hex
    pub fn into_dto(self) -> StudentRecordDto {
        StudentRecordDto {
            id: self.id.to_hex(),
            student_id: self.student_id,
            full_name: self.full_name,
            father_name: self.father_name,
            age: self.age,
            phone: self.phone,
            email: self.email,
            address: self.address,
            campus: self.campus,
            program: self.program,
            department: self.department,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Validated student data fields for create and full-update operations.
///
/// Built from the write payload via `from_dto`, which applies every
/// field-shape rule. The program/department consistency rule is checked
/// separately by the service layer since it is a cross-field business rule,
/// not a field shape.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentParams {
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

impl StudentParams {
    /// Validates a write payload and converts it to operation parameters.
    ///
    /// Fields are checked in declaration order; the first violation is
    /// returned. Campus, program, and department membership is already
    /// guaranteed by the closed enums in the DTO.
    ///
    /// # Arguments
    /// - `dto` - The submitted write payload
    ///
    /// # Returns
    /// - `Ok(StudentParams)` - Every field satisfies its shape constraint
    /// - `Err(ValidationError)` - Names the first offending field
    pub fn from_dto(dto: StudentPayloadDto) -> Result<Self, ValidationError> {
        let params = Self {
            full_name: dto.full_name,
            father_name: dto.father_name,
            age: dto.age,
            phone: dto.phone,
            email: dto.email,
            address: dto.address,
            campus: dto.campus,
            program: dto.program,
            department: dto.department,
        };

        params.validate()?;

        Ok(params)
    }

    /// Checks whether the submitted department matches the program's mapped department.
    ///
    /// # Returns
    /// - `true` - Department equals the fixed mapping for the program
    /// - `false` - Mismatched pair, the write must be rejected
    pub fn department_matches_program(&self) -> bool {
        self.department == self.program.department()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let full_name_len = self.full_name.chars().count();
        if full_name_len == 0 || full_name_len > NAME_MAX_CHARS {
            return Err(ValidationError::FullNameLength { len: full_name_len });
        }
        if !is_letters_and_spaces(&self.full_name) {
            return Err(ValidationError::FullNameCharset);
        }

        let father_name_len = self.father_name.chars().count();
        if father_name_len == 0 || father_name_len > NAME_MAX_CHARS {
            return Err(ValidationError::FatherNameLength {
                len: father_name_len,
            });
        }
        if !is_letters_and_spaces(&self.father_name) {
            return Err(ValidationError::FatherNameCharset);
        }

        if self.age < AGE_MIN || self.age > AGE_MAX {
            return Err(ValidationError::AgeRange { age: self.age });
        }

        if self.phone.len() != PHONE_DIGITS || !self.phone.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::Phone);
        }

        if !is_valid_email(&self.email) {
            return Err(ValidationError::Email {
                value: self.email.clone(),
            });
        }

        let address_len = self.address.chars().count();
        if address_len == 0 || address_len > ADDRESS_MAX_CHARS {
            return Err(ValidationError::AddressLength { len: address_len });
        }

        Ok(())
    }
}

fn is_letters_and_spaces(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

/// Structural email check: exactly one `@`, non-empty local part, dotted
/// domain, no whitespace anywhere.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> StudentPayloadDto {
        StudentPayloadDto {
            full_name: "Ali Raza".to_string(),
            father_name: "Raza Khan".to_string(),
            age: 20,
            phone: "03001234567".to_string(),
            email: "ali.raza@example.com".to_string(),
            address: "House 12, Street 4, Lahore".to_string(),
            campus: Campus::Lahore,
            program: Program::ComputerScience,
            department: Department::ComputerScience,
        }
    }

    /// Tests that a payload satisfying every per-field constraint passes.
    ///
    /// Expected: Ok with all fields carried over unchanged
    #[test]
    fn accepts_valid_payload() {
        let params = StudentParams::from_dto(valid_payload()).unwrap();
        assert_eq!(params.full_name, "Ali Raza");
        assert_eq!(params.age, 20);
        assert!(params.department_matches_program());
    }

    /// Tests rejection of an empty full name.
    ///
    /// Expected: Err naming full_name with its length
    #[test]
    fn rejects_empty_full_name() {
        let mut payload = valid_payload();
        payload.full_name = String::new();
        assert_eq!(
            StudentParams::from_dto(payload).unwrap_err(),
            ValidationError::FullNameLength { len: 0 }
        );
    }

    /// Tests rejection of an overlong full name.
    ///
    /// Expected: Err naming full_name with its length
    #[test]
    fn rejects_overlong_full_name() {
        let mut payload = valid_payload();
        payload.full_name = "a".repeat(51);
        assert_eq!(
            StudentParams::from_dto(payload).unwrap_err(),
            ValidationError::FullNameLength { len: 51 }
        );
    }

    /// Tests rejection of digits in a full name.
    ///
    /// Expected: Err naming the full_name charset rule
    #[test]
    fn rejects_digits_in_full_name() {
        let mut payload = valid_payload();
        payload.full_name = "Ali 2nd".to_string();
        assert_eq!(
            StudentParams::from_dto(payload).unwrap_err(),
            ValidationError::FullNameCharset
        );
    }

    /// Tests rejection of punctuation in a father name.
    ///
    /// Expected: Err naming the father_name charset rule
    #[test]
    fn rejects_punctuation_in_father_name() {
        let mut payload = valid_payload();
        payload.father_name = "O'Connor".to_string();
        assert_eq!(
            StudentParams::from_dto(payload).unwrap_err(),
            ValidationError::FatherNameCharset
        );
    }

    /// Tests both ends of the admission age range.
    ///
    /// Expected: 15 and 30 accepted, 14 and 31 rejected with the age named
    #[test]
    fn enforces_age_bounds() {
        for age in [15, 30] {
            let mut payload = valid_payload();
            payload.age = age;
            assert!(StudentParams::from_dto(payload).is_ok());
        }
        for age in [14, 31] {
            let mut payload = valid_payload();
            payload.age = age;
            assert_eq!(
                StudentParams::from_dto(payload).unwrap_err(),
                ValidationError::AgeRange { age }
            );
        }
    }

    /// Tests rejection of phone numbers that are not exactly 11 digits.
    ///
    /// Expected: Err naming the phone rule for short, long, and non-digit input
    #[test]
    fn rejects_bad_phone_numbers() {
        for phone in ["0300123456", "030012345678", "0300-123456"] {
            let mut payload = valid_payload();
            payload.phone = phone.to_string();
            assert_eq!(
                StudentParams::from_dto(payload).unwrap_err(),
                ValidationError::Phone
            );
        }
    }

    /// Tests rejection of structurally invalid email addresses.
    ///
    /// Expected: Err carrying the rejected value for each malformed shape
    #[test]
    fn rejects_malformed_emails() {
        for email in [
            "no-at-sign",
            "@example.com",
            "ali@nodomain",
            "ali@.com",
            "ali raza@example.com",
            "a@b@example.com",
        ] {
            let mut payload = valid_payload();
            payload.email = email.to_string();
            assert_eq!(
                StudentParams::from_dto(payload).unwrap_err(),
                ValidationError::Email {
                    value: email.to_string()
                }
            );
        }
    }

    /// Tests rejection of an overlong address.
    ///
    /// Expected: Err naming address with its length
    #[test]
    fn rejects_overlong_address() {
        let mut payload = valid_payload();
        payload.address = "x".repeat(101);
        assert_eq!(
            StudentParams::from_dto(payload).unwrap_err(),
            ValidationError::AddressLength { len: 101 }
        );
    }

    /// Tests the full program/department mapping.
    ///
    /// For each of the 5 programs, exactly its mapped department passes the
    /// cross-field check and the other 4 fail it.
    ///
    /// Expected: 5 matching pairs accepted, 20 mismatched pairs rejected
    #[test]
    fn department_mapping_is_one_to_one() {
        let programs = [
            Program::ComputerScience,
            Program::BusinessAdministration,
            Program::Mathematics,
            Program::Psychology,
            Program::English,
        ];
        let departments = [
            Department::ComputerScience,
            Department::BusinessAdministration,
            Department::Mathematics,
            Department::Psychology,
            Department::English,
        ];

        for program in programs {
            for department in departments {
                let mut payload = valid_payload();
                payload.program = program;
                payload.department = department;
                let params = StudentParams::from_dto(payload).unwrap();
                assert_eq!(
                    params.department_matches_program(),
                    department == program.department()
                );
            }
        }
    }
}
