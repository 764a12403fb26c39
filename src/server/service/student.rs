//! Student record business logic.
//!
//! Orchestrates the record validator, the identifier allocator, and the
//! repository. All timestamps and identifiers are decided here, server-side:
//! write payloads can never influence `student_id`, `created_at`, or
//! `updated_at`.

use bson::oid::ObjectId;
use chrono::Utc;
use mongodb::Database;

use crate::server::{
    data::{
        document::{StudentDocument, StudentUpdateDocument},
        student::StudentRepository,
    },
    error::{internal::InternalError, AppError},
    model::{
        student::{StudentParams, StudentRecord},
        student_id::next_student_id,
    },
};

/// Error message returned when the submitted program/department pair is inconsistent.
const PROGRAM_DEPARTMENT_MISMATCH: &str =
    "Selected program and department do not match. Please enter related program and department.";

/// Identifiers of a freshly created student record.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedStudent {
    /// Storage-native id of the inserted document.
    pub id: ObjectId,
    /// Newly allocated student identifier.
    pub student_id: String,
}

pub struct StudentService<'a> {
    db: &'a Database,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Gets all student records.
    pub async fn get_all(&self) -> Result<Vec<StudentRecord>, AppError> {
        let repo = StudentRepository::new(self.db);

        let documents = repo.get_all().await?;

        documents
            .into_iter()
            .map(StudentRecord::from_document)
            .collect()
    }

    /// Gets a student record by its storage-native id.
    ///
    /// # Returns
    /// - `Ok(StudentRecord)` - The matching record
    /// - `Err(AppError::BadRequest)` - `mongo_id` is not a valid 24-char hex ObjectId
    /// - `Err(AppError::NotFound)` - No record has this ObjectId
    pub async fn get_by_object_id(&self, mongo_id: &str) -> Result<StudentRecord, AppError> {
        let object_id = ObjectId::parse_str(mongo_id)
            .map_err(|e| AppError::BadRequest(format!("Invalid Object ID format: {}", e)))?;

        let repo = StudentRepository::new(self.db);

        let document = repo
            .find_by_object_id(object_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found by Object ID".to_string()))?;

        StudentRecord::from_document(document)
    }

    /// Gets a student record by its allocated student identifier.
    pub async fn get_by_student_id(&self, student_id: &str) -> Result<StudentRecord, AppError> {
        let repo = StudentRepository::new(self.db);

        let document = repo.find_by_student_id(student_id).await?.ok_or_else(|| {
            AppError::NotFound("Student not found by custom student ID".to_string())
        })?;

        StudentRecord::from_document(document)
    }

    /// Creates a new student record.
    ///
    /// Checks the program/department pair against the fixed mapping, allocates
    /// the next sequential identifier from the current stored maximum, stamps
    /// both timestamps, and inserts. The maximum is read synchronously
    /// immediately before the insert; concurrent creates may race for the same
    /// identifier, which is an accepted property of this design.
    ///
    /// # Arguments
    /// - `params` - Validated student data fields
    ///
    /// # Returns
    /// - `Ok(CreatedStudent)` - Both identifiers of the new record
    /// - `Err(AppError::BadRequest)` - Program and department do not match
    /// - `Err(AppError::InternalErr)` - The stored maximum identifier is corrupted
    pub async fn create(&self, params: StudentParams) -> Result<CreatedStudent, AppError> {
        if !params.department_matches_program() {
            return Err(AppError::BadRequest(PROGRAM_DEPARTMENT_MISMATCH.to_string()));
        }

        let repo = StudentRepository::new(self.db);

        let latest = repo.find_latest().await?;
        let student_id = next_student_id(latest.as_ref().map(|d| d.student_id.as_str()))?;

        let now = Utc::now();
        let document = StudentDocument {
            id: None,
            student_id: student_id.clone(),
            full_name: params.full_name,
            father_name: params.father_name,
            age: params.age,
            phone: params.phone,
            email: params.email,
            address: params.address,
            campus: params.campus,
            program: params.program,
            department: params.department,
            created_at: now,
            updated_at: now,
        };

        let inserted = repo.insert(&document).await?;
        let id = inserted
            .inserted_id
            .as_object_id()
            .ok_or(InternalError::MissingDocumentId)?;

        tracing::info!("Created student {} ({})", student_id, id.to_hex());

        Ok(CreatedStudent { id, student_id })
    }

    /// Replaces the data fields of the record with the given student identifier.
    ///
    /// The allocated identifier and the creation timestamp are never touched;
    /// `updated_at` is refreshed to now.
    ///
    /// # Returns
    /// - `Ok(())` - Record updated
    /// - `Err(AppError::BadRequest)` - Program and department do not match
    /// - `Err(AppError::NotFound)` - No record has this student identifier
    pub async fn update_by_student_id(
        &self,
        student_id: &str,
        params: StudentParams,
    ) -> Result<(), AppError> {
        if !params.department_matches_program() {
            return Err(AppError::BadRequest(PROGRAM_DEPARTMENT_MISMATCH.to_string()));
        }

        let repo = StudentRepository::new(self.db);

        let update = StudentUpdateDocument {
            full_name: params.full_name,
            father_name: params.father_name,
            age: params.age,
            phone: params.phone,
            email: params.email,
            address: params.address,
            campus: params.campus,
            program: params.program,
            department: params.department,
            updated_at: Utc::now(),
        };

        let result = repo.update_by_student_id(student_id, &update).await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(
                "Student not found by custom student ID".to_string(),
            ));
        }

        Ok(())
    }

    /// Removes the record with the given student identifier.
    ///
    /// # Returns
    /// - `Ok(())` - Record removed
    /// - `Err(AppError::NotFound)` - No record has this student identifier
    pub async fn delete_by_student_id(&self, student_id: &str) -> Result<(), AppError> {
        let repo = StudentRepository::new(self.db);

        let result = repo.delete_by_student_id(student_id).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(
                "Student not found by custom student ID".to_string(),
            ));
        }

        Ok(())
    }
}
