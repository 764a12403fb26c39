//! Document models for the student collection.
//!
//! These are the shapes that actually cross the MongoDB boundary. Timestamps
//! are stored as native BSON datetimes so descending sorts and date queries
//! work server-side; everything else serializes through serde. The repository
//! converts between these and the domain models.

use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::student::{Campus, Department, Program};

/// A student record as persisted in the `student_data` collection.
///
/// `id` is `None` only on the way into an insert; documents read back from
/// the store always carry the ObjectId MongoDB assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
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
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// The `$set` body of a full update.
///
/// Deliberately excludes `_id`, `student_id`, and `created_at`: the allocated
/// identifier is immutable and the creation timestamp is set exactly once.
#[derive(Debug, Clone, Serialize)]
pub struct StudentUpdateDocument {
    pub full_name: String,
    pub father_name: String,
    pub age: i32,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub campus: Campus,
    pub program: Program,
    pub department: Department,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}
