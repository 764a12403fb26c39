use bson::{doc, oid::ObjectId};
use futures::TryStreamExt;
use mongodb::{
    error::Error as MongoError,
    results::{DeleteResult, InsertOneResult, UpdateResult},
    Collection, Database,
};

use crate::server::data::document::{StudentDocument, StudentUpdateDocument};

/// Name of the collection holding all student records.
pub const COLLECTION_NAME: &str = "student_data";

pub struct StudentRepository {
    collection: Collection<StudentDocument>,
}

impl StudentRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_NAME),
        }
    }

    /// Fetches every student record in the collection.
    pub async fn get_all(&self) -> Result<Vec<StudentDocument>, MongoError> {
        self.collection.find(doc! {}).await?.try_collect().await
    }

    /// Fetches a student record by its storage-native ObjectId.
    pub async fn find_by_object_id(
        &self,
        id: ObjectId,
    ) -> Result<Option<StudentDocument>, MongoError> {
        self.collection.find_one(doc! { "_id": id }).await
    }

    /// Fetches a student record by its allocated student identifier.
    pub async fn find_by_student_id(
        &self,
        student_id: &str,
    ) -> Result<Option<StudentDocument>, MongoError> {
        self.collection
            .find_one(doc! { "student_id": student_id })
            .await
    }

    /// Fetches the record with the highest allocated student identifier.
    ///
    /// Fixed-width zero padding makes the descending lexicographic sort on
    /// `student_id` equivalent to a numeric sort. Used by the identifier
    /// allocator immediately before each insert.
    pub async fn find_latest(&self) -> Result<Option<StudentDocument>, MongoError> {
        self.collection
            .find_one(doc! {})
            .sort(doc! { "student_id": -1 })
            .await
    }

    /// Inserts a new student record.
    pub async fn insert(&self, document: &StudentDocument) -> Result<InsertOneResult, MongoError> {
        self.collection.insert_one(document).await
    }

    /// Replaces the data fields of the record with the given student identifier.
    ///
    /// The update document deliberately carries neither `student_id` nor
    /// `created_at`, so a `$set` can never touch them.
    pub async fn update_by_student_id(
        &self,
        student_id: &str,
        update: &StudentUpdateDocument,
    ) -> Result<UpdateResult, MongoError> {
        let set = bson::to_document(update)?;

        self.collection
            .update_one(doc! { "student_id": student_id }, doc! { "$set": set })
            .await
    }

    /// Removes the record with the given student identifier.
    pub async fn delete_by_student_id(&self, student_id: &str) -> Result<DeleteResult, MongoError> {
        self.collection
            .delete_one(doc! { "student_id": student_id })
            .await
    }
}
