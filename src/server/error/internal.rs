use thiserror::Error;

/// Internal issues with stored data indicating unexpected state & possible bugs
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InternalError {
    /// A persisted student identifier does not match the `bc` + digits format.
    ///
    /// The identifier allocator reads the current maximum identifier back from
    /// the store; a value it cannot parse means the collection holds corrupted
    /// data. Results in a 500 Internal Server Error with a generic message
    /// returned to the client, the offending value is logged.
    #[error("Stored student ID '{value}' does not match the expected bcNNNNN format")]
    MalformedStudentId {
        /// The stored identifier that failed to parse
        value: String,
    },

    /// A student document came back from the store without an ObjectId.
    ///
    /// Every fetched or inserted document must carry a storage-native `_id`.
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to the client.
    #[error("Student document is missing a storage-native ObjectId")]
    MissingDocumentId,
}
