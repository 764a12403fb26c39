use bson::doc;
use mongodb::{
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Database,
};

use crate::server::{config::Config, error::AppError};

/// Name of the MongoDB database holding all student records.
pub const DATABASE_NAME: &str = "student_management_db";

/// Connects to MongoDB and verifies the deployment is reachable.
///
/// Parses the connection string from configuration, pins the client to stable
/// API v1, and issues a `ping` against the target database so a bad connection
/// string fails at startup rather than on the first request. The returned
/// handle is shared process-wide through `AppState`; the driver manages its
/// own connection pooling internally.
///
/// # Arguments
/// - `config` - Application configuration containing the MongoDB connection string
///
/// # Returns
/// - `Ok(Database)` - Connected database handle, deployment reachable
/// - `Err(AppError::MongoErr)` - Connection string invalid or deployment unreachable
pub async fn connect_to_database(config: &Config) -> Result<Database, AppError> {
    let mut options = ClientOptions::parse(&config.mongodb_url).await?;
    options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());

    let client = Client::with_options(options)?;
    let db = client.database(DATABASE_NAME);

    db.run_command(doc! { "ping": 1 }).await?;

    Ok(db)
}
