use sqlx::SqlitePool;
use storage::{
    dto::boxer::CreateBoxerRequest, error::Result, models::Boxer,
    repository::boxer::BoxerRepository,
};

/// Create a new boxer
pub async fn create_boxer(pool: &SqlitePool, request: &CreateBoxerRequest) -> Result<Boxer> {
    let repo = BoxerRepository::new(pool);
    repo.create(request).await
}

/// Get boxer by id
pub async fn get_boxer(pool: &SqlitePool, id: i64) -> Result<Boxer> {
    let repo = BoxerRepository::new(pool);
    repo.find_by_id(id).await
}

/// Get boxer by name
pub async fn get_boxer_by_name(pool: &SqlitePool, name: &str) -> Result<Boxer> {
    let repo = BoxerRepository::new(pool);
    repo.find_by_name(name).await
}

/// Delete a boxer
pub async fn delete_boxer(pool: &SqlitePool, id: i64) -> Result<()> {
    let repo = BoxerRepository::new(pool);
    repo.delete(id).await
}
