use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid {field}: {value}. {requirement}")]
    InvalidAttribute {
        field: &'static str,
        value: String,
        requirement: String,
    },

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Boxer with name '{0}' already exists")]
    DuplicateName(String),

    #[error("{0} not found.")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e)) if e.is_unique_violation()
        )
    }

    pub fn boxer_id_not_found(id: i64) -> Self {
        StorageError::NotFound(format!("Boxer with ID {}", id))
    }

    pub fn boxer_name_not_found(name: &str) -> Self {
        StorageError::NotFound(format!("Boxer '{}'", name))
    }
}
