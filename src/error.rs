use thiserror::Error;

#[derive(Error, Debug)]
pub enum DaoError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("no datasource registered under '{0}'")]
    DataSourceNotFound(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type DaoResult<T> = Result<T, DaoError>;

impl DaoError {
    /// Stable code for clients of the HTTP surface.
    pub fn code(&self) -> &'static str {
        match self {
            DaoError::Database(_) => "DATABASE_ERROR",
            DaoError::DataSourceNotFound(_) => "DATASOURCE_NOT_FOUND",
            DaoError::Config(_) => "CONFIG_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlx_errors_convert_into_database_faults() {
        let err: DaoError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DaoError::Database(sqlx::Error::RowNotFound)));
        assert_eq!(err.code(), "DATABASE_ERROR");
    }

    #[test]
    fn unknown_datasource_names_the_lookup() {
        let err = DaoError::DataSourceNotFound("demo".into());
        assert_eq!(err.to_string(), "no datasource registered under 'demo'");
    }
}
