pub mod config;
pub mod datasource;
pub mod error;
pub mod handlers;
pub mod repository;
pub mod user;

pub use datasource::{ConnectionProvider, DataSourceRegistry, NamedDataSource};
pub use error::{DaoError, DaoResult};
pub use repository::UserRepository;
pub use user::{User, UserPayload};
