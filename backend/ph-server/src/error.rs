use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ph_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] ph_db::DbError),

    #[error("Key material error: {0}")]
    Auth(#[from] ph_auth::AuthError),

    #[error("Delivery setup error: {0}")]
    Delivery(#[from] ph_identity::DeliveryError),

    #[error("Missing configuration: {message}")]
    MissingSetting { message: String },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
