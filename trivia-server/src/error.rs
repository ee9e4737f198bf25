//! Error types for trivia-server startup and serving

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid bind address: {0}")]
    Address(#[from] std::net::AddrParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("port taken"));
    }

    #[test]
    fn addr_error_conversion() {
        let parse_err = "not-an-addr".parse::<std::net::SocketAddr>().unwrap_err();
        let err: Error = parse_err.into();
        assert!(err.to_string().starts_with("Invalid bind address"));
    }
}
