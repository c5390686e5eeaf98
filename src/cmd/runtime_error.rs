#[cfg(not(feature = "log"))]
use crate::{debug, error};
#[cfg(feature = "log")]
use log::{debug, error};
use crate::config::ConfigError;
use crate::net::TransportError;
use crate::soap::SoapError;

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("login rejected")]
    LoginRejected,
    #[error(transparent)]
    Soap(#[from] SoapError),
    #[error("cannot build http client: {0}")]
    ClientError(#[from] TransportError),
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    #[error("io error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("no {0} given")]
    MissingInput(&'static str),
    #[cfg(feature = "log")]
    #[error("cannot install logger: {0}")]
    LoggerError(#[from] log::SetLoggerError),
}

impl RuntimeError {
    pub fn print_error(&self) {
        match self {
            // already rendered by the view
            RuntimeError::LoginRejected | RuntimeError::Soap(..) => debug!("{}", self),
            RuntimeError::ClientError(e) => error!("cannot build http client: {}", e),
            RuntimeError::ConfigError(e) => error!("configuration error: {}", e),
            RuntimeError::IOError(e) => error!("error reading input: {}", e),
            RuntimeError::MissingInput(what) => error!("no {} given", what),
            #[cfg(feature = "log")]
            RuntimeError::LoggerError(e) => eprintln!("cannot install logger: {}", e),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            RuntimeError::LoginRejected => 1,
            RuntimeError::Soap(SoapError::Http(..)) => 2,
            RuntimeError::Soap(SoapError::InvalidResponse) => 3,
            RuntimeError::Soap(SoapError::Transport(..)) => 4,
            RuntimeError::ClientError(..) => 4,
            RuntimeError::ConfigError(..) => 5,
            RuntimeError::IOError(..) => 6,
            RuntimeError::MissingInput(..) => 7,
            #[cfg(feature = "log")]
            RuntimeError::LoggerError(..) => 8,
        }
    }
}
