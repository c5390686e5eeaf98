pub mod config;
pub mod credentials;
pub mod form;
pub mod logger;
pub mod net;
pub mod soap;
#[cfg(feature = "cmd")]
pub mod cmd;
