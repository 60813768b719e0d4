pub mod config;
pub mod error;

pub use config::DalilConfig;
pub use error::{DalilError, Result};
