pub mod error;
pub mod index;
pub mod io;
pub mod paths;
pub mod record;
pub mod status;
pub mod store;

pub use error::{AdrError, Result};
