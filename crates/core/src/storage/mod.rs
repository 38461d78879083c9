mod error;
mod pagination;
mod traits;

pub use error::{RepositoryError, Result};
pub use pagination::scan_all;
pub use traits::ItemStore;
