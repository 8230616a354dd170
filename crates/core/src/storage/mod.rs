mod error;
mod http_mapping;
mod search;
mod traits;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use search::{like_pattern, LIKE_ESCAPE};
pub use traits::ItemRepository;
