mod error;
mod requests;
mod types;

pub use error::ItemError;
pub use requests::CreateItemRequest;
pub use types::{Item, ItemStatus, NewItem};
