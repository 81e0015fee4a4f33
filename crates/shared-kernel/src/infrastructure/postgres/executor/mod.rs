mod db_handle;
mod named_query;
mod store_error;

pub use db_handle::DbHandle;
pub use named_query::NamedQuery;
pub use store_error::StoreError;
