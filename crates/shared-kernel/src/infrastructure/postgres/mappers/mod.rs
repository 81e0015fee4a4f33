mod postgres_error_mapper;

pub use postgres_error_mapper::{SqlxErrorExt, StoreErrorExt, normalize_sqlx_error, normalize_store_error};
