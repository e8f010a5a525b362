pub mod store;

pub use store::{SchoolStore, StoreError};
