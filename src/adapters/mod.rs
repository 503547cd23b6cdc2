// Adapters layer: concrete user stores behind the `UserStore` port.

pub mod user_store;

pub use user_store::{InMemoryUserStore, JsonFileUserStore};
