pub mod clock;
pub mod errors;
pub mod models;
pub mod path;
pub mod repo;
pub mod service;

pub use clock::*;
pub use errors::*;
pub use models::*;
pub use path::*;
pub use repo::*;
pub use service::*;
