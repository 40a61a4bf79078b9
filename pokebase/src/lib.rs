pub mod database;
pub mod pokedex;
pub mod pokemon;
pub mod selection;
pub mod sprite;
pub mod storage;

mod error;

pub use database::Database;
pub use error::Error;
pub use pokemon::Pokemon;
pub use selection::Selection;
pub use storage::Storage;
