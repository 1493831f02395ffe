#![warn(clippy::pedantic)]
// Repository traits are async because callers must treat every gateway call
// as a suspend point; the embedded store itself answers synchronously.
#![allow(clippy::unused_async)]

pub mod sqlite;


pub use sqlite::SqliteStorage;
