//! Jikan catalog search for the Anime Seven tools.
//!
//! Searches the public Jikan API (a MyAnimeList mirror) and maps results
//! into ready-to-publish [`animeseven_core::AnimePost`] records. The
//! Arabic title is left empty for a later translation pass.

mod error;
mod jikan;

pub use error::{CatalogError, CatalogErrorKind, CatalogResult};
pub use jikan::{JikanClient, JikanConfig, JIKAN_API_BASE};
