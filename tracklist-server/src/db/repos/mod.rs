//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows the pool for single-statement reads
//! - Takes `&mut MySqlConnection` for steps that run inside a caller's transaction
//! - Uses parameter binding for every user-supplied value

pub mod albums;
pub mod artists;
pub mod tracks;

pub use albums::AlbumRepo;
pub use artists::ArtistRepo;
pub use tracks::TrackRepo;

/// Wrap a fragment in LIKE wildcards for substring matching.
///
/// `%` and `_` inside the fragment keep their LIKE meaning.
pub(crate) fn contains_pattern(fragment: &str) -> String {
    format!("%{}%", fragment)
}
