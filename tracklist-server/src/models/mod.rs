//! Domain models with validation at construction
//!
//! Row types mirror the Albums/Artists/Tracks tables. The `New*` types are
//! validated inputs for album creation; invalid input returns
//! ValidationError, not panic.

pub mod album;
pub mod artist;
pub mod name;
pub mod track;
pub mod validation;

pub use album::{Album, AlbumDetail, AlbumDraft, NewAlbum};
pub use artist::{Artist, NewArtist};
pub use name::EntityName;
pub use track::{NewTrack, Track};
pub use validation::ValidationError;
