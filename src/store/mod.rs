// Local storage module.
// Persists saved cafes to the user's data directory.

pub mod favorites;
pub mod paths;

pub use favorites::FavoritesStore;
