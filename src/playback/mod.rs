// controller module
mod controller;
// error module
mod error;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the playback modules.
//─────────────────────────────────────────────────────────────────────────────
pub use controller::{PlaybackController, PlaybackState};
pub use error::PlaybackError;
