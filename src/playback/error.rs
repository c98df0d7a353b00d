use thiserror::Error;

// Error type for playback control.
// Raised for caller bugs: the controls were used out of order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackError {
    /// Error when pause/resume/step is requested with no session running.
    #[error("No playback session is running.")]
    NotRunning,
}
