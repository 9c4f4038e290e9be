pub mod session;

pub use session::{
    PlaybackMode, PlaybackSession, PlaybackSnapshot, PlaybackState, TrackToken,
};
