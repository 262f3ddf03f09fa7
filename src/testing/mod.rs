mod recording_engine;

pub use recording_engine::RecordingEngine;
