// Stream versions.
//
// A version is the index of the last event in a stream. An empty stream sits
// "before the first event" and therefore reports NO_STREAM.

pub type Version = i64;

pub const NO_STREAM: Version = -1;

/// Version of a stream holding `event_count` events.
pub fn version_of(event_count: usize) -> Version {
    event_count as Version - 1
}
