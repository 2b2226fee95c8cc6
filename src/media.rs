//! Media stream teardown.
//!
//! The camera stream attached to a video element is owned elsewhere; the
//! only responsibility here is releasing it: stop every track so the
//! hardware is freed, then drop the element's reference to the stream.

/// An individually stoppable channel within a media stream.
///
/// Implementations wrap whatever holds the underlying device resource;
/// `stop` must be safe to call more than once.
pub trait Track {
    /// Stop the track, releasing the hardware or resource behind it.
    fn stop(&mut self);
}

/// A stream of stoppable tracks, as attached to a video element.
pub struct MediaStream {
    tracks: Vec<Box<dyn Track>>,
}

impl MediaStream {
    pub fn new(tracks: Vec<Box<dyn Track>>) -> Self {
        Self { tracks }
    }

    pub fn tracks_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Track>> {
        self.tracks.iter_mut()
    }
}

impl std::fmt::Debug for MediaStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaStream")
            .field("tracks", &self.tracks.len())
            .finish()
    }
}

/// A video element that may have a media stream attached.
#[derive(Debug, Default)]
pub struct VideoElement {
    stream: Option<MediaStream>,
}

impl VideoElement {
    /// Create a video element with no stream attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a stream, replacing any previous one.
    pub fn attach_stream(&mut self, stream: MediaStream) {
        self.stream = Some(stream);
    }

    /// The currently attached stream, if any.
    pub fn stream(&self) -> Option<&MediaStream> {
        self.stream.as_ref()
    }
}

/// Stop and detach the stream of a video element.
///
/// Stops every track of the attached stream, then clears the element's
/// stream reference. A no-op when no stream is attached, which makes
/// repeated calls safe.
pub fn stop_video_stream(video: &mut VideoElement) {
    if let Some(stream) = video.stream.as_mut() {
        for track in stream.tracks_mut() {
            track.stop();
        }
        video.stream = None;
        log::info!("video stream stopped and detached");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingTrack {
        stops: Arc<AtomicUsize>,
    }

    impl Track for CountingTrack {
        fn stop(&mut self) {
            self.stops.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn stream_with_tracks(n: usize) -> (MediaStream, Arc<AtomicUsize>) {
        let stops = Arc::new(AtomicUsize::new(0));
        let tracks: Vec<Box<dyn Track>> = (0..n)
            .map(|_| {
                Box::new(CountingTrack {
                    stops: Arc::clone(&stops),
                }) as Box<dyn Track>
            })
            .collect();
        (MediaStream::new(tracks), stops)
    }

    #[test]
    fn test_stop_stops_every_track_and_detaches() {
        let (stream, stops) = stream_with_tracks(3);
        let mut video = VideoElement::new();
        video.attach_stream(stream);

        stop_video_stream(&mut video);

        assert_eq!(stops.load(Ordering::SeqCst), 3);
        assert!(video.stream().is_none());
    }

    #[test]
    fn test_stop_twice_is_idempotent() {
        let (stream, stops) = stream_with_tracks(2);
        let mut video = VideoElement::new();
        video.attach_stream(stream);

        stop_video_stream(&mut video);
        stop_video_stream(&mut video);

        // Second call finds no stream and must not stop anything again.
        assert_eq!(stops.load(Ordering::SeqCst), 2);
        assert!(video.stream().is_none());
    }

    #[test]
    fn test_stop_without_stream_is_noop() {
        let mut video = VideoElement::new();
        stop_video_stream(&mut video);
        assert!(video.stream().is_none());
    }

    #[test]
    fn test_attach_replaces_previous_stream() {
        let (first, _) = stream_with_tracks(1);
        let (second, _) = stream_with_tracks(2);
        let mut video = VideoElement::new();
        video.attach_stream(first);
        video.attach_stream(second);
        assert!(video.stream().is_some());
    }
}
