use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// In-memory camera that counts how many of its tracks are still live.
struct FakeCamera {
    live_tracks: Rc<Cell<u32>>,
    frame: &'static str,
}

impl FakeCamera {
    fn new(tracks: u32, frame: &'static str) -> (Self, Rc<Cell<u32>>) {
        let live = Rc::new(Cell::new(tracks));
        (Self { live_tracks: live.clone(), frame }, live)
    }
}

impl FrameSource for FakeCamera {
    fn encode_frame(&self) -> Option<String> {
        (self.live_tracks.get() > 0).then(|| self.frame.to_owned())
    }

    fn release(&mut self) {
        self.live_tracks.set(0);
    }
}

#[test]
fn capture_without_stream_returns_none() {
    let session = CaptureSession::<FakeCamera>::default();
    assert!(!session.is_active());
    assert_eq!(session.capture_image(), None);
}

#[test]
fn capture_with_stream_returns_encoded_frame() {
    let mut session = CaptureSession::default();
    let (camera, _) = FakeCamera::new(1, "data:image/jpeg;base64,AAAA");
    session.start(camera);
    assert!(session.is_active());
    assert_eq!(session.capture_image().as_deref(), Some("data:image/jpeg;base64,AAAA"));
}

#[test]
fn stop_releases_tracks_and_clears_stream() {
    let mut session = CaptureSession::default();
    let (camera, live) = FakeCamera::new(2, "data:image/jpeg;base64,AAAA");
    session.start(camera);

    assert!(session.stop());
    assert_eq!(live.get(), 0);
    assert!(!session.is_active());
    assert_eq!(session.capture_image(), None);
}

#[test]
fn stop_without_stream_is_noop() {
    let mut session = CaptureSession::<FakeCamera>::default();
    assert!(!session.stop());
}

#[test]
fn start_releases_previous_stream() {
    let mut session = CaptureSession::default();
    let (first, first_live) = FakeCamera::new(1, "first");
    let (second, second_live) = FakeCamera::new(1, "second");
    session.start(first);
    session.start(second);

    assert_eq!(first_live.get(), 0);
    assert_eq!(second_live.get(), 1);
    assert_eq!(session.capture_image().as_deref(), Some("second"));
}

#[test]
fn dropping_session_releases_stream() {
    let (camera, live) = FakeCamera::new(1, "frame");
    {
        let mut session = CaptureSession::default();
        session.start(camera);
    }
    assert_eq!(live.get(), 0);
}
