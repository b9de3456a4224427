//! Camera capture session for the vision chat.
//!
//! A [`CaptureSession`] exclusively owns at most one [`FrameSource`] and
//! releases it on `stop`, on replacement, and on drop. In the browser the
//! source is a [`BrowserCamera`] wrapping a `getUserMedia` stream; tests use
//! an in-memory source.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

/// A live video device that can be sampled and released.
pub trait FrameSource {
    /// Encode the current frame as an image data URI.
    fn encode_frame(&self) -> Option<String>;
    /// Stop every device track. Must be idempotent.
    fn release(&mut self);
}

/// Binding between one camera stream and the widget that displays it.
pub struct CaptureSession<S: FrameSource> {
    source: Option<S>,
}

impl<S: FrameSource> Default for CaptureSession<S> {
    fn default() -> Self {
        Self { source: None }
    }
}

impl<S: FrameSource> CaptureSession<S> {
    /// Take ownership of `source`, releasing any previous one first.
    pub fn start(&mut self, source: S) {
        self.stop();
        self.source = Some(source);
    }

    /// Release the current source. Returns `false` if nothing was capturing.
    pub fn stop(&mut self) -> bool {
        match self.source.take() {
            Some(mut source) => {
                source.release();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.source.is_some()
    }

    /// Snapshot of the current frame; `None` without an active stream.
    #[must_use]
    pub fn capture_image(&self) -> Option<String> {
        self.source.as_ref().and_then(FrameSource::encode_frame)
    }
}

impl<S: FrameSource> Drop for CaptureSession<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// `getUserMedia` video stream bound to a preview `<video>` and an offscreen
/// `<canvas>` used for encoding.
#[cfg(feature = "hydrate")]
pub struct BrowserCamera {
    stream: web_sys::MediaStream,
    video: web_sys::HtmlVideoElement,
    canvas: web_sys::HtmlCanvasElement,
}

#[cfg(feature = "hydrate")]
fn js_error(value: wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(feature = "hydrate")]
impl BrowserCamera {
    /// Ask for camera access and attach the stream to `video`.
    ///
    /// # Errors
    ///
    /// Returns the browser's message when media devices are unavailable or
    /// the user denies permission.
    pub async fn acquire(
        video: web_sys::HtmlVideoElement,
        canvas: web_sys::HtmlCanvasElement,
    ) -> Result<Self, String> {
        let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
        let devices = window.navigator().media_devices().map_err(js_error)?;
        let constraints = web_sys::MediaStreamConstraints::new();
        constraints.set_video(&wasm_bindgen::JsValue::TRUE);
        let promise = devices.get_user_media_with_constraints(&constraints).map_err(js_error)?;
        let stream = wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(js_error)?
            .dyn_into::<web_sys::MediaStream>()
            .map_err(js_error)?;
        video.set_src_object(Some(&stream));
        Ok(Self { stream, video, canvas })
    }
}

#[cfg(feature = "hydrate")]
impl FrameSource for BrowserCamera {
    fn encode_frame(&self) -> Option<String> {
        // Native resolution, so the snapshot is not scaled to the preview box.
        self.canvas.set_width(self.video.video_width());
        self.canvas.set_height(self.video.video_height());
        let ctx = self
            .canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .ok()?;
        ctx.draw_image_with_html_video_element(&self.video, 0.0, 0.0).ok()?;
        self.canvas.to_data_url_with_type("image/jpeg").ok()
    }

    fn release(&mut self) {
        let tracks: js_sys::Array = self.stream.get_tracks();
        for track in tracks.iter() {
            if let Ok(track) = track.dyn_into::<web_sys::MediaStreamTrack>() {
                track.stop();
            }
        }
        self.video.set_src_object(None);
    }
}
