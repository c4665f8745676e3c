use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::failed_render::FailedRender;
use crate::core::data::plane_range::PlaneRange;
use std::time::Duration;

/// What the status line shows, kept apart from any drawing surface.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ViewStatus {
    last_presented_generation: u64,
    range: Option<PlaneRange>,
    last_render_duration: Option<Duration>,
    last_error_message: Option<String>,
}

impl ViewStatus {
    /// Records `frame` if it is newer than what is on screen.
    ///
    /// Returns whether the caller should copy the frame to the surface.
    pub fn accept_frame(&mut self, frame: &FrameData) -> bool {
        if frame.generation <= self.last_presented_generation {
            return false;
        }

        self.last_presented_generation = frame.generation;
        self.range = Some(frame.range);
        self.last_render_duration = Some(frame.render_duration);
        self.last_error_message = None;

        true
    }

    pub fn record_error(&mut self, error: &FailedRender) {
        if error.generation >= self.last_presented_generation {
            self.last_error_message = Some(error.message.clone());
        }
    }

    #[must_use]
    pub fn last_presented_generation(&self) -> u64 {
        self.last_presented_generation
    }

    #[must_use]
    pub fn has_frame(&self) -> bool {
        self.range.is_some()
    }

    #[must_use]
    pub fn range(&self) -> Option<PlaneRange> {
        self.range
    }

    #[must_use]
    pub fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }

    #[must_use]
    pub fn status_line(&self) -> String {
        let Some(range) = self.range else {
            return String::from("Rendering...");
        };

        let mut line = format!(
            "Re [{:.6}, {:.6}]  Im [{:.6}, {:.6}]",
            range.x(),
            range.x() + range.width(),
            range.y(),
            range.y() + range.height()
        );

        if let Some(duration) = self.last_render_duration {
            line.push_str(&format!("  |  {} ms", duration.as_millis()));
        }

        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::display_size::DisplaySize;
    use crate::core::data::pixel_buffer::PixelBuffer;

    fn frame(generation: u64, range: PlaneRange) -> FrameData {
        FrameData {
            generation,
            pixel_buffer: PixelBuffer::new(DisplaySize::new(2).unwrap()),
            range,
            render_duration: Duration::from_millis(42),
        }
    }

    fn initial() -> PlaneRange {
        PlaneRange::new(-2.0, -1.5, 3.0, 3.0).unwrap()
    }

    #[test]
    fn test_status_before_first_frame() {
        let status = ViewStatus::default();

        assert!(!status.has_frame());
        assert_eq!(status.status_line(), "Rendering...");
    }

    #[test]
    fn test_accepting_frame_updates_status_line() {
        let mut status = ViewStatus::default();

        assert!(status.accept_frame(&frame(1, initial())));

        assert_eq!(status.range(), Some(initial()));
        assert_eq!(
            status.status_line(),
            "Re [-2.000000, 1.000000]  Im [-1.500000, 1.500000]  |  42 ms"
        );
    }

    #[test]
    fn test_stale_frames_are_rejected() {
        let mut status = ViewStatus::default();
        let zoomed = PlaneRange::new(-1.25, -0.75, 1.5, 1.5).unwrap();

        assert!(status.accept_frame(&frame(3, zoomed)));
        assert!(!status.accept_frame(&frame(1, initial())));
        assert!(!status.accept_frame(&frame(3, initial())));

        assert_eq!(status.last_presented_generation(), 3);
        assert_eq!(status.range(), Some(zoomed));
        assert!(status.accept_frame(&frame(4, initial())));
    }

    #[test]
    fn test_error_is_shown_until_next_frame() {
        let mut status = ViewStatus::default();
        status.accept_frame(&frame(1, initial()));

        status.record_error(&FailedRender {
            generation: 2,
            message: String::from("cannot zoom any further"),
        });
        assert_eq!(status.last_error_message(), Some("cannot zoom any further"));
        // the view itself is unchanged
        assert_eq!(status.range(), Some(initial()));

        status.accept_frame(&frame(3, initial()));
        assert_eq!(status.last_error_message(), None);
    }

    #[test]
    fn test_error_older_than_current_frame_is_ignored() {
        let mut status = ViewStatus::default();
        status.accept_frame(&frame(5, initial()));

        status.record_error(&FailedRender {
            generation: 4,
            message: String::from("late"),
        });

        assert_eq!(status.last_error_message(), None);
    }
}
