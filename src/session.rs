// Form state and event wiring around the engine and the preview surface
//
// Every handler runs synchronously to completion; a recalculation fully
// replaces the output text and re-renders the preview.

use crate::config::Config;
use crate::engine::{self, CssProperty, InterpolationRequest, InterpolationResult, Unit};
use crate::error::Result;
use crate::preview::PreviewSurface;
use std::time::Duration;

pub const COPY_LABEL: &str = "Copy code";
pub const COPIED_LABEL: &str = "Copied!";

/// Numeric form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    MinWidth,
    MaxWidth,
    MinValue,
    MaxValue,
}

/// Destination of the copy action
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Clipboard that keeps the last copied text in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    min_width: String,
    max_width: String,
    min_value: String,
    max_value: String,
    unit: Unit,
    property: CssProperty,

    output: String,
    result: Option<InterpolationResult>,
    surface: PreviewSurface,

    copy_confirmation: Duration,
    // Timestamps are durations since whatever origin the caller uses for `now`
    copied_until: Option<Duration>,
}

impl Session {
    /// Build the initial state: frame synced, first computation run
    pub fn new(config: &Config) -> Self {
        let defaults = &config.defaults;
        let mut session = Self {
            min_width: defaults.min_width.clone(),
            max_width: defaults.max_width.clone(),
            min_value: defaults.min_value.clone(),
            max_value: defaults.max_value.clone(),
            unit: defaults.unit,
            property: defaults.property,
            output: String::new(),
            result: None,
            surface: PreviewSurface::new(),
            copy_confirmation: config.preview.copy_confirmation(),
            copied_until: None,
        };
        session.surface.sync_frame_width(&session.max_width);
        session.recalculate();
        session
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::MinWidth => &self.min_width,
            Field::MaxWidth => &self.max_width,
            Field::MinValue => &self.min_value,
            Field::MaxValue => &self.max_value,
        }
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn property(&self) -> CssProperty {
        self.property
    }

    /// Label shown next to both value fields
    pub fn unit_label(&self) -> String {
        self.unit.label()
    }

    /// Text of the output region: a declaration or the invalid-range placeholder
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Last successful computation, if the current form state is valid
    pub fn result(&self) -> Option<&InterpolationResult> {
        self.result.as_ref()
    }

    pub fn surface(&self) -> &PreviewSurface {
        &self.surface
    }

    pub fn set_field(&mut self, field: Field, text: &str) {
        let slot = match field {
            Field::MinWidth => &mut self.min_width,
            Field::MaxWidth => &mut self.max_width,
            Field::MinValue => &mut self.min_value,
            Field::MaxValue => &mut self.max_value,
        };
        *slot = text.to_string();
        self.recalculate();
    }

    pub fn set_property(&mut self, property: CssProperty) {
        self.property = property;
        self.recalculate();
    }

    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
        self.recalculate();
    }

    /// The max-width field lost focus: resize the preview frame
    pub fn blur_max_width(&mut self) {
        self.surface.sync_frame_width(&self.max_width);
    }

    /// Size-change notification from the preview frame
    pub fn resize_preview(&mut self, width: f64, height: f64) {
        self.surface.on_resize(width, height);
    }

    /// Current form state as an engine request
    pub fn request(&self) -> InterpolationRequest {
        InterpolationRequest {
            min_width: engine::coerce_number(&self.min_width),
            max_width: engine::coerce_number(&self.max_width),
            min_value: engine::coerce_number(&self.min_value),
            max_value: engine::coerce_number(&self.max_value),
            unit: self.unit,
            property: self.property,
        }
    }

    /// Recompute the declaration and refresh the preview
    /// On an invalid range only the output text changes
    pub fn recalculate(&mut self) {
        match engine::calculate(&self.request()) {
            Ok(result) => {
                self.output = result.expression.clone();
                self.surface.apply(self.property, &result.raw_value_only);
                self.result = Some(result);
            }
            Err(e) => {
                log::debug!("{}", e);
                self.output = e.placeholder().to_string();
                self.result = None;
            }
        }
    }

    /// Put the output text on the clipboard and start the confirmation period
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard, now: Duration) -> Result<()> {
        clipboard.write_text(&self.output)?;
        self.copied_until = Some(now + self.copy_confirmation);
        log::info!("Copied {} bytes to clipboard", self.output.len());
        Ok(())
    }

    pub fn is_copy_confirmed(&self, now: Duration) -> bool {
        self.copied_until.is_some_and(|until| now < until)
    }

    pub fn copy_label(&self, now: Duration) -> &'static str {
        if self.is_copy_confirmed(now) {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::INVALID_RANGE_PLACEHOLDER;
    use crate::error::Error;
    use crate::preview::VisualizationMode;

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn write_text(&mut self, _text: &str) -> Result<()> {
            Err(Error::Io(std::io::Error::other("clipboard unavailable")))
        }
    }

    #[test]
    fn test_initial_state() {
        let session = Session::default();
        assert_eq!(
            session.output(),
            "font-size: clamp(1rem, 0.3333rem + 3.3333vw, 3rem);"
        );
        assert_eq!(session.unit_label(), "(rem)");
        assert_eq!(session.surface().frame_width(), "1280");
        assert_eq!(session.surface().mode(), Some(VisualizationMode::Text));
    }

    #[test]
    fn test_unit_toggle() {
        let mut session = Session::default();
        session.set_field(Field::MinValue, "16");
        session.set_field(Field::MaxValue, "48");
        session.set_unit(Unit::Px);

        assert_eq!(session.unit_label(), "(px)");
        assert_eq!(
            session.output(),
            "font-size: clamp(16px, 5.3333px + 3.3333vw, 48px);"
        );
    }

    #[test]
    fn test_invalid_range_leaves_preview_untouched() {
        let mut session = Session::default();
        session.set_property(CssProperty::Gap);
        let before = session.surface().target().clone();

        session.set_field(Field::MinWidth, "0");
        assert_eq!(session.output(), INVALID_RANGE_PLACEHOLDER);
        assert!(session.result().is_none());
        assert_eq!(session.surface().target(), &before);

        session.set_property(CssProperty::Width);
        assert_eq!(session.surface().target(), &before);
    }

    #[test]
    fn test_garbage_fields_coerce_to_zero() {
        let mut session = Session::default();
        session.set_field(Field::MinWidth, "abc");
        assert_eq!(session.request().min_width, 0.0);
        assert_eq!(session.output(), INVALID_RANGE_PLACEHOLDER);

        session.set_field(Field::MinWidth, "320px");
        session.set_field(Field::MaxValue, "");
        assert_eq!(
            session.output(),
            "font-size: clamp(0rem, 1.3333rem + -1.6667vw, 1rem);"
        );
    }

    #[test]
    fn test_frame_width_follows_max_only_on_blur() {
        let mut session = Session::default();
        session.set_field(Field::MaxWidth, "1440");
        session.set_field(Field::MinWidth, "400");
        assert_eq!(session.surface().frame_width(), "1280");

        session.blur_max_width();
        assert_eq!(session.surface().frame_width(), "1440");
    }

    #[test]
    fn test_copy_confirmation_expires() {
        let mut session = Session::default();
        let mut clipboard = MemoryClipboard::default();
        let t0 = Duration::from_secs(100);

        assert_eq!(session.copy_label(t0), COPY_LABEL);
        session.copy(&mut clipboard, t0).unwrap();

        assert_eq!(clipboard.contents.as_deref(), Some(session.output()));
        assert_eq!(session.copy_label(t0 + Duration::from_millis(1999)), COPIED_LABEL);
        assert_eq!(session.copy_label(t0 + Duration::from_secs(2)), COPY_LABEL);
    }

    #[test]
    fn test_failed_copy_shows_no_confirmation() {
        let mut session = Session::default();
        let now = Duration::from_secs(5);
        assert!(session.copy(&mut BrokenClipboard, now).is_err());
        assert_eq!(session.copy_label(now), COPY_LABEL);
    }
}
