use super::document;
use super::mode::VisualizationMode;
use super::target::PreviewTarget;
use crate::engine::CssProperty;

const TEXT_MODE_CONTENT: &str = "<h1 style=\"margin:0; font-size: inherit;\">Fluid Title</h1><p style=\"font-size: 0.5em; margin-top: 10px;\">Subtitle (0.5em)</p>";
const PADDING_MODE_CONTENT: &str = "<div class=\"padding-inner\">Content</div>";
const GAP_MODE_CONTENT: &str = "<div class=\"gap-item\">1</div><div class=\"gap-item\">2</div><div class=\"gap-item\">3</div><div class=\"gap-item\">4</div>";

/// Fixed size of the cross axis in box mode
const BOX_CROSS_AXIS: &str = "150px";

/// The preview frame: its target element, its width, and the size readout
#[derive(Debug, Clone, Default)]
pub struct PreviewSurface {
    target: PreviewTarget,
    mode: Option<VisualizationMode>,
    // Raw text of the max-width field; the min-width field never sizes the frame
    frame_width: String,
    info: String,
}

impl PreviewSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> &PreviewTarget {
        &self.target
    }

    pub fn mode(&self) -> Option<VisualizationMode> {
        self.mode
    }

    pub fn frame_width(&self) -> &str {
        &self.frame_width
    }

    /// Last size readout, e.g. "Dim: 1280px x 320px"
    pub fn info(&self) -> &str {
        &self.info
    }

    /// Re-render the target for a property and its computed value
    /// Previous class, styles and children are always cleared first
    pub fn apply(&mut self, property: CssProperty, value: &str) {
        let mode = VisualizationMode::for_property(property);
        let target = &mut self.target;
        target.reset();
        target.class_name = mode.class_name().to_string();

        match property {
            CssProperty::FontSize => {
                target.inner_html = TEXT_MODE_CONTENT.to_string();
                target.set_style("font-size", value);
            }
            CssProperty::Width => {
                target.inner_html = "Box".to_string();
                target.set_style("height", BOX_CROSS_AXIS);
                target.set_style("width", value);
            }
            CssProperty::Height => {
                target.inner_html = "Box".to_string();
                target.set_style("width", BOX_CROSS_AXIS);
                target.set_style("height", value);
            }
            CssProperty::Padding => {
                target.set_style("padding", value);
                target.inner_html = PADDING_MODE_CONTENT.to_string();
            }
            CssProperty::Gap => {
                target.set_style("gap", value);
                target.inner_html = GAP_MODE_CONTENT.to_string();
            }
        }

        self.mode = Some(mode);
        log::debug!("Preview switched to {:?} with {}", mode, value);
    }

    /// Size the frame from the max-width field text
    pub fn sync_frame_width(&mut self, max_width_field: &str) {
        self.frame_width = max_width_field.trim().to_string();
    }

    /// Size-change notification from the frame
    pub fn on_resize(&mut self, width: f64, height: f64) {
        self.info = format!("Dim: {}px x {}px", width.round(), height.round());
    }

    pub fn render_document(&self) -> String {
        document::preview_document(&self.target)
    }

    pub fn render_host_page(&self, output_text: &str) -> String {
        document::host_page(output_text, &self.frame_width, &self.info, &self.render_document())
    }
}
