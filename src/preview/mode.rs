use crate::engine::CssProperty;

/// How the preview element visualizes a property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualizationMode {
    /// font-size: heading and subtitle text
    Text,
    /// width/height: a coloured box
    Box,
    /// padding: dashed container around a fixed inner block
    Padding,
    /// gap: 2x2 grid of items
    Gap,
}

impl VisualizationMode {
    pub fn for_property(property: CssProperty) -> Self {
        match property {
            CssProperty::FontSize => VisualizationMode::Text,
            CssProperty::Width | CssProperty::Height => VisualizationMode::Box,
            CssProperty::Padding => VisualizationMode::Padding,
            CssProperty::Gap => VisualizationMode::Gap,
        }
    }

    /// CSS class applied to the target element
    pub fn class_name(&self) -> &'static str {
        match self {
            VisualizationMode::Text => "mode-text",
            VisualizationMode::Box => "mode-box",
            VisualizationMode::Padding => "mode-padding",
            VisualizationMode::Gap => "mode-gap",
        }
    }
}
