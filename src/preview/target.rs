use std::fmt::Write;

/// Mutable state of the preview's target element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewTarget {
    pub class_name: String,
    /// Inline style declarations in insertion order
    pub styles: Vec<(String, String)>,
    pub inner_html: String,
}

impl PreviewTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear class, inline style and children
    pub fn reset(&mut self) {
        self.class_name.clear();
        self.styles.clear();
        self.inner_html.clear();
    }

    /// Set one inline style property, replacing an existing value
    pub fn set_style(&mut self, property: &str, value: &str) {
        match self.styles.iter_mut().find(|(p, _)| p == property) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.styles.push((property.to_string(), value.to_string())),
        }
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Value of the `style` attribute, e.g. "height: 150px; width: 2rem;"
    pub fn style_attribute(&self) -> String {
        let mut out = String::new();
        for (i, (property, value)) in self.styles.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{}: {};", property, value);
        }
        out
    }

    /// Render as the `#targetElement` div
    pub fn to_html(&self) -> String {
        let mut out = String::from("<div id=\"targetElement\"");
        if !self.class_name.is_empty() {
            let _ = write!(out, " class=\"{}\"", self.class_name);
        }
        if !self.styles.is_empty() {
            let _ = write!(
                out,
                " style=\"{}\"",
                super::document::escape_attribute(&self.style_attribute())
            );
        }
        out.push('>');
        if self.inner_html.is_empty() {
            out.push_str("Preview");
        } else {
            out.push_str(&self.inner_html);
        }
        out.push_str("</div>");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_style_replaces() {
        let mut target = PreviewTarget::new();
        target.set_style("width", "10px");
        target.set_style("height", "150px");
        target.set_style("width", "20px");

        assert_eq!(target.style("width"), Some("20px"));
        assert_eq!(target.style_attribute(), "width: 20px; height: 150px;");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut target = PreviewTarget::new();
        target.class_name = "mode-box".to_string();
        target.set_style("width", "10px");
        target.inner_html = "Box".to_string();

        target.reset();
        assert_eq!(target, PreviewTarget::new());
        assert_eq!(target.to_html(), "<div id=\"targetElement\">Preview</div>");
    }
}
