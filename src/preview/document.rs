// HTML templates for the preview frame and the standalone host page

use super::target::PreviewTarget;

/// Styles for the four visualization modes, embedded in the preview document
const PREVIEW_STYLES: &str = r#"
body {
    margin: 0;
    padding: 20px;
    font-family: sans-serif;
    display: flex;
    align-items: center;
    justify-content: center;
    min-height: 100vh;
    box-sizing: border-box;
    background: #f4f4f9;
    overflow: hidden;
}

.mode-text { text-align: center; color: #333; line-height: 1.2; }

.mode-box {
    background: linear-gradient(45deg, #4facfe, #00f2fe);
    box-shadow: 0 10px 20px rgba(0,0,0,0.2);
    border-radius: 12px;
    display: flex; align-items: center; justify-content: center;
    color: white; font-weight: bold;
    width: 100px; height: 100px;
}

.mode-padding {
    background: #ddd;
    border: 1px dashed #999;
    display: inline-block;
}
.padding-inner {
    background: #4facfe;
    width: 80px; height: 80px;
    border-radius: 4px;
    display: flex; align-items: center; justify-content: center;
    color: white; font-size: 0.8rem;
}

.mode-gap {
    display: grid;
    grid-template-columns: 1fr 1fr;
    background: #ddd;
    padding: 10px;
    border-radius: 8px;
}
.gap-item {
    width: 50px; height: 50px;
    background: #ff6b6b;
    border-radius: 8px;
    display: flex; align-items: center; justify-content: center;
    color: white; font-weight: bold;
}
"#;

const HOST_STYLES: &str = r#"
body { font-family: sans-serif; margin: 2rem; background: #fafafa; color: #222; }
pre.output { background: #1e1e2e; color: #cdd6f4; padding: 1rem; border-radius: 8px; }
.preview-box { border: 1px solid #ccc; resize: horizontal; overflow: hidden; max-width: 100%; }
.preview-box iframe { width: 100%; height: 320px; border: 0; display: block; }
.preview-info { font-size: 0.85rem; color: #666; margin-top: 0.5rem; }
"#;

/// Self-contained document loaded into the preview frame
pub fn preview_document(target: &PreviewTarget) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        PREVIEW_STYLES,
        target.to_html()
    )
}

/// Standalone page showing the declaration and the preview frame
pub fn host_page(output_text: &str, frame_width: &str, info: &str, document: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>Fluid clamp() preview</title>\n<style>{}</style>\n</head>\n<body>\n<pre class=\"output\" id=\"output\">{}</pre>\n<div class=\"preview-box\" id=\"box-max\" style=\"width: {}px;\">\n<iframe id=\"iframe-max\" srcdoc=\"{}\"></iframe>\n</div>\n<div class=\"preview-info\" id=\"info-max\">{}</div>\n</body>\n</html>\n",
        HOST_STYLES,
        escape_text(output_text),
        escape_attribute(frame_width),
        escape_attribute(document),
        escape_text(info)
    )
}

/// Escape text for use inside an element body
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for use inside a double-quoted attribute
pub fn escape_attribute(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
