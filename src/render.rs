//! Presentation model for the stage walkthrough.

use crate::Normalization;

/// One labelled block of the walkthrough.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepBlock {
    /// Stage title, e.g. `"1. Initial Cleanup"`
    pub title: String,
    /// Multi-line stage description
    pub content: String,
}

/// Everything a front end needs to draw one normalizer run.
///
/// This is a platform-agnostic representation; each consumer draws it with
/// its own backend (DOM, terminal, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderResult {
    /// Blocks in pipeline order
    pub blocks: Vec<StepBlock>,
    /// Final color prefixed with `#`
    pub swatch: String,
}

impl RenderResult {
    /// Plain-text rendering for terminals.
    ///
    /// Each block is its title followed by the content indented two spaces,
    /// then a blank line. The last line names the resulting color.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            out.push_str(&block.title);
            out.push('\n');
            for line in block.content.lines() {
                if line.is_empty() {
                    out.push('\n');
                } else {
                    out.push_str("  ");
                    out.push_str(line);
                    out.push('\n');
                }
            }
            out.push('\n');
        }
        out.push_str("Result: ");
        out.push_str(&self.swatch);
        out.push('\n');
        out
    }

    /// HTML markup for the steps container.
    ///
    /// Titles and contents are escaped, since descriptions quote raw input.
    pub fn to_html(&self) -> String {
        self.blocks
            .iter()
            .map(|block| {
                format!(
                    "<div class=\"step\"><div class=\"step-title\">{}</div><pre class=\"step-content\">{}</pre></div>",
                    escape_html(&block.title),
                    escape_html(&block.content)
                )
            })
            .collect()
    }
}

/// Build the presentation model for a normalizer run.
///
/// ## Example
///
/// ```rust
/// use legacy_color_core::{normalize, render::render_normalization};
///
/// let result = render_normalization(&normalize("#ff0000"));
/// assert_eq!(result.blocks.len(), 6);
/// assert_eq!(result.blocks[0].title, "1. Initial Cleanup");
/// assert_eq!(result.swatch, "#ff0000");
/// ```
pub fn render_normalization(normalization: &Normalization) -> RenderResult {
    let blocks = normalization
        .stages
        .iter()
        .map(|record| StepBlock {
            title: record.title.clone(),
            content: record.description.clone(),
        })
        .collect();

    RenderResult { blocks, swatch: normalization.css_color() }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Web-specific rendering implementation.
#[cfg(feature = "web")]
pub mod web {
    use super::*;
    use crate::{ViewConfig, Visualizer};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Event, HtmlElement, HtmlInputElement};

    fn document() -> Result<Document, String> {
        let window = web_sys::window().ok_or("No window available")?;
        window.document().ok_or_else(|| "No document available".to_string())
    }

    /// Draw a walkthrough into the page.
    ///
    /// Fills the steps container, paints the swatch background and writes the
    /// color code, using the element ids from `config`.
    ///
    /// ## Example
    ///
    /// ```rust,ignore
    /// use legacy_color_core::{normalize, render::{render_normalization, web}, ViewConfig};
    ///
    /// let result = render_normalization(&normalize("chucknorris"));
    /// web::render_to_document(&result, &ViewConfig::default())?;
    /// ```
    pub fn render_to_document(result: &RenderResult, config: &ViewConfig) -> Result<(), String> {
        let document = document()?;

        let steps = document
            .get_element_by_id(&config.steps_id)
            .ok_or_else(|| format!("No element with id `{}`", config.steps_id))?;
        steps.set_inner_html(&result.to_html());

        let swatch = document
            .get_element_by_id(&config.swatch_id)
            .ok_or_else(|| format!("No element with id `{}`", config.swatch_id))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| "Swatch element is not an HtmlElement")?;
        swatch
            .style()
            .set_property("background-color", &result.swatch)
            .map_err(|_| "Failed to set swatch color")?;

        let code = document
            .get_element_by_id(&config.code_id)
            .ok_or_else(|| format!("No element with id `{}`", config.code_id))?;
        code.set_text_content(Some(&result.swatch));

        Ok(())
    }

    /// Seed the input, draw once, and redraw on every `input` event.
    ///
    /// The listener lives for the rest of the page's lifetime.
    pub fn mount(config: ViewConfig) -> Result<(), String> {
        let document = document()?;
        let input = document
            .get_element_by_id(&config.input_id)
            .ok_or_else(|| format!("No element with id `{}`", config.input_id))?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| "Input element is not an HtmlInputElement")?;

        input.set_value(&config.initial_input);
        let mut visualizer = Visualizer::from_config(&config);
        render_to_document(&render_normalization(visualizer.result()), &config)?;

        let source = input.clone();
        let on_input = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            if visualizer.set_input(&source.value()) {
                let result = render_normalization(visualizer.result());
                if let Err(e) = render_to_document(&result, &config) {
                    tracing::warn!(error = %e, "failed to redraw walkthrough");
                }
            }
        });
        input
            .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())
            .map_err(|_| "Failed to attach input listener")?;
        on_input.forget();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;

    #[test]
    fn blocks_follow_stages() {
        let normalization = normalize("chucknorris");
        let result = render_normalization(&normalization);

        assert_eq!(result.blocks.len(), 6);
        for (block, record) in result.blocks.iter().zip(&normalization.stages) {
            assert_eq!(block.title, record.title);
            assert_eq!(block.content, record.description);
        }
        assert_eq!(result.swatch, "#c00000");
    }

    #[test]
    fn text_rendering() {
        let result = render_normalization(&normalize("#ff0000"));
        let text = result.to_text();

        assert!(text.starts_with("1. Initial Cleanup\n  Remove octothorpe: \"#ff0000\" → \"ff0000\"\n\n"));
        assert!(text.contains("4. Split into RGB Components\n  Split into:\n  Red: \"ff\"\n"));
        assert!(text.ends_with("Result: #ff0000\n"));
    }

    #[test]
    fn text_keeps_paragraph_breaks() {
        let result = render_normalization(&normalize("ff00abcdefee00123456dd00987654"));
        let text = result.to_text();
        assert!(text.contains("5. Handle Length\n  Truncate to 8 characters:\n"));
        assert!(text.contains("  Blue: \"dd00987654\" → \"00987654\"\n\n  Remove leading zeros:\n"));
        assert!(text.contains("  Blue: \"0987654\" → \"987654\"\n\n  Truncate to first 2 characters:\n"));
    }

    #[test]
    fn html_is_escaped() {
        let result = render_normalization(&normalize("<b>&"));
        let html = result.to_html();

        assert_eq!(html.matches("<div class=\"step\">").count(), 6);
        assert!(html.contains("&quot;&lt;b&gt;&amp;&quot;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn escape_helper() {
        assert_eq!(escape_html("a<b>'c'&\"d\""), "a&lt;b&gt;&#39;c&#39;&amp;&quot;d&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
