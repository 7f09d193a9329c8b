//! Generation of the themed preview document.

use log::warn;

use crate::assets::{AssetSource, LIBRARY_ASSETS};
use crate::codec::UPDATE_ENTRY_POINT;
use crate::config::PreviewConfig;
use crate::error::Result;
use crate::theme::{ThemePalette, ThemeSnapshot};

/// Heading shown by [`fallback_document`].
pub const FALLBACK_ERROR_MARKER: &str = "Failed to load markmap";

/// Builds the HTML document loaded into the renderer host.
///
/// The output is a pure function of the theme, the configuration and the
/// library scripts returned by the [`AssetSource`].
#[derive(Clone, Debug)]
pub struct TemplateProvider<Assets: AssetSource> {
    assets: Assets,
    config: PreviewConfig,
}

impl<Assets: AssetSource> TemplateProvider<Assets> {
    pub fn new(assets: Assets, config: PreviewConfig) -> Self {
        Self { assets, config }
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    /// Build the preview document, degrading to [`fallback_document`] when a
    /// library script is unavailable.
    pub fn build(&self, theme: &ThemeSnapshot) -> String {
        match self.try_build(theme) {
            Ok(document) => document,
            Err(err) => {
                warn!("markmap preview unavailable: {err}");
                fallback_document(theme, &err.to_string())
            }
        }
    }

    /// Build the preview document, surfacing asset failures.
    pub fn try_build(&self, theme: &ThemeSnapshot) -> Result<String> {
        let mut libraries = String::new();
        for name in LIBRARY_ASSETS {
            let source = self.assets.load(name)?;
            libraries.push_str("<script>\n");
            libraries.push_str(&source);
            libraries.push_str("\n</script>\n");
        }

        let options = serde_json::to_string(&self.config.markmap)?;
        let placeholder = js_string(&self.config.placeholder)?;

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<title>Markmap</title>
<style>
{variables}
{STYLESHEET}
</style>
</head>
<body>
<svg id="markmap"></svg>
{libraries}<script>
(function () {{
  try {{
    var lib = window.markmap;
    if (!lib || !lib.Transformer || !lib.Markmap) {{
      throw new Error('markmap libraries did not load');
    }}
    var transformer = new lib.Transformer();
    var mm = lib.Markmap.create(document.getElementById('markmap'), {options});
    var placeholder = {placeholder};
    window.{UPDATE_ENTRY_POINT} = function (content) {{
      var source = content && content.trim() !== '' ? content : placeholder;
      try {{
        mm.setData(transformer.transform(source).root);
      }} catch (e) {{
        console.error('markmap render failed:', e);
        mm.setData({{
          content: 'Error',
          children: [{{ content: 'Failed to render: ' + e.message, children: [] }}]
        }});
      }}
      mm.fit();
    }};
  }} catch (e) {{
    console.error('markmap initialization failed:', e);
    var message = document.createElement('div');
    message.className = 'markmap-error';
    message.textContent = 'Failed to initialize markmap: ' + e.message;
    document.body.replaceChildren(message);
  }}
}})();
</script>
</body>
</html>
"#,
            variables = css_variables(&theme.palette()),
        ))
    }
}

/// Minimal themed document shown when the real preview cannot be built.
pub fn fallback_document(theme: &ThemeSnapshot, message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<title>Markmap Error</title>
<style>
body {{ background: {background}; color: {foreground}; font-family: system-ui, sans-serif; padding: 20px; }}
</style>
</head>
<body>
<h1>{FALLBACK_ERROR_MARKER}</h1>
<p class="markmap-error">Error: {message}</p>
<p>Please check that the markmap resources are available.</p>
</body>
</html>
"#,
        background = theme.background,
        foreground = theme.foreground,
        message = escape_html(message),
    )
}

fn css_variables(palette: &ThemePalette) -> String {
    format!(
        ":root {{\n\
         \x20 --mm-background: {};\n\
         \x20 --mm-text: {};\n\
         \x20 --mm-node-stroke: {};\n\
         \x20 --mm-link: {};\n\
         \x20 --mm-node-fill: {};\n\
         \x20 --mm-node-border: {};\n\
         \x20 --mm-table-header: {};\n\
         \x20 --mm-code-block-background: {};\n\
         \x20 --mm-code-block-border: {};\n\
         \x20 --mm-inline-code-background: {};\n\
         }}",
        palette.background,
        palette.text,
        palette.node_stroke,
        palette.link,
        palette.node_fill,
        palette.node_border,
        palette.table_header,
        palette.code_block_background,
        palette.code_block_border,
        palette.inline_code_background,
    )
}

const STYLESHEET: &str = r#"body {
  margin: 0;
  padding: 0;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', system-ui, sans-serif;
  background-color: var(--mm-background);
  color: var(--mm-text);
  overflow: hidden;
}
#markmap {
  width: 100vw;
  height: 100vh;
}
.markmap-error {
  padding: 20px;
  text-align: center;
  color: #ff6b6b;
}
.markmap-node > circle {
  stroke: var(--mm-node-stroke);
  stroke-width: 2;
}
.markmap-link {
  stroke: var(--mm-link);
  stroke-width: 2;
}
.markmap-node text {
  fill: var(--mm-text);
}
.markmap-node rect {
  fill: var(--mm-node-fill);
  stroke: var(--mm-node-border);
  stroke-width: 1;
}
.markmap-foreign {
  color: var(--mm-text);
}
.markmap-foreign img {
  max-width: 200px;
  max-height: 150px;
}
.markmap-foreign table {
  border-collapse: collapse;
  font-size: 12px;
  background: var(--mm-node-fill);
}
.markmap-foreign th,
.markmap-foreign td {
  border: 1px solid var(--mm-node-border);
  padding: 4px 8px;
  color: var(--mm-text);
}
.markmap-foreign th {
  background-color: var(--mm-table-header);
  font-weight: bold;
}
.markmap-foreign input[type="checkbox"] {
  margin-right: 6px;
}
.markmap-foreign pre {
  background-color: var(--mm-code-block-background);
  border: 1px solid var(--mm-code-block-border);
  border-radius: 4px;
  padding: 8px;
  font-family: 'Monaco', 'Menlo', 'Ubuntu Mono', monospace;
  font-size: 12px;
  overflow-x: auto;
}
.markmap-foreign code {
  background-color: var(--mm-inline-code-background);
  border-radius: 2px;
  padding: 2px 4px;
  font-family: 'Monaco', 'Menlo', 'Ubuntu Mono', monospace;
}"#;

/// JSON string literal that is also safe inside an inline `<script>`.
fn js_string(text: &str) -> Result<String> {
    Ok(serde_json::to_string(text)?.replace("</", "<\\/"))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
