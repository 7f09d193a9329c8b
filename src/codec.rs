//! Transport encoding for render payloads.
//!
//! Document text is never interpolated into script source. It travels as
//! standard padded base64 over its UTF-8 bytes, and the injected script
//! decodes it with `atob` + `TextDecoder` before calling the page's entry point.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::Result;

/// Name of the global update function defined by the generated document.
pub const UPDATE_ENTRY_POINT: &str = "markmapUpdate";

const PAYLOAD_OPEN: &str = "atob('";
const PAYLOAD_CLOSE: &str = "')";

/// Encode document text into a script-safe payload.
pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode a payload produced by [`encode`] back into the original text.
pub fn decode(payload: &str) -> Result<String> {
    let bytes = STANDARD.decode(payload)?;
    Ok(String::from_utf8(bytes)?)
}

/// Build the script that hands `text` to the page's update entry point.
///
/// The script is a silent no-op while the entry point is undefined, and any
/// exception thrown by decoding or rendering is caught and logged in the page.
pub fn render_script(text: &str) -> String {
    format!(
        "(function () {{\n\
         \x20 var update = window.{entry};\n\
         \x20 if (typeof update !== 'function') {{ return; }}\n\
         \x20 try {{\n\
         \x20   var bytes = Uint8Array.from({open}{payload}{close}, function (c) {{ return c.charCodeAt(0); }});\n\
         \x20   update(new TextDecoder('utf-8').decode(bytes));\n\
         \x20 }} catch (e) {{\n\
         \x20   console.error('markmap update failed:', e);\n\
         \x20 }}\n\
         }})();",
        entry = UPDATE_ENTRY_POINT,
        open = PAYLOAD_OPEN,
        payload = encode(text),
        close = PAYLOAD_CLOSE,
    )
}

/// Extract the encoded payload from a script built by [`render_script`].
pub fn payload_from_script(script: &str) -> Option<&str> {
    let start = script.find(PAYLOAD_OPEN)? + PAYLOAD_OPEN.len();
    let len = script[start..].find(PAYLOAD_CLOSE)?;
    Some(&script[start..start + len])
}
