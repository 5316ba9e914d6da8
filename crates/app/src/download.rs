//! Client-side file hand-off: text is encoded into a data URL and clicked
//! through a temporary anchor so the browser saves it.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use dioxus::prelude::*;

/// `data:` URL carrying `content` as base64 UTF-8 text.
pub fn text_data_url(content: &str) -> String {
    format!(
        "data:text/plain;charset=utf-8;base64,{}",
        STANDARD.encode(content.as_bytes())
    )
}

/// JavaScript that saves `content` as `file_name`.
fn save_script(file_name: &str, content: &str) -> String {
    // JSON string literals are valid JavaScript string literals.
    let name = serde_json::Value::String(file_name.to_string()).to_string();
    let href = serde_json::Value::String(text_data_url(content)).to_string();
    format!(
        "(function() {{ var a = document.createElement('a'); a.href = {href}; a.download = {name}; \
         document.body.appendChild(a); a.click(); a.remove(); }})();"
    )
}

pub fn save_text_file(file_name: &str, content: &str) {
    document::eval(&save_script(file_name, content));
    tracing::info!(file = file_name, bytes = content.len(), "download handed to browser");
}

/// Open `url` in a new tab.
pub fn open_external(url: &str) {
    let target = serde_json::Value::String(url.to_string()).to_string();
    document::eval(&format!("window.open({target}, '_blank');"));
    tracing::info!(url, "opened external link");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn data_url_is_base64_text() {
        let url = text_data_url("hello");
        assert_eq!(url, "data:text/plain;charset=utf-8;base64,aGVsbG8=");
    }

    #[test]
    fn data_url_payload_decodes_back() {
        let content = "PASSPORT VERIFICATION REPORT\nName: Zoë\n";
        let url = text_data_url(content);
        let payload = url.rsplit(',').next().unwrap();
        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), content);
    }

    #[test]
    fn save_script_quotes_file_name() {
        let script = save_script("it's \"odd\".txt", "x");
        assert!(script.contains(r#"a.download = "it's \"odd\".txt""#));
    }
}
