//! Pure helpers for the code-block toolbar.

/// Language named by a `language-xxx` class, or `"text"`.
pub fn language_from_class(class_name: &str) -> String {
    class_name
        .split_whitespace()
        .find_map(|cls| cls.strip_prefix("language-"))
        .filter(|lang| !lang.is_empty())
        .unwrap_or("text")
        .to_string()
}

/// Header title of the `index`-th (1-based) block.
pub fn block_title(index: usize) -> String {
    format!("Code Block {index}")
}

/// Download name, e.g. `code-block-2.rs`; plain text uses `.txt`.
pub fn download_filename(index: usize, language: &str) -> String {
    let ext = if language == "text" { "txt" } else { language };
    format!("code-block-{index}.{ext}")
}

/// Escape text for inclusion in HTML element content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Standalone page showing one block's source.
pub fn raw_page(title: &str, language: &str, code: &str) -> String {
    let title = escape_html(title);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>body{{font-family:monospace;padding:20px;background:#f5f5f5}}\
         pre{{background:#fff;padding:20px;border-radius:8px;overflow:auto}}</style>\n\
         </head>\n<body>\n<h3>{title} ({lang})</h3>\n<pre><code>{code}</code></pre>\n</body>\n</html>\n",
        lang = escape_html(&language.to_uppercase()),
        code = escape_html(code),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_detection() {
        assert_eq!(language_from_class("language-rust"), "rust");
        assert_eq!(language_from_class("hljs language-csharp"), "csharp");
        assert_eq!(language_from_class(""), "text");
        assert_eq!(language_from_class("language-"), "text");
    }

    #[test]
    fn test_download_filename() {
        assert_eq!(download_filename(1, "rust"), "code-block-1.rust");
        assert_eq!(download_filename(3, "text"), "code-block-3.txt");
    }

    #[test]
    fn test_raw_page_escapes_code() {
        let page = raw_page("Code Block 1", "html", "<b>&</b>");
        assert!(page.contains("<pre><code>&lt;b&gt;&amp;&lt;/b&gt;</code></pre>"));
        assert!(page.contains("<h3>Code Block 1 (HTML)</h3>"));
    }
}
