//! Stage 2: fenced code blocks
//!
//! Every fenced region becomes a container with a header bar (language label and copy button)
//! above a `<pre><code>` body. The body is trimmed and protected, which folds the whole block
//! onto one line and hides its delimiters from every later stage. A fence that is never closed
//! runs to the end of the input.

use crate::options::RenderOptions;
use crate::protect;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static FENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"```(?:([A-Za-z0-9_+#.-]+)[ \t]*\n|[ \t]*\n)?([\s\S]*?)(?:```|\z)")
        .expect("valid fence regex")
});

pub fn apply(text: &str, options: &RenderOptions) -> String {
    FENCE_RE
        .replace_all(text, |caps: &Captures| {
            let language = caps
                .get(1)
                .map_or(options.default_language.as_str(), |m| m.as_str());
            let body = caps.get(2).map_or("", |m| m.as_str());
            code_block(language, body, options)
        })
        .into_owned()
}

fn code_block(language: &str, body: &str, options: &RenderOptions) -> String {
    let language = protect::protect(language);
    format!(
        "<div class=\"prep-code-block\">\
         <div class=\"prep-code-header\"><span>{language}</span>\
         <button type=\"button\" class=\"prep-copy-button\" data-action=\"copy-code\">{label}</button>\
         </div>\
         <pre class=\"prep-code-body\"><code class=\"language-{language}\">{body}</code></pre>\
         </div>",
        label = protect::protect(&options.copy_label),
        body = protect::protect(body.trim()),
    )
}
