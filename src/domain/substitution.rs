//! Template body sanitizing and placeholder substitution.
//!
//! Each key is substituted in four syntaxes, in this order: `{{KEY}}`,
//! `%%KEY%%`, `__KEY__`, then the bare word `KEY`. Keys are processed in
//! map order, so text inserted for an earlier key can still be matched by a
//! later one.
//!
//! The bare-word form matches any prose equal to a key (for example a
//! sentence mentioning `EMAIL`). It is kept for existing templates; new
//! templates should use the delimited forms.

use std::sync::OnceLock;

use regex::{NoExpand, Regex};

use crate::domain::placeholders::PlaceholderMap;

static EXECUTABLE_BLOCK: OnceLock<Regex> = OnceLock::new();

fn executable_block() -> &'static Regex {
    EXECUTABLE_BLOCK
        .get_or_init(|| Regex::new(r"(?s)<\?.*?(?:\?>|\z)").expect("static pattern"))
}

/// Remove every `<? ... ?>` block. An unclosed `<?` runs to the end of the text.
///
/// Repeats until nothing matches, since removing a block can join a `<` with a
/// following `?`.
pub fn strip_executable_blocks(template: &str) -> String {
    let mut text = template.to_string();
    while executable_block().is_match(&text) {
        text = executable_block().replace_all(&text, "").into_owned();
    }
    text
}

/// Replace one key in all four syntaxes.
pub fn substitute_key(text: &str, key: &str, value: &str) -> String {
    let mut out = text
        .replace(&format!("{{{{{key}}}}}"), value)
        .replace(&format!("%%{key}%%"), value)
        .replace(&format!("__{key}__"), value);

    if let Ok(bare) = Regex::new(&format!(r"\b{}\b", regex::escape(key))) {
        out = bare.replace_all(&out, NoExpand(value)).into_owned();
    }
    out
}

/// Strip executable blocks, substitute every key of `map` in order, then strip
/// again so substituted text cannot reassemble an opening tag.
pub fn render_body(template: &str, map: &PlaceholderMap) -> String {
    let mut body = strip_executable_blocks(template);
    for (key, value) in map.substitutions() {
        body = substitute_key(&body, key, value);
    }
    strip_executable_blocks(&body)
}
