//! Fixed page layout wrapped around every generated body.

use std::sync::OnceLock;

use minijinja::{AutoEscape, Environment, context};

use crate::domain::site::LOADER_FILE;

const SHELL_NAME: &str = "page_shell.php";
const SHELL_TEMPLATE: &str = include_str!("../assets/page_shell.php.j2");

/// Content column width in pixels.
pub const CONTENT_WIDTH: u32 = 900;

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// One generated page: a themed header when available, the body in a
/// fixed-width wrapper, then the themed footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageShell<'a> {
    pub slug: &'a str,
    /// Sent as the `X-Robots-Tag` response header.
    pub index_policy: &'a str,
    pub body: &'a str,
}

impl PageShell<'_> {
    pub fn render(&self) -> Result<String, minijinja::Error> {
        let template = environment().get_template(SHELL_NAME)?;
        let mut rendered = template.render(context! {
            slug => self.slug,
            index_policy => self.index_policy,
            body => self.body,
            loader_file => LOADER_FILE,
            content_width => CONTENT_WIDTH,
        })?;
        rendered.push('\n');
        Ok(rendered)
    }
}

fn environment() -> &'static Environment<'static> {
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_filter("php_str", php_str);
        env.add_template(SHELL_NAME, SHELL_TEMPLATE).expect("embedded page shell must parse");
        env
    })
}

/// Escape a value for a single-quoted PHP string literal on one line.
fn php_str(value: String) -> String {
    value
        .chars()
        .filter(|c| *c != '\r' && *c != '\n')
        .fold(String::with_capacity(value.len()), |mut out, c| {
            if c == '\\' || c == '\'' {
                out.push('\\');
            }
            out.push(c);
            out
        })
}
