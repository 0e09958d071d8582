pub mod config;
pub mod diff;
pub mod escape;
pub mod highlight;
pub mod input;
pub mod loader;
pub mod render;
pub mod stylesheet;

use anyhow::Result;
use config::Config;
use input::LineSource;
use render::Renderer;

/// Diff `a` against `b` and render the result as HTML using `config`.
pub fn diff_html<'a, 'b>(
    a: impl Into<LineSource<'a>>,
    b: impl Into<LineSource<'b>>,
    config: &Config,
) -> Result<String> {
    let lines = diff::unified_lines(a, b, config.context);
    let renderer = Renderer::new(config.clone())?;
    Ok(renderer.colorize(&lines, config.css))
}
