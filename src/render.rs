use crate::config::{Config, validate_config};
use crate::escape::{escape_attr, escape_text};
use crate::highlight::line_diff;
use crate::input::split_lines;
use crate::stylesheet::{DEFAULT_STYLESHEET, render_stylesheet};
use anyhow::{Result, bail};
use std::collections::VecDeque;

/// Styling role a rendered element can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Control,
    Insert,
    Delete,
    Highlight,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Control, Role::Insert, Role::Delete, Role::Highlight];

    pub fn name(self) -> &'static str {
        match self {
            Role::Control => "control",
            Role::Insert => "insert",
            Role::Delete => "delete",
            Role::Highlight => "highlight",
        }
    }
}

/// Kind of a unified-diff line, decided by its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Control,
    Insert,
    Delete,
    Context,
}

impl LineKind {
    pub fn of(line: &str) -> Self {
        if line.starts_with("@@") {
            LineKind::Control
        } else if line.starts_with('-') {
            LineKind::Delete
        } else if line.starts_with('+') {
            LineKind::Insert
        } else {
            LineKind::Context
        }
    }

    /// Context lines carry no role and render with an empty class.
    pub fn role(self) -> Option<Role> {
        match self {
            LineKind::Control => Some(Role::Control),
            LineKind::Insert => Some(Role::Insert),
            LineKind::Delete => Some(Role::Delete),
            LineKind::Context => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub control: usize,
    pub insert: usize,
    pub delete: usize,
    pub context: usize,
    /// Delete/insert pairs rendered with intra-line highlights.
    pub replaced: usize,
}

impl RenderStats {
    fn count(&mut self, kind: LineKind) {
        match kind {
            LineKind::Control => self.control += 1,
            LineKind::Insert => self.insert += 1,
            LineKind::Delete => self.delete += 1,
            LineKind::Context => self.context += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.control + self.insert + self.delete + self.context
    }
}

/// Renders unified-diff lines as an HTML fragment.
///
/// The configuration is fixed at construction; a renderer can be shared
/// across threads and reused for any number of diffs.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: Config,
    stylesheet: String,
}

impl Renderer {
    /// Fails when the class names are invalid or the stylesheet template
    /// cannot be rendered.
    pub fn new(config: Config) -> Result<Self> {
        let errors = validate_config(&config);
        if !errors.is_empty() {
            bail!("invalid render configuration: {}", errors.join("; "));
        }
        let template = config
            .stylesheet_template
            .as_deref()
            .unwrap_or(DEFAULT_STYLESHEET);
        let stylesheet = render_stylesheet(template, &config.classes, &config.container)?;
        Ok(Self { config, stylesheet })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    pub fn colorize<S: AsRef<str>>(&self, lines: &[S], include_css: bool) -> String {
        self.colorize_with_stats(lines, include_css).0
    }

    /// Same as [`Renderer::colorize`] for a diff held in a single string.
    pub fn colorize_text(&self, diff: &str, include_css: bool) -> String {
        self.colorize(&split_lines(diff), include_css)
    }

    pub fn colorize_with_stats<S: AsRef<str>>(
        &self,
        lines: &[S],
        include_css: bool,
    ) -> (String, RenderStats) {
        let (body, stats) = self.render_body(lines);
        let mut out = if include_css {
            self.stylesheet.clone()
        } else {
            String::new()
        };
        out.push_str(&body.join("\n"));
        (out, stats)
    }

    /// Render each diff line to its own element, wrapped in the container
    /// open and close tags. Everything before the first hunk header is
    /// dropped.
    pub fn render_body<S: AsRef<str>>(&self, lines: &[S]) -> (Vec<String>, RenderStats) {
        let mut pending: VecDeque<&str> = lines
            .iter()
            .map(|line| line.as_ref())
            .skip_while(|line| !line.starts_with("@@"))
            .collect();
        let mut stats = RenderStats::default();
        let mut out = Vec::with_capacity(pending.len() + 2);

        out.push(format!(
            r#"<div class="{}">"#,
            escape_attr(&self.config.container)
        ));

        while let Some(line) = pending.pop_front() {
            let kind = LineKind::of(line);

            if kind == LineKind::Delete {
                if let Some(insert) = take_replacement(&mut pending) {
                    let highlight = escape_attr(&self.config.classes.highlight);
                    let (old, new) = line_diff(&line[1..], &insert[1..], &highlight);
                    out.push(self.make_line(Some(Role::Delete), "-", &old));
                    out.push(self.make_line(Some(Role::Insert), "+", &new));
                    stats.delete += 1;
                    stats.insert += 1;
                    stats.replaced += 1;
                    continue;
                }
            }

            out.push(self.make_line(kind.role(), "", &escape_text(line)));
            stats.count(kind);
        }

        out.push("</div>".to_string());

        tracing::debug!(
            lines = stats.total(),
            replaced = stats.replaced,
            "rendered diff body"
        );
        (out, stats)
    }

    fn make_line(&self, role: Option<Role>, prefix: &str, content: &str) -> String {
        let class = role
            .map(|role| escape_attr(self.config.classes.get(role)))
            .unwrap_or_default();
        format!(r#"<div class="{class}">{prefix}{content}</div>"#)
    }
}

/// Take the insertion that directly follows a deletion if the two read as
/// one modified line: the insertion must not be followed by another `+` or
/// `-` line. Lines that are not taken stay queued in order.
fn take_replacement<'a>(pending: &mut VecDeque<&'a str>) -> Option<&'a str> {
    let next = *pending.front()?;
    if !next.starts_with('+') {
        return None;
    }
    let isolated = pending
        .get(1)
        .is_none_or(|after| !after.starts_with(['+', '-']));
    if isolated { pending.pop_front() } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue<'a>(lines: &[&'a str]) -> VecDeque<&'a str> {
        lines.iter().copied().collect()
    }

    #[test]
    fn line_kind_follows_prefix() {
        assert_eq!(LineKind::of("@@ -1 +1 @@"), LineKind::Control);
        assert_eq!(LineKind::of("+x"), LineKind::Insert);
        assert_eq!(LineKind::of("-x"), LineKind::Delete);
        assert_eq!(LineKind::of(" x"), LineKind::Context);
        assert_eq!(LineKind::of("\\ No newline at end of file"), LineKind::Context);
        assert_eq!(LineKind::of(""), LineKind::Context);
    }

    #[test]
    fn takes_insert_followed_by_context() {
        let mut pending = queue(&["+new", " ctx"]);
        assert_eq!(take_replacement(&mut pending), Some("+new"));
        assert_eq!(pending, queue(&[" ctx"]));
    }

    #[test]
    fn takes_trailing_insert() {
        let mut pending = queue(&["+new"]);
        assert_eq!(take_replacement(&mut pending), Some("+new"));
        assert!(pending.is_empty());
    }

    #[test]
    fn leaves_insert_run_untouched() {
        let mut pending = queue(&["+y", "+z"]);
        assert_eq!(take_replacement(&mut pending), None);
        assert_eq!(pending, queue(&["+y", "+z"]));
    }

    #[test]
    fn leaves_insert_before_delete_untouched() {
        let mut pending = queue(&["+y", "-z", " c"]);
        assert_eq!(take_replacement(&mut pending), None);
        assert_eq!(pending, queue(&["+y", "-z", " c"]));
    }

    #[test]
    fn nothing_to_take_at_end() {
        let mut pending = queue(&[]);
        assert_eq!(take_replacement(&mut pending), None);
    }

    #[test]
    fn role_names_match_defaults() {
        let names: Vec<_> = Role::ALL.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["control", "insert", "delete", "highlight"]);
    }
}
