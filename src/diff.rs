use crate::input::LineSource;
use similar::{ChangeTag, TextDiff};

pub const DEFAULT_CONTEXT: usize = 3;

/// Diff two line sequences into unified-diff lines: a `@@ -s,c +s,c @@`
/// header per hunk followed by ` `, `-` and `+` prefixed lines. The
/// `---`/`+++` file headers are not produced.
pub fn unified_lines<'a, 'b>(
    a: impl Into<LineSource<'a>>,
    b: impl Into<LineSource<'b>>,
    context: usize,
) -> Vec<String> {
    let old = a.into().lines();
    let new = b.into().lines();
    let diff = TextDiff::from_slices(&old, &new);

    let mut lines = Vec::new();
    let mut hunks = 0usize;
    for hunk in diff.unified_diff().context_radius(context).iter_hunks() {
        hunks += 1;
        lines.push(hunk.header().to_string());
        for change in hunk.iter_changes() {
            let prefix = match change.tag() {
                ChangeTag::Equal => ' ',
                ChangeTag::Delete => '-',
                ChangeTag::Insert => '+',
            };
            lines.push(format!("{prefix}{}", change.value()));
        }
    }

    tracing::debug!(
        old_lines = old.len(),
        new_lines = new.len(),
        hunks,
        "computed line diff"
    );
    lines
}

/// Full textual patch including `---`/`+++` file headers, in the form
/// [`Renderer::colorize_text`](crate::render::Renderer::colorize_text) accepts.
pub fn format_unified_diff<'a, 'b>(
    a: impl Into<LineSource<'a>>,
    b: impl Into<LineSource<'b>>,
    label_a: &str,
    label_b: &str,
    context: usize,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("--- {}\n", label_a));
    output.push_str(&format!("+++ {}\n", label_b));

    for line in unified_lines(a, b, context) {
        output.push_str(&line);
        output.push('\n');
    }

    output
}
