use crate::config::ClassNames;
use anyhow::{Context, Result};
use tera::Tera;

/// Builtin stylesheet. Variables: `container_class`, `control_class`,
/// `insert_class`, `delete_class`, `highlight_class`.
pub const DEFAULT_STYLESHEET: &str = r#"<style type="text/css">
    .{{ container_class }} {
        border: 1px solid #cccccc;
        background: none repeat scroll 0 0 #f8f8f8;
        font-family: 'Bitstream Vera Sans Mono','Courier',monospace;
        font-size: 12px;
        line-height: 1.4;
        white-space: normal;
        word-wrap: break-word;
    }
    .{{ container_class }} div:hover {
        background-color: #ffffcc;
    }
    .{{ container_class }} .{{ control_class }} {
        background-color: #eaf2f5;
        color: #999999;
    }
    .{{ container_class }} .{{ insert_class }} {
        background-color: #ddffdd;
        color: #000000;
    }
    .{{ container_class }} .{{ insert_class }} .{{ highlight_class }} {
        background-color: #aaffaa;
        color: #000000;
    }
    .{{ container_class }} .{{ delete_class }} {
        background-color: #ffdddd;
        color: #000000;
    }
    .{{ container_class }} .{{ delete_class }} .{{ highlight_class }} {
        background-color: #ffaaaa;
        color: #000000;
    }
</style>
"#;

/// Render a stylesheet template with the configured class names.
pub fn render_stylesheet(template: &str, classes: &ClassNames, container: &str) -> Result<String> {
    let mut tera = Tera::default();
    tera.add_raw_template("__ghdiff_stylesheet", template)
        .context("failed to parse stylesheet template")?;

    let mut context = tera::Context::new();
    context.insert("container_class", container);
    context.insert("control_class", &classes.control);
    context.insert("insert_class", &classes.insert);
    context.insert("delete_class", &classes.delete);
    context.insert("highlight_class", &classes.highlight);

    tera.render("__ghdiff_stylesheet", &context)
        .context("failed to render stylesheet template")
}
