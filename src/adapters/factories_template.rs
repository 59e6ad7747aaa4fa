//! Embedded template for the generated factories config file.

use include_dir::{Dir, include_dir};
use minijinja::{Environment, context};

use crate::domain::{AppError, FactoryMapping};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

const FACTORIES_TEMPLATE: &str = "factories.global.php.j2";

/// Tool name referenced in the generated header.
const TOOL_NAME: &str = env!("CARGO_PKG_NAME");

/// Render the complete factories config file for `mapping`.
///
/// Entries appear in natural class-name order, one per line.
pub fn render_factories_file(
    generator: &str,
    mapping: &FactoryMapping,
) -> Result<String, AppError> {
    let source = TEMPLATES_DIR
        .get_file(FACTORIES_TEMPLATE)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::Template(format!("Missing template: {}", FACTORIES_TEMPLATE)))?;

    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_trim_blocks(true);

    // Registered without the .j2 suffix; a .php name disables auto-escaping.
    let name = FACTORIES_TEMPLATE.trim_end_matches(".j2");
    env.add_template(name, source).map_err(|e| {
        AppError::Template(format!("Failed to register template '{}': {}", name, e))
    })?;

    let template = env
        .get_template(name)
        .map_err(|e| AppError::Template(format!("Failed to load template '{}': {}", name, e)))?;

    template
        .render(context! {
            generator => generator,
            tool => TOOL_NAME,
            entries => mapping.sorted_entries(),
        })
        .map_err(|e| AppError::Template(format!("Failed to render template '{}': {}", name, e)))
}
