//! Inject command implementation.

use crate::domain::AppError;

pub fn run_inject(class: &str, factory: &str, project_root: Option<&str>) -> Result<(), AppError> {
    let written = crate::inject_factory(project_root, class, factory)?;
    println!("✅ Registered {} => {} in {}", class, factory, written.display());
    Ok(())
}
