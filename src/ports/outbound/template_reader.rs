use crate::shared::Result;
use std::path::Path;

/// TemplateReader port for loading HTML report templates
pub trait TemplateReader {
    /// Reads the template text at the given path
    ///
    /// # Errors
    /// Returns `DiffError::TemplateNotFound` if no file exists at the path,
    /// or a read error if it cannot be loaded
    fn read_template(&self, template_path: &Path) -> Result<String>;
}
