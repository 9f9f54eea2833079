use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Presenter type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

/// Factory for creating output presenters
///
/// Terminal reports go to stdout; JSON and HTML reports go to a file in
/// the output directory.
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use package_diff::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}
