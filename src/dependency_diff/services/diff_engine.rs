use crate::dependency_diff::domain::{DependencyMap, Diff, Manifest, VersionChange};

/// DiffEngine service for comparing dependency sets
///
/// Pure business logic: no I/O and no failure modes. Specifiers are
/// compared with exact, case-sensitive string equality, so `^1.0.0` and
/// `1.0.0` count as a change.
pub struct DiffEngine;

impl DiffEngine {
    /// Compares a base dependency set against a target one
    ///
    /// # Arguments
    /// * `base` - Dependencies before the change
    /// * `target` - Dependencies after the change
    ///
    /// # Returns
    /// A Diff whose `removed` and `changed` entries follow base order and
    /// whose `added` entries follow target order
    pub fn compare(base: &DependencyMap, target: &DependencyMap) -> Diff {
        let mut diff = Diff::default();

        for (name, base_version) in base.iter() {
            match target.get(name) {
                None => diff.removed.insert(name, base_version),
                Some(target_version) if target_version != base_version => {
                    diff.changed.insert(
                        name.to_string(),
                        VersionChange::new(base_version, target_version),
                    );
                }
                Some(_) => {}
            }
        }

        for (name, target_version) in target.iter() {
            if !base.contains(name) {
                diff.added.insert(name, target_version);
            }
        }

        diff
    }

    /// Compares both dependency sections of two manifests
    ///
    /// # Returns
    /// `(dependencies, devDependencies)` diffs
    pub fn compare_manifests(base: &Manifest, target: &Manifest) -> (Diff, Diff) {
        (
            Self::compare(&base.dependencies, &target.dependencies),
            Self::compare(&base.dev_dependencies, &target.dev_dependencies),
        )
    }
}

/// Compares a base dependency set against a target one
///
/// Shorthand for [`DiffEngine::compare`].
pub fn compare_deps(base: &DependencyMap, target: &DependencyMap) -> Diff {
    DiffEngine::compare(base, target)
}
