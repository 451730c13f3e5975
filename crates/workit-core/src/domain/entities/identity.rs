//! Module identity: which token to replace, and how.
//!
//! The template repository refers to itself by a module path. On a
//! CLI-flavoured branch that path is the branch name itself; everywhere else
//! it is the canonical upstream module path. [`IdentityPolicy`] captures that
//! coupling between ref naming and module-path conventions in one place.
//!
//! Substitution is literal text matching. It is not path-boundary-aware: a
//! file mentioning `cli-template-extras` is rewritten when the old identity
//! is `cli-template`.

use std::fmt;
use std::path::{Path, PathBuf};

/// Module path the template declares on non-CLI branches.
pub const CANONICAL_TEMPLATE_IDENTITY: &str = "github.com/xiaohangshuhub/go-workit";

/// Extension of files eligible for reference rewriting.
pub const SOURCE_EXTENSION: &str = "go";

/// Version-control metadata directory removed after the clone.
pub const METADATA_DIR: &str = ".git";

/// How the template's current identity is derived from the template ref.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityPolicy {
    /// The ref name is the old identity.
    RefBased,
    /// The old identity is [`CANONICAL_TEMPLATE_IDENTITY`].
    CanonicalTemplate,
}

impl IdentityPolicy {
    /// Refs containing `cli` are ref-based; all others are canonical.
    pub fn for_ref(template_ref: &str) -> Self {
        if template_ref.contains("cli") {
            Self::RefBased
        } else {
            Self::CanonicalTemplate
        }
    }

    pub fn old_identity(self, template_ref: &str) -> &str {
        match self {
            Self::RefBased => template_ref,
            Self::CanonicalTemplate => CANONICAL_TEMPLATE_IDENTITY,
        }
    }
}

impl fmt::Display for IdentityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RefBased => "ref-based",
            Self::CanonicalTemplate => "canonical-template",
        })
    }
}

/// Result of applying an [`IdentityRewrite`] to one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Substitution {
    /// The old identity does not occur; the file must not be written.
    Unchanged,
    /// Every occurrence was replaced.
    Rewritten { content: String, occurrences: usize },
}

/// Replace one module identity with another across a project tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityRewrite {
    old_identity: String,
    new_identity: String,
    root_dir: PathBuf,
}

impl IdentityRewrite {
    pub fn new(
        old_identity: impl Into<String>,
        new_identity: impl Into<String>,
        root_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            old_identity: old_identity.into(),
            new_identity: new_identity.into(),
            root_dir: root_dir.into(),
        }
    }

    pub fn old_identity(&self) -> &str {
        &self.old_identity
    }
    pub fn new_identity(&self) -> &str {
        &self.new_identity
    }
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Metadata directory under the root.
    pub fn metadata_dir(&self) -> PathBuf {
        self.root_dir.join(METADATA_DIR)
    }

    /// Subtree walked for reference rewriting. The whole project root.
    pub fn source_root(&self) -> &Path {
        &self.root_dir
    }

    /// Whether `path` names a file whose references should be rewritten.
    pub fn is_source_file(path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
    }

    /// Substitute every literal occurrence of the old identity.
    ///
    /// An empty old identity never matches.
    pub fn apply(&self, content: &str) -> Substitution {
        if self.old_identity.is_empty() {
            return Substitution::Unchanged;
        }
        let occurrences = content.matches(self.old_identity.as_str()).count();
        if occurrences == 0 {
            return Substitution::Unchanged;
        }
        Substitution::Rewritten {
            content: content.replace(self.old_identity.as_str(), &self.new_identity),
            occurrences,
        }
    }
}

impl fmt::Display for IdentityRewrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} in {}",
            self.old_identity,
            self.new_identity,
            self.root_dir.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(old: &str, new: &str) -> IdentityRewrite {
        IdentityRewrite::new(old, new, "demo")
    }

    // ── policy ────────────────────────────────────────────────────────────────

    #[test]
    fn cli_template_ref_is_its_own_identity() {
        let policy = IdentityPolicy::for_ref("cli-template");
        assert_eq!(policy, IdentityPolicy::RefBased);
        assert_eq!(policy.old_identity("cli-template"), "cli-template");
    }

    #[test]
    fn release_ref_uses_canonical_identity() {
        let policy = IdentityPolicy::for_ref("release");
        assert_eq!(policy, IdentityPolicy::CanonicalTemplate);
        assert_eq!(policy.old_identity("release"), CANONICAL_TEMPLATE_IDENTITY);
    }

    #[test]
    fn cli_anywhere_in_the_ref_selects_ref_based() {
        assert_eq!(
            IdentityPolicy::for_ref("feature/client-api"),
            IdentityPolicy::RefBased
        );
        assert_eq!(IdentityPolicy::for_ref("main"), IdentityPolicy::CanonicalTemplate);
    }

    #[test]
    fn match_is_case_sensitive() {
        assert_eq!(
            IdentityPolicy::for_ref("CLI-template"),
            IdentityPolicy::CanonicalTemplate
        );
    }

    // ── substitution ──────────────────────────────────────────────────────────

    #[test]
    fn content_without_token_is_unchanged() {
        let sub = rewrite("cli-template", "demo").apply("package main\n");
        assert_eq!(sub, Substitution::Unchanged);
        assert!(!matches!(sub, Substitution::Rewritten { .. }));
    }

    #[test]
    fn every_occurrence_is_replaced() {
        let content = "import (\n\t\"cli-template/internal/a\"\n\t\"cli-template/internal/b\"\n)\n";
        let Substitution::Rewritten {
            content,
            occurrences,
        } = rewrite("cli-template", "demo").apply(content)
        else {
            panic!("expected a rewrite");
        };
        assert_eq!(occurrences, 2);
        assert!(!content.contains("cli-template"));
        assert_eq!(content.matches("demo/internal").count(), 2);
    }

    #[test]
    fn substring_of_longer_identifier_is_rewritten() {
        let sub = rewrite("cli-template", "demo").apply("\"cli-template-extras/pkg\"");
        assert_eq!(
            sub,
            Substitution::Rewritten {
                content: "\"demo-extras/pkg\"".into(),
                occurrences: 1
            }
        );
    }

    #[test]
    fn identical_identities_still_report_a_rewrite() {
        let sub = rewrite("demo", "demo").apply("import \"demo/x\"");
        assert_eq!(
            sub,
            Substitution::Rewritten {
                content: "import \"demo/x\"".into(),
                occurrences: 1
            }
        );
    }

    #[test]
    fn new_identity_containing_old_is_not_rewritten_twice() {
        let sub = rewrite("app", "app-v2").apply("app app");
        assert_eq!(
            sub,
            Substitution::Rewritten {
                content: "app-v2 app-v2".into(),
                occurrences: 2
            }
        );
    }

    #[test]
    fn empty_old_identity_never_matches() {
        assert_eq!(rewrite("", "demo").apply("anything"), Substitution::Unchanged);
    }

    // ── layout ────────────────────────────────────────────────────────────────

    #[test]
    fn only_go_files_are_source_files() {
        assert!(IdentityRewrite::is_source_file(Path::new("cmd/service1/main.go")));
        assert!(!IdentityRewrite::is_source_file(Path::new("go.mod")));
        assert!(!IdentityRewrite::is_source_file(Path::new("README.md")));
        assert!(!IdentityRewrite::is_source_file(Path::new("main.go.bak")));
    }

    #[test]
    fn metadata_dir_is_under_root() {
        assert_eq!(
            rewrite("a", "b").metadata_dir(),
            PathBuf::from("demo").join(".git")
        );
    }
}
