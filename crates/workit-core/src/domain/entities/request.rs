//! The `ScaffoldRequest` value and its typestate builder.
//!
//! A `ScaffoldRequest` is constructed once at the CLI boundary, validated,
//! and then passed by reference through the whole pipeline. It is never
//! mutated afterwards, so the fetch and rewrite steps always agree on the
//! project name and template ref.
//!
//! # Typestate builder
//!
//! The builder uses two phantom marker types (`NoName` / `HasName`) to
//! enforce at *compile time* that a project name is set before `build()` is
//! reachable. Runtime validation still runs in `build()` for the rules the
//! type system cannot express.
//!
//! # Domain purity
//!
//! This module must not import `tracing` and must not touch the filesystem.
//! Whether the target directory exists is checked by `TemplateFetcher`.

use std::fmt;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::{
    entities::identity::{IdentityPolicy, IdentityRewrite},
    error::DomainError,
    validation::DomainValidator,
};

/// Repository the template is cloned from when no override is given.
pub const DEFAULT_TEMPLATE_SOURCE: &str = "git@github.com:xiaohangshuhub/go-workit.git";

/// Branch cloned when no override is given.
pub const DEFAULT_TEMPLATE_REF: &str = "cli-template";

/// Upper bound on the template clone.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(120);

/// Largest accepted clone bound (one day).
pub const MAX_FETCH_TIMEOUT: Duration = Duration::from_secs(24 * 60 * 60);

// ── Value ─────────────────────────────────────────────────────────────────────

/// A fully-validated request to create one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    project_name: String,
    template_source: String,
    template_ref: String,
    overwrite: bool,
    fetch_timeout: Duration,
    output_dir: Option<PathBuf>,
}

impl ScaffoldRequest {
    /// Start building a new `ScaffoldRequest`.
    pub fn builder() -> ScaffoldRequestBuilder<NoName> {
        ScaffoldRequestBuilder::new()
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }
    pub fn template_source(&self) -> &str {
        &self.template_source
    }
    pub fn template_ref(&self) -> &str {
        &self.template_ref
    }
    pub const fn overwrite(&self) -> bool {
        self.overwrite
    }
    pub const fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }

    /// Directory the template is cloned into.
    ///
    /// Without an output directory this is the bare project name, resolved
    /// against the process working directory.
    pub fn target_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.join(&self.project_name),
            None => PathBuf::from(&self.project_name),
        }
    }

    /// The identity the generated project will use for itself.
    pub fn new_identity(&self) -> &str {
        &self.project_name
    }

    pub fn identity_policy(&self) -> IdentityPolicy {
        IdentityPolicy::for_ref(&self.template_ref)
    }

    /// The identity the template uses for itself, per [`IdentityPolicy`].
    pub fn old_identity(&self) -> &str {
        self.identity_policy().old_identity(&self.template_ref)
    }

    /// The rewrite to apply once the template is on disk.
    pub fn identity_rewrite(&self) -> IdentityRewrite {
        IdentityRewrite::new(self.old_identity(), self.new_identity(), self.target_dir())
    }
}

impl fmt::Display for ScaffoldRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} from {} ({})",
            self.project_name, self.template_source, self.template_ref
        )?;
        if self.overwrite {
            f.write_str(" [overwrite]")?;
        }
        Ok(())
    }
}

// ── Typestate markers ─────────────────────────────────────────────────────────

/// Marker: project name has not yet been set.
pub struct NoName;
/// Marker: project name has been set; the request may now be built.
pub struct HasName;

// ── Builder ───────────────────────────────────────────────────────────────────

/// Typestate builder for [`ScaffoldRequest`].
///
/// Every field except the project name has a default.
pub struct ScaffoldRequestBuilder<N> {
    project_name: Option<String>,
    template_source: String,
    template_ref: String,
    overwrite: bool,
    fetch_timeout: Duration,
    output_dir: Option<PathBuf>,
    _marker: PhantomData<N>,
}

impl ScaffoldRequestBuilder<NoName> {
    pub fn new() -> Self {
        Self {
            project_name: None,
            template_source: DEFAULT_TEMPLATE_SOURCE.into(),
            template_ref: DEFAULT_TEMPLATE_REF.into(),
            overwrite: false,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            output_dir: None,
            _marker: PhantomData,
        }
    }

    /// Set the project name. This transitions the builder to `HasName`.
    pub fn project_name(self, name: impl Into<String>) -> ScaffoldRequestBuilder<HasName> {
        ScaffoldRequestBuilder {
            project_name: Some(name.into()),
            template_source: self.template_source,
            template_ref: self.template_ref,
            overwrite: self.overwrite,
            fetch_timeout: self.fetch_timeout,
            output_dir: self.output_dir,
            _marker: PhantomData,
        }
    }
}

impl Default for ScaffoldRequestBuilder<NoName> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> ScaffoldRequestBuilder<N> {
    pub fn template_source(mut self, source: impl Into<String>) -> Self {
        self.template_source = source.into();
        self
    }

    pub fn template_ref(mut self, reference: impl Into<String>) -> Self {
        self.template_ref = reference.into();
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Create the project inside `dir` instead of the working directory.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }
}

impl ScaffoldRequestBuilder<HasName> {
    /// Build and validate the `ScaffoldRequest`.
    pub fn build(self) -> Result<ScaffoldRequest, DomainError> {
        let project_name = self.project_name.ok_or(DomainError::MissingRequiredField {
            field: "project name",
        })?;

        DomainValidator::validate_project_name(&project_name)?;
        DomainValidator::validate_template_field("source", &self.template_source)?;
        DomainValidator::validate_template_field("branch", &self.template_ref)?;
        if self.fetch_timeout.is_zero() {
            return Err(DomainError::ZeroTimeout);
        }
        if self.fetch_timeout > MAX_FETCH_TIMEOUT {
            return Err(DomainError::TimeoutTooLarge {
                requested: self.fetch_timeout,
                max: MAX_FETCH_TIMEOUT,
            });
        }

        Ok(ScaffoldRequest {
            project_name,
            template_source: self.template_source,
            template_ref: self.template_ref,
            overwrite: self.overwrite,
            fetch_timeout: self.fetch_timeout,
            output_dir: self.output_dir,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::identity::CANONICAL_TEMPLATE_IDENTITY;

    fn demo() -> ScaffoldRequestBuilder<HasName> {
        ScaffoldRequest::builder().project_name("demo")
    }

    #[test]
    fn defaults_are_applied() {
        let req = demo().build().unwrap();
        assert_eq!(req.project_name(), "demo");
        assert_eq!(req.template_source(), DEFAULT_TEMPLATE_SOURCE);
        assert_eq!(req.template_ref(), DEFAULT_TEMPLATE_REF);
        assert!(!req.overwrite());
        assert_eq!(req.fetch_timeout(), Duration::from_secs(120));
    }

    #[test]
    fn target_dir_is_the_bare_name_by_default() {
        let req = demo().build().unwrap();
        assert_eq!(req.target_dir(), PathBuf::from("demo"));
    }

    #[test]
    fn output_dir_prefixes_target_dir() {
        let req = demo().output_dir("/tmp/work").build().unwrap();
        assert_eq!(req.target_dir(), PathBuf::from("/tmp/work/demo"));
    }

    #[test]
    fn new_identity_is_the_project_name() {
        let req = demo().build().unwrap();
        assert_eq!(req.new_identity(), "demo");
    }

    #[test]
    fn default_branch_uses_ref_as_old_identity() {
        let req = demo().build().unwrap();
        assert_eq!(req.identity_policy(), IdentityPolicy::RefBased);
        assert_eq!(req.old_identity(), "cli-template");
    }

    #[test]
    fn release_branch_uses_canonical_identity() {
        let req = demo().template_ref("release").build().unwrap();
        assert_eq!(req.old_identity(), CANONICAL_TEMPLATE_IDENTITY);
    }

    #[test]
    fn identity_rewrite_targets_the_project_dir() {
        let req = demo().build().unwrap();
        let rewrite = req.identity_rewrite();
        assert_eq!(rewrite.old_identity(), "cli-template");
        assert_eq!(rewrite.new_identity(), "demo");
        assert_eq!(rewrite.root_dir(), PathBuf::from("demo").as_path());
    }

    #[test]
    fn invalid_name_is_rejected() {
        let err = ScaffoldRequest::builder()
            .project_name("../escape")
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidProjectName { .. }));
    }

    #[test]
    fn empty_branch_is_rejected() {
        let err = demo().template_ref("").build().unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidTemplateSpec { field: "branch", .. }
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = demo().fetch_timeout(Duration::ZERO).build().unwrap_err();
        assert_eq!(err, DomainError::ZeroTimeout);
    }

    #[test]
    fn unbounded_timeout_is_rejected() {
        let err = demo()
            .fetch_timeout(Duration::from_secs(u64::MAX))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::TimeoutTooLarge { max, .. } if max == MAX_FETCH_TIMEOUT
        ));
    }

    #[test]
    fn timeout_at_the_bound_is_accepted() {
        let req = demo().fetch_timeout(MAX_FETCH_TIMEOUT).build().unwrap();
        assert_eq!(req.fetch_timeout(), MAX_FETCH_TIMEOUT);
    }

    #[test]
    fn nested_name_nests_the_target_dir() {
        let req = ScaffoldRequest::builder()
            .project_name("github.com/acme/svc")
            .build()
            .unwrap();
        assert_eq!(req.target_dir(), PathBuf::from("github.com/acme/svc"));
        assert_eq!(req.new_identity(), "github.com/acme/svc");
    }

    #[test]
    fn options_may_be_set_before_the_name() {
        let req = ScaffoldRequest::builder()
            .overwrite(true)
            .template_ref("main")
            .project_name("demo")
            .build()
            .unwrap();
        assert!(req.overwrite());
        assert_eq!(req.template_ref(), "main");
    }

    #[test]
    fn display_mentions_overwrite() {
        let req = demo().overwrite(true).build().unwrap();
        assert!(req.to_string().ends_with("[overwrite]"));
    }
}
