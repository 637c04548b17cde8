//! Boundary with the external linter

use async_trait::async_trait;

use crate::diagnostics::LintReport;
use crate::result::Result;

/// Opaque configuration forwarded to the linter untouched
pub type LinterOptions = serde_json::Value;

/// External linting capability consumed by the verification engine
///
/// Implementations receive raw source text plus optional configuration and
/// return one report entry per processed file. The engine treats the
/// linter as a stateless collaborator: it is injected explicitly, nothing
/// is shared between invocations, and invocations are assumed
/// deterministic. Synchronous linters simply return a ready value from
/// the async method.
#[async_trait]
pub trait Linter: Send + Sync {
    /// Lint a piece of source text
    async fn lint(&self, code: &str, options: Option<&LinterOptions>) -> Result<LintReport>;
}
