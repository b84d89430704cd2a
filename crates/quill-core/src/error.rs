//! Error types for `quill-core`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  /// Entry content was empty after trimming surrounding whitespace.
  #[error("entry content is empty")]
  EmptyContent,

  /// The session is resolved and the caller is not signed in.
  #[error("not signed in")]
  NotAuthenticated,

  /// The identity provider has not yet reported a sign-in state.
  #[error("authentication state not yet resolved")]
  AuthPending,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
