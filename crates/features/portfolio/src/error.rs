use std::borrow::Cow;
use thiserror::Error;

/// Portfolio error type.
#[derive(Debug, Error)]
pub enum PortfolioError {
    /// The requested id matches no node in the tree.
    ///
    /// This is the model's only error condition: mutations are total by
    /// design, so "unknown id" surfaces exclusively on the read side.
    #[error("Node not found{}: {id}", format_context(.context))]
    NotFound { id: String, context: Option<Cow<'static, str>> },
}

/// Attaches a context string to portfolio results.
pub trait PortfolioErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, PortfolioError>;
}

impl<T> PortfolioErrorExt<T> for Result<T, PortfolioError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                PortfolioError::NotFound { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
