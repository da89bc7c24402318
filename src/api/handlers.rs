//! Per-status error handlers with a wildcard fallback.

use std::collections::HashMap;
use std::fmt;

use crate::api::response::ApiResult;
use crate::error::Result;

/// Registry key: an exact status code or the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerKey {
    /// Matches one status code.
    Status(u16),
    /// Matches any status without an exact handler.
    Wildcard,
}

/// Boxed handler invoked with the full failed result.
///
/// Returning `Ok` suppresses the failure; returning `Err` escalates it.
pub type ErrorHandler<'a, T> = Box<dyn Fn(&ApiResult) -> Result<T> + 'a>;

/// Status-keyed error handlers.
pub struct ErrorHandlers<'a, T> {
    handlers: HashMap<HandlerKey, ErrorHandler<'a, T>>,
}

impl<'a, T> ErrorHandlers<'a, T> {
    /// An empty registry: every non-2xx status fails the call.
    #[must_use]
    pub fn new() -> Self {
        Self { handlers: HashMap::new() }
    }

    /// Registers a handler for one status code.
    #[must_use]
    pub fn on(mut self, status: u16, handler: impl Fn(&ApiResult) -> Result<T> + 'a) -> Self {
        self.handlers.insert(HandlerKey::Status(status), Box::new(handler));
        self
    }

    /// Registers the catch-all handler.
    #[must_use]
    pub fn otherwise(mut self, handler: impl Fn(&ApiResult) -> Result<T> + 'a) -> Self {
        self.handlers.insert(HandlerKey::Wildcard, Box::new(handler));
        self
    }

    /// Exact status first, then wildcard.
    #[must_use]
    pub fn lookup(&self, status: u16) -> Option<&ErrorHandler<'a, T>> {
        self.handlers
            .get(&HandlerKey::Status(status))
            .or_else(|| self.handlers.get(&HandlerKey::Wildcard))
    }
}

impl<T> Default for ErrorHandlers<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ErrorHandlers<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(status: u16) -> ApiResult {
        ApiResult { status, body: String::new(), json: None }
    }

    #[test]
    fn exact_status_beats_wildcard() {
        let handlers: ErrorHandlers<'_, &str> =
            ErrorHandlers::new().on(404, |_| Ok("not found")).otherwise(|_| Ok("other"));
        let handler = handlers.lookup(404).unwrap();
        assert_eq!(handler(&result(404)).unwrap(), "not found");
        let fallback = handlers.lookup(500).unwrap();
        assert_eq!(fallback(&result(500)).unwrap(), "other");
    }

    #[test]
    fn empty_registry_finds_nothing() {
        let handlers: ErrorHandlers<'_, ()> = ErrorHandlers::new();
        assert!(handlers.lookup(500).is_none());
    }

    #[test]
    fn unmatched_status_without_wildcard_finds_nothing() {
        let handlers: ErrorHandlers<'_, ()> = ErrorHandlers::new().on(401, |_| Ok(()));
        assert!(handlers.lookup(403).is_none());
    }
}
