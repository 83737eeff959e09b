//! Per-run configuration.

use std::time::Duration;

/// How a script is compiled and run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecOptions {
    /// Run `check_valid` on the parsed program before executing it.
    pub validate: bool,
    /// Wall-clock limit, enforced by [`run_with_timeout`](crate::run_with_timeout).
    pub timeout: Option<Duration>,
    /// Log the token stream and the AST dump at `debug` level.
    pub debug: bool,
}

impl Default for ExecOptions {
    fn default() -> Self {
        ExecOptions {
            validate: true,
            timeout: None,
            debug: false,
        }
    }
}

impl ExecOptions {
    #[must_use]
    pub fn with_validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = ExecOptions::default();
        assert!(options.validate);
        assert!(!options.debug);
        assert_eq!(options.timeout, None);
    }

    #[test]
    fn builders_chain() {
        let options = ExecOptions::default()
            .with_validate(false)
            .with_debug(true)
            .with_timeout(Duration::from_millis(250));
        assert_eq!(
            options,
            ExecOptions {
                validate: false,
                timeout: Some(Duration::from_millis(250)),
                debug: true,
            }
        );
    }
}
