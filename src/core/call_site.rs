//! Source location of a logging call

use std::fmt;
use std::panic::Location;

/// Where a log call was made.
///
/// Built at the call expression, either by the logging macros (`file!()`,
/// `line!()`, `module_path!()`) or through `#[track_caller]`. Holds only
/// static strings, so capturing one never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub module_path: Option<&'static str>,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self {
            file,
            line,
            module_path: None,
        }
    }

    #[must_use]
    pub const fn with_module(mut self, module_path: &'static str) -> Self {
        self.module_path = Some(module_path);
        self
    }

    /// Location of the nearest caller that is not itself `#[track_caller]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cutelog::CallSite;
    ///
    /// let site = CallSite::caller();
    /// assert_eq!(site.line, line!() - 1);
    /// ```
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(loc: &'static Location<'static>) -> Self {
        Self::new(loc.file(), loc.line())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn helper() -> CallSite {
        CallSite::caller()
    }

    #[test]
    fn test_caller_reports_call_expression() {
        let expected = line!() + 1;
        let site = helper();
        assert_eq!(site.line, expected);
        assert!(site.file.ends_with("call_site.rs"));
    }

    #[test]
    fn test_display() {
        let site = CallSite::new("app.src", 10).with_module("app");
        assert_eq!(site.to_string(), "app.src:10");
        assert_eq!(site.module_path, Some("app"));
    }
}
