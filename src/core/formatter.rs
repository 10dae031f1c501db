//! Message rendering
//!
//! Two paths produce a message string. Templates known at compile time go
//! through `format_args!` (see the logging macros) and are checked by the
//! compiler; [`render_args`] only has to catch a `Display` impl that fails.
//! Templates that arrive at runtime go through [`render`], which validates
//! placeholders against the argument list and reports
//! [`LoggerError::FormatMismatch`] instead of panicking.

use super::error::{LoggerError, Result};
use std::fmt::{self, Display, Write};

/// Render pre-checked format arguments into a string.
pub fn render_args(args: fmt::Arguments<'_>) -> Result<String> {
    if let Some(s) = args.as_str() {
        return Ok(s.to_string());
    }
    let mut out = String::new();
    // A template with arguments has no `as_str()`, so only the failure is reported.
    out.write_fmt(args)
        .map_err(|_| LoggerError::format_mismatch("<format_args>", "an argument failed to format"))?;
    Ok(out)
}

/// Render a runtime template with positional arguments.
///
/// Supports `{}` (next argument), `{N}` (argument `N`), and the `{{` / `}}`
/// escapes. Every argument must be referenced at least once.
///
/// # Examples
///
/// ```
/// use cutelog::core::formatter::render;
///
/// assert_eq!(render("value={}", &[&43]).unwrap(), "value=43");
/// assert_eq!(render("{1}-{0}", &[&"a", &"b"]).unwrap(), "b-a");
/// assert!(render("value={}", &[]).is_err());
/// ```
pub fn render(template: &str, args: &[&dyn Display]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut used = vec![false; args.len()];
    let mut next_implicit = 0usize;
    let mut chars = template.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    out.push('{');
                    continue;
                }

                let mut spec = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    spec.push(c);
                }
                if !closed {
                    return Err(LoggerError::format_mismatch(
                        template,
                        format!("unterminated placeholder at byte {}", pos),
                    ));
                }

                let index = if spec.is_empty() {
                    next_implicit += 1;
                    next_implicit - 1
                } else {
                    spec.parse::<usize>().map_err(|_| {
                        LoggerError::format_mismatch(
                            template,
                            format!("unsupported placeholder '{{{}}}'", spec),
                        )
                    })?
                };

                let arg = args.get(index).ok_or_else(|| {
                    LoggerError::format_mismatch(
                        template,
                        format!(
                            "missing argument for placeholder {} ({} given)",
                            index,
                            args.len()
                        ),
                    )
                })?;
                used[index] = true;
                write!(out, "{}", arg).map_err(|_| {
                    LoggerError::format_mismatch(template, "an argument failed to format")
                })?;
            }
            '}' => {
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(LoggerError::format_mismatch(
                        template,
                        format!("unmatched '}}' at byte {}", pos),
                    ));
                }
            }
            _ => out.push(c),
        }
    }

    if let Some(unused) = used.iter().position(|u| !u) {
        return Err(LoggerError::format_mismatch(
            template,
            format!("argument {} is never used", unused),
        ));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl Display for Broken {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_render_positional() {
        assert_eq!(render("value={}", &[&43]).unwrap(), "value=43");
        assert_eq!(render("{} + {} = {}", &[&1, &2, &3]).unwrap(), "1 + 2 = 3");
        assert_eq!(render("no placeholders", &[]).unwrap(), "no placeholders");
    }

    #[test]
    fn test_render_indexed_and_escapes() {
        assert_eq!(render("{0}{0}", &[&"ab"]).unwrap(), "abab");
        assert_eq!(render("{{{}}}", &[&7]).unwrap(), "{7}");
    }

    #[test]
    fn test_render_arity_mismatch() {
        let err = render("dsadsa, {}", &[]).unwrap_err();
        assert!(matches!(err, LoggerError::FormatMismatch { .. }));

        let err = render("value", &[&1]).unwrap_err();
        assert!(err.to_string().contains("never used"));

        assert!(render("{3}", &[&1]).is_err());
    }

    #[test]
    fn test_render_malformed_template() {
        assert!(render("open {", &[&1]).is_err());
        assert!(render("close }", &[]).is_err());
        assert!(render("{:>8}", &[&1]).is_err());
    }

    #[test]
    fn test_failing_display_is_recoverable() {
        assert!(render("{}", &[&Broken]).is_err());
        assert!(render_args(format_args!("{}", Broken)).is_err());
    }

    #[test]
    fn test_render_args() {
        assert_eq!(render_args(format_args!("value={}", 43)).unwrap(), "value=43");
        assert_eq!(render_args(format_args!("plain")).unwrap(), "plain");
    }
}
