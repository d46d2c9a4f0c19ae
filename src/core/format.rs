//! PII-aware message formatting
//!
//! This module provides:
//! - `LogArgument`: a formatting argument classified at the call site
//! - `format_message`: positional `{N}` template substitution with redaction
//! - `redaction_placeholder`: the fixed placeholder for hidden values

use super::error::{Cause, TokenError};
use std::any::type_name;
use std::fmt::Display;

/// How an argument may be rendered while redaction is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArgumentClass {
    /// Default: potentially personally identifiable, hidden behind a
    /// type-name placeholder.
    Pii,
    /// Explicitly marked safe at the call site; rendered verbatim.
    NonPii,
    /// One of this library's own errors; full detail allowed.
    Internal,
    /// No value was supplied.
    Null,
}

/// A formatting argument with its PII classification decided at the call
/// site.
///
/// Every plain argument is treated as personally identifiable: build it with
/// [`pii`] and it will be replaced by a type-name placeholder whenever
/// redaction is active. Opt out with [`non_pii`] for values that are safe to
/// write regardless of mode. The `Display` rendering and the type name are
/// captured eagerly, so the formatter never inspects types at runtime.
#[derive(Debug, Clone)]
pub struct LogArgument {
    rendered: String,
    type_name: &'static str,
    class: ArgumentClass,
}

impl LogArgument {
    /// A plain argument, redacted to its type name while redaction is active.
    pub fn pii<T: Display>(value: T) -> Self {
        Self {
            rendered: value.to_string(),
            type_name: display_type_name::<T>(),
            class: ArgumentClass::Pii,
        }
    }

    /// Marks a value as explicitly safe to render in any mode.
    pub fn non_pii<T: Display>(value: T) -> Self {
        Self {
            rendered: value.to_string(),
            type_name: display_type_name::<T>(),
            class: ArgumentClass::NonPii,
        }
    }

    /// An absent value. Renders as nothing when redaction is off and as the
    /// literal `Null` placeholder when it is on.
    pub fn null() -> Self {
        Self {
            rendered: String::new(),
            type_name: "Null",
            class: ArgumentClass::Null,
        }
    }
}

impl From<&TokenError> for LogArgument {
    /// Library-owned errors render in full even under redaction: their
    /// messages were already produced by this formatter.
    fn from(error: &TokenError) -> Self {
        Self {
            rendered: error.to_string(),
            type_name: display_type_name::<TokenError>(),
            class: ArgumentClass::Internal,
        }
    }
}

impl From<&Cause> for LogArgument {
    fn from(cause: &Cause) -> Self {
        Self {
            rendered: cause.to_string(),
            type_name: cause.type_name(),
            class: if cause.is_internal() {
                ArgumentClass::Internal
            } else {
                ArgumentClass::Pii
            },
        }
    }
}

/// Shorthand for [`LogArgument::pii`].
pub fn pii<T: Display>(value: T) -> LogArgument {
    LogArgument::pii(value)
}

/// Shorthand for [`LogArgument::non_pii`].
pub fn non_pii<T: Display>(value: T) -> LogArgument {
    LogArgument::non_pii(value)
}

/// The fixed placeholder substituted for a sensitive argument while
/// redaction is active. Reveals only the argument's type name, never its
/// value.
pub fn redaction_placeholder(type_name: &str) -> String {
    format!("[PII of type '{}' is hidden]", type_name)
}

/// References are a call-site artifact, not part of the value's identity.
fn display_type_name<T>() -> &'static str {
    type_name::<T>().trim_start_matches('&')
}

/// Formats a positional `{N}` template with PII-aware substitution.
///
/// The contract is total:
/// - a `None` template yields an empty string,
/// - `None` args yield the template unmodified (no substitution attempted),
/// - otherwise each `{N}` token is substituted under the current redaction
///   mode. `{{` and `}}` escape literal braces; a token without a matching
///   argument substitutes as an absent value; malformed tokens pass through
///   literally.
///
/// Rust `Display` output is locale-independent, so rendered numbers and
/// dates are stable across environments.
pub fn format_message(
    show_pii: bool,
    template: Option<&str>,
    args: Option<&[LogArgument]>,
) -> String {
    let Some(template) = template else {
        return String::new();
    };
    let Some(args) = args else {
        return template.to_string();
    };

    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut digits = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() {
                        digits.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if !digits.is_empty() && chars.peek() == Some(&'}') {
                    chars.next();
                    let index = digits.parse::<usize>().unwrap_or(usize::MAX);
                    out.push_str(&render_argument(show_pii, args.get(index)));
                } else {
                    out.push('{');
                    out.push_str(&digits);
                }
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                }
                out.push('}');
            }
            c => out.push(c),
        }
    }
    out
}

fn render_argument(show_pii: bool, argument: Option<&LogArgument>) -> String {
    let Some(argument) = argument else {
        // Absent argument: nothing to disclose, nothing to hide beyond the
        // fact that it was absent.
        return if show_pii {
            String::new()
        } else {
            redaction_placeholder("Null")
        };
    };
    if show_pii {
        return argument.rendered.clone();
    }
    match argument.class {
        ArgumentClass::NonPii | ArgumentClass::Internal => argument.rendered.clone(),
        ArgumentClass::Pii => redaction_placeholder(argument.type_name),
        ArgumentClass::Null => redaction_placeholder("Null"),
    }
}
