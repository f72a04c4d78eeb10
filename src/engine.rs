//! Substitution engine boundary.
//!
//! The rest of the crate needs exactly one capability from Handlebars:
//! evaluate a template string against a set of named assigns. The registry
//! runs in strict mode, so a placeholder the assigns do not provide is an
//! error rather than an empty string. A fresh registry is built per call;
//! nothing is cached or precompiled.

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::Result;

/// Evaluate `template` against `assigns` and return the substituted text.
///
/// `{{name}}` interpolations are HTML-escaped; `{{{name}}}` inserts the
/// value verbatim. Fails on malformed template syntax and on unresolved
/// placeholders.
pub fn eval<T: Serialize>(template: &str, assigns: &T) -> Result<String> {
    let mut engine = Handlebars::new();
    engine.set_strict_mode(true);
    Ok(engine.render_template(template, assigns)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;
    use serde_json::json;

    #[test]
    fn interpolates_named_values() {
        let out = eval("Hello {{who}}!", &json!({"who": "world"})).unwrap();
        assert_eq!(out, "Hello world!");
    }

    #[test]
    fn escapes_html_by_default() {
        let out = eval("{{v}}", &json!({"v": "<b>&</b>"})).unwrap();
        assert!(out.contains("&lt;b&gt;"), "expected escaped markup: {out}");
        assert!(!out.contains("<b>"));
    }

    #[test]
    fn triple_stache_is_verbatim() {
        let out = eval("{{{v}}}", &json!({"v": "<b>raw</b>"})).unwrap();
        assert_eq!(out, "<b>raw</b>");
    }

    #[test]
    fn unresolved_placeholder_is_an_error() {
        let err = eval("{{missing}}", &json!({})).unwrap_err();
        assert!(matches!(err, ReportError::Template(_)));
    }

    #[test]
    fn malformed_template_is_an_error() {
        let err = eval("{{#if flag}}never closed", &json!({"flag": true})).unwrap_err();
        assert!(matches!(err, ReportError::Template(_)));
    }
}
