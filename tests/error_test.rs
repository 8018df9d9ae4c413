use std::io;

use pagesmith::error::{Diagnostic, Error};

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::TemplateDoesNotExistError { template: "page.html".to_string() };
    assert_eq!(err.to_string(), "Template 'page.html' does not exist.");
}

#[test]
fn test_unresolved_tokens_display() {
    let err = Error::UnresolvedTokens(vec![
        Diagnostic::UnboundVariable { name: "title".to_string() },
        Diagnostic::UnterminatedBlock { tag: "{{#if a}}".to_string() },
        Diagnostic::IterationLimit { limit: 5 },
    ]);
    assert_eq!(
        err.to_string(),
        "Unresolved tokens: unbound variable 'title', unterminated block '{{#if a}}', \
         conditional resolution stopped after 5 iterations."
    );
}
