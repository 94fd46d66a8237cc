use crate::{util::assert_error_eq, ErrorKind, OtherError, SilentError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("bad digit")]
struct BadDigit;

#[test]
fn display_with_kind_and_reason() {
    let error = ErrorKind::Format.because(BadDigit);
    assert_eq!(error.to_string(), "Format(bad digit)");
    assert_eq!(format!("{:#}", error), "Format: bad digit");

    let silent = ErrorKind::Composition.because(SilentError);
    assert_eq!(silent.to_string(), "Composition");
    assert_error_eq(silent, ErrorKind::Composition);
}

#[test]
fn other_reason() {
    let error = ErrorKind::Config.other("missing section");
    assert_eq!(error.kind(), ErrorKind::Config);
    assert!(error.downcast_ref::<OtherError>().is_some());
    assert_eq!(error.to_string(), "Config(missing section)");
}

#[test]
fn field_path_is_joined_from_inside_out() {
    let error = ErrorKind::Format
        .because(BadDigit)
        .at("code_hash")
        .at("lock")
        .at("[1]")
        .at("outputs");
    assert_eq!(error.kind(), ErrorKind::Format);
    assert_eq!(error.path(), Some("outputs[1].lock.code_hash"));
    assert_eq!(
        error.to_string(),
        "Format(outputs[1].lock.code_hash: bad digit)"
    );
    assert_eq!(error.downcast_ref::<BadDigit>(), Some(&BadDigit));
    assert_eq!(error.root_cause().to_string(), "bad digit");
}

#[test]
fn error_without_path() {
    let error = ErrorKind::Range.because(BadDigit);
    assert_eq!(error.path(), None);
    let cloned = error.clone().at("version");
    assert_eq!(cloned.path(), Some("version"));
    assert_eq!(error.path(), None);
}
