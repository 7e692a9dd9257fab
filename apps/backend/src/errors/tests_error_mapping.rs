use sea_orm::DbErr;

use super::domain::{DomainError, ForbiddenKind, NotFoundKind, ValidationKind};

#[test]
fn record_not_found_maps_to_domain_not_found() {
    let err: DomainError = DbErr::RecordNotFound("match 42".into()).into();
    match err {
        DomainError::NotFound(NotFoundKind::Other(_), detail) => {
            assert_eq!(detail, "match 42");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn generic_db_error_maps_to_infra() {
    let err: DomainError = DbErr::Custom("boom".into()).into();
    assert!(matches!(err, DomainError::Infra(_, _)));
}

#[test]
fn display_includes_kind_and_detail() {
    let err = DomainError::validation(ValidationKind::GoalSumMismatch, "home: declared 3, got 2");
    let text = err.to_string();
    assert!(text.contains("GoalSumMismatch"));
    assert!(text.contains("declared 3"));

    let err = DomainError::forbidden(ForbiddenKind::NotOrganizer, "user 7");
    assert!(err.to_string().contains("NotOrganizer"));
}
