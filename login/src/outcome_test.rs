use super::*;

// =============================================================
// from_status
// =============================================================

#[test]
fn mapped_statuses() {
    assert_eq!(LoginOutcome::from_status(200), LoginOutcome::Success);
    assert_eq!(LoginOutcome::from_status(400), LoginOutcome::InvalidRequest);
    assert_eq!(LoginOutcome::from_status(401), LoginOutcome::InvalidToken);
    assert_eq!(LoginOutcome::from_status(403), LoginOutcome::Unauthorized);
}

#[test]
fn every_5xx_is_server_error() {
    for status in 500..=599 {
        assert_eq!(LoginOutcome::from_status(status), LoginOutcome::ServerError, "status {status}");
    }
}

#[test]
fn codes_past_599_still_server_error() {
    assert_eq!(LoginOutcome::from_status(600), LoginOutcome::ServerError);
}

#[test]
fn unmapped_statuses_keep_their_code() {
    for status in [0, 100, 201, 204, 301, 302, 402, 404, 418, 429, 499] {
        assert_eq!(LoginOutcome::from_status(status), LoginOutcome::UnknownStatus(status));
    }
}

// =============================================================
// notice
// =============================================================

#[test]
fn success_notice_is_success_level() {
    let notice = LoginOutcome::Success.notice();
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.message, SUCCESS_MESSAGE);
}

#[test]
fn rejection_notices_are_exact() {
    assert_eq!(LoginOutcome::InvalidToken.notice(), Notice::error("Invalid id token"));
    assert_eq!(
        LoginOutcome::Unauthorized.notice(),
        Notice::error("You are not authorized to login using this email")
    );
    assert_eq!(LoginOutcome::ServerError.notice(), Notice::error("Something went wrong"));
}

#[test]
fn caught_outcomes_share_fallback_notice() {
    for outcome in [
        LoginOutcome::InvalidRequest,
        LoginOutcome::UnknownStatus(418),
        LoginOutcome::ProviderOrNetworkFailure,
    ] {
        assert_eq!(outcome.notice(), Notice::error("Failed to login with Google account"));
    }
}

#[test]
fn only_success_is_success() {
    assert!(LoginOutcome::Success.is_success());
    assert!(!LoginOutcome::ServerError.is_success());
    assert!(!LoginOutcome::UnknownStatus(200).is_success());
}
