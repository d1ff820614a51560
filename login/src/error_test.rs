use super::*;

#[test]
fn kinds_follow_taxonomy() {
    assert_eq!(LoginError::from(ProviderError::Cancelled).kind(), FailureKind::Interaction);
    assert_eq!(LoginError::from(TransportError::new("offline")).kind(), FailureKind::Transport);
    assert_eq!(LoginError::InvalidRequest.kind(), FailureKind::Protocol);
    assert_eq!(LoginError::UnknownStatus(418).kind(), FailureKind::Protocol);
}

#[test]
fn provider_and_transport_collapse_to_one_outcome() {
    assert_eq!(
        LoginError::from(ProviderError::PopupBlocked).outcome(),
        LoginOutcome::ProviderOrNetworkFailure
    );
    assert_eq!(
        LoginError::from(TransportError::new("dns")).outcome(),
        LoginOutcome::ProviderOrNetworkFailure
    );
}

#[test]
fn protocol_errors_keep_their_outcome() {
    assert_eq!(LoginError::InvalidRequest.outcome(), LoginOutcome::InvalidRequest);
    assert_eq!(LoginError::UnknownStatus(302).outcome(), LoginOutcome::UnknownStatus(302));
}

#[test]
fn invalid_request_message() {
    assert_eq!(LoginError::InvalidRequest.to_string(), "invalid request body");
}

#[test]
fn unknown_status_message_carries_code() {
    assert!(LoginError::UnknownStatus(418).to_string().contains("418"));
}

#[test]
fn chain_includes_provider_cause() {
    let err = LoginError::from(ProviderError::Failed {
        code: "auth/internal-error".to_owned(),
        message: "boom".to_owned(),
    });
    assert_eq!(
        error_chain(&err),
        "identity provider sign-in failed: identity provider error auth/internal-error: boom"
    );
}

#[test]
fn chain_includes_transport_cause() {
    let err = LoginError::from(TransportError::new("connection refused"));
    assert_eq!(error_chain(&err), "login request failed: connection refused");
}

#[test]
fn chain_without_source_is_just_message() {
    assert_eq!(error_chain(&LoginError::InvalidRequest), "invalid request body");
}

#[test]
fn failure_kind_display() {
    assert_eq!(FailureKind::Protocol.to_string(), "protocol");
}
