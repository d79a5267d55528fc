use bunner_csrf_rs::{AllowReason, CsrfDecision, DenyReason};

pub fn assert_allowed(decision: CsrfDecision) -> AllowReason {
    match decision {
        CsrfDecision::Allow(reason) => reason,
        other => panic!("expected allow decision, got {:?}", other),
    }
}

pub fn assert_denied(decision: CsrfDecision) -> DenyReason {
    match decision {
        CsrfDecision::Deny(reason) => reason,
        other => panic!("expected deny decision, got {:?}", other),
    }
}
