use origin_cors::{CorsDecision, CorsOutcome, Headers, Rejection};

pub fn assert_continue(outcome: CorsOutcome) -> Headers {
    match outcome.decision {
        CorsDecision::Continue => outcome.headers,
        other => panic!("expected continue decision, got {:?}", other),
    }
}

pub fn assert_stop_ok(outcome: CorsOutcome) -> Headers {
    match outcome.decision {
        CorsDecision::StopOk => {
            assert_eq!(outcome.status(), Some(200));
            outcome.headers
        }
        other => panic!("expected stop decision, got {:?}", other),
    }
}

pub fn assert_rejected(outcome: CorsOutcome) -> Rejection {
    match outcome.decision {
        CorsDecision::Reject(rejection) => {
            assert!(
                outcome.headers.is_empty(),
                "rejections must not leak headers: {:?}",
                outcome.headers
            );
            rejection
        }
        other => panic!("expected reject decision, got {:?}", other),
    }
}
