use bunner_cors_filter::{ActualResponse, Decoration, Outcome, PreflightResponse, Rejection};

pub fn assert_preflight(outcome: Outcome) -> PreflightResponse {
    match outcome {
        Outcome::PreflightAccepted(response) => response,
        other => panic!("expected accepted preflight, got {:?}", other),
    }
}

pub fn assert_actual(outcome: Outcome) -> ActualResponse {
    match outcome {
        Outcome::ActualRequestAccepted(response) => response,
        other => panic!("expected accepted actual request, got {:?}", other),
    }
}

pub fn assert_rejected(outcome: Outcome) -> Rejection {
    match outcome {
        Outcome::Rejected(rejection) => rejection,
        other => panic!("expected rejection, got {:?}", other),
    }
}

pub fn assert_not_cors(outcome: Outcome) {
    match outcome {
        Outcome::NotCors { decoration } => assert_eq!(decoration, Decoration::NotCors),
        other => panic!("expected pass-through, got {:?}", other),
    }
}
