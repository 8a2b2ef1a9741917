use std::sync::Arc;
use std::time::Duration;

use origin_cors::{AllowList, CompiledPolicy, OriginRule, Policy, PolicyHandle, ValidationError};

#[derive(Clone)]
pub struct AppState {
    pub cors: Arc<PolicyHandle>,
    pub partner_cors: Arc<CompiledPolicy>,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, ValidationError> {
    let global = Policy::new()
        .origin(
            "http://app.example.com",
            OriginRule {
                allowed_headers: AllowList::list(["Content-Type", "X-Requested-With"]),
                allowed_methods: AllowList::list(["GET", "POST"]),
                credentials_allowed: true,
                exposed_headers: vec!["X-Example-Trace".into()],
                max_age: Duration::from_secs(600),
            },
        )
        .wildcard(None);

    // Only the partner route accepts this origin.
    let partner = Policy::new().origin("http://partner.example.com", None);

    Ok(AppState {
        cors: Arc::new(PolicyHandle::from_policy(&global)?),
        partner_cors: Arc::new(partner.compile()?),
        greeting: "Welcome to the Axum CORS example!",
    })
}

pub mod middleware;
