//! Login screen state.
//!
//! The view owns a `Signal<LoginState>`; this module holds everything that
//! doesn't need Dioxus: form rules and messages, the submit step, the single
//! login request, and mapping a failure to what the user sees.

use api::{ApiError, AuthService, Credentials, Destination, LoginKind, Session};
use chrono::Utc;
use store::TokenStore;

use crate::forms::{FieldError, Form, Rule};
use crate::notification::{Banner, Ticket, TimerSlot};

pub const INVALID_FORM: &str = "Please enter valid email and password";
pub const LOGIN_SUCCESS: &str = "Login successful!";

/// State of the login screen.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginState {
    /// Chosen on the landing step; `None` until the user picks one.
    pub kind: Option<LoginKind>,
    pub show_form: bool,
    pub show_password: bool,
    pub loading: bool,
    pub form: Form,
    redirect: TimerSlot,
}

impl Default for LoginState {
    fn default() -> Self {
        Self {
            kind: None,
            show_form: false,
            show_password: false,
            loading: false,
            form: Form::new()
                .field("email", "", vec![Rule::Required, Rule::Email])
                .field("password", "", vec![Rule::Required, Rule::MinLength(6)]),
            redirect: TimerSlot::default(),
        }
    }
}

impl LoginState {
    /// Pick customer or agent login and show a fresh form.
    pub fn choose(&mut self, kind: LoginKind) {
        self.kind = Some(kind);
        self.show_form = true;
        self.form.reset();
    }

    pub fn toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Endpoint to use; without an explicit choice this is the customer one.
    pub fn login_kind(&self) -> LoginKind {
        self.kind.unwrap_or_default()
    }

    /// Validate and, if the form is good, enter the loading state.
    ///
    /// On failure every field is marked touched and nothing is sent.
    pub fn begin_submit(&mut self) -> Result<Credentials, Banner> {
        if !self.form.is_valid() {
            self.form.mark_all_touched();
            return Err(Banner::error(INVALID_FORM));
        }
        self.loading = true;
        self.redirect.cancel();
        Ok(Credentials::new(
            self.form.value("email"),
            self.form.value("password"),
        ))
    }

    /// Leave the loading state; on success arm the redirect timer.
    pub fn finish_submit(&mut self, succeeded: bool) -> Option<Ticket> {
        self.loading = false;
        succeeded.then(|| self.redirect.arm())
    }

    /// Whether the redirect armed with `ticket` should still happen.
    pub fn take_redirect(&mut self, ticket: Ticket) -> bool {
        self.redirect.fire(ticket)
    }

    pub fn field_error(&self, name: &str) -> Option<String> {
        self.form.error(name).map(|e| field_message(name, &e))
    }
}

/// Text shown under a login field.
pub fn field_message(name: &str, error: &FieldError) -> String {
    match error {
        FieldError::Required => format!("{name} is required"),
        FieldError::Email => "Please enter a valid email".to_string(),
        FieldError::MinLength { required } => {
            format!("Password must be at least {required} characters")
        }
        FieldError::Pattern | FieldError::Min { .. } => String::new(),
    }
}

/// What the user is told when a login request fails.
pub fn failure_message(error: &ApiError) -> &'static str {
    match error.status() {
        Some(500) => "Invalid username or password",
        Some(401) => "Invalid email or password",
        _ if error.body().is_some_and(|b| b.contains("Invalid")) => "Invalid email or password",
        _ => "Invalid credentials",
    }
}

/// One login attempt: drop any previous token, post the credentials once,
/// persist the token, and work out where to go next.
///
/// Agent logins always land on the agent page; everyone else is routed by
/// the role inside the new token.
pub async fn perform_login<A, S>(
    auth: &A,
    session: &Session<S>,
    kind: LoginKind,
    credentials: &Credentials,
) -> Result<Destination, ApiError>
where
    A: AuthService,
    S: TokenStore,
{
    session.clear();

    let token = auth.login(kind, credentials).await.inspect_err(|e| {
        tracing::error!(email = %credentials.email, "Login failed: {}", e);
    })?;
    session.store_token(&token);
    tracing::info!(email = %credentials.email, kind = kind.label(), "Login successful");

    Ok(match kind {
        LoginKind::Agent => Destination::Agent,
        LoginKind::Customer => session.destination(Utc::now()),
    })
}
