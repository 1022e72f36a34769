use super::{AUTH, RequestOrchestrator};
use crate::http_handler::http_request::delete_account_delete::DeleteAccountRequest;
use crate::http_handler::http_request::login_post::LoginRequest;
use crate::http_handler::http_request::register_post::RegisterRequest;
use crate::http_handler::http_request::request_common::{JSONBodyHTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::{HTTPError, RequestError, UserRecord};
use crate::{info, log};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("[FATAL] Invalid email pattern"));

fn check_credentials(email: &str, password: &str) -> Result<(), RequestError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(RequestError::invalid_input("Email and password required"));
    }
    if !EMAIL_PATTERN.is_match(email.trim()) {
        return Err(RequestError::invalid_input("Invalid email address"));
    }
    Ok(())
}

impl RequestOrchestrator {
    /// Logs in and stores the returned identity and token.
    ///
    /// # Errors
    /// - `HTTPError` for rejected input, refused credentials and transport failures.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserRecord, HTTPError> {
        self.run(AUTH, "Login failed", async {
            check_credentials(email, password)?;
            let request = LoginRequest { email: email.trim().to_string(), password: password.to_string() };
            let (user, token) = request.send_request(self.k.backend().as_ref()).await?.into_parts();
            self.k.session().set_identity(user.clone(), token);
            self.k.notifications().set_success(AUTH, "Logged in");
            info!("Logged in as {}", user.email());
            Ok::<_, HTTPError>(user)
        })
        .await
    }

    /// Creates an account and logs into it.
    ///
    /// # Errors
    /// - `HTTPError` for rejected input, an already registered email and transport failures.
    pub async fn register(&self, email: &str, password: &str) -> Result<UserRecord, HTTPError> {
        self.run(AUTH, "Registration failed", async {
            check_credentials(email, password)?;
            let request = RegisterRequest { email: email.trim().to_string(), password: password.to_string() };
            let (user, token) = request.send_request(self.k.backend().as_ref()).await?.into_parts();
            self.k.session().set_identity(user.clone(), token);
            self.k.notifications().set_success(AUTH, "Account created");
            info!("Registered {}", user.email());
            Ok::<_, HTTPError>(user)
        })
        .await
    }

    /// Deletes the logged-in account on the server and ends the session.
    ///
    /// # Errors
    /// - `HTTPError` if there is no session or the server refuses the deletion.
    pub async fn delete_account(&self) -> Result<(), HTTPError> {
        self.run(AUTH, "Account deletion failed", async {
            let token = self.k.session().token().ok_or_else(|| RequestError::invalid_input("Not authenticated"))?;
            DeleteAccountRequest { token }.send_request(self.k.backend().as_ref()).await?;
            self.k.session().clear();
            self.k.notifications().set_success(AUTH, "Account deleted");
            info!("Account deleted");
            Ok::<_, HTTPError>(())
        })
        .await
    }

    /// Ends the session locally, the server is not contacted.
    pub fn logout(&self) {
        self.k.session().clear();
        log!("Logged out");
    }
}
