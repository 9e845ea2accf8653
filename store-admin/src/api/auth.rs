use crate::{ClientResult, HttpClient};
use store_shared::client::{LoginRequest, LoginResponse};

impl HttpClient {
    /// Log in with the admin password and keep the returned token
    pub async fn login(&self, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            password: password.to_string(),
        };
        let response: LoginResponse = self.post_form_public("login", &request).await?;
        self.set_token(Some(response.access_token.clone()));
        tracing::info!("Admin session started");
        Ok(response)
    }

    /// End the session locally. The backend keeps no session state.
    pub fn logout(&self) {
        self.clear_token();
        tracing::info!("Admin session ended");
    }
}
