use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

/// Token provider whose `verify_token` answer is fixed up front.
#[derive(Clone)]
pub struct StubTokenProvider {
    user_id: Uuid,
    token_type: String,
    reject: bool,
}

impl StubTokenProvider {
    pub fn access(user_id: Uuid) -> Self {
        Self::with_type(user_id, "access")
    }

    pub fn with_type(user_id: Uuid, token_type: &str) -> Self {
        Self {
            user_id,
            token_type: token_type.to_string(),
            reject: false,
        }
    }

    pub fn rejecting() -> Self {
        Self {
            user_id: Uuid::nil(),
            token_type: "access".to_string(),
            reject: true,
        }
    }
}

impl TokenProvider for StubTokenProvider {
    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        if self.reject {
            return Err(TokenError::TokenExpired);
        }

        Ok(TokenClaims {
            sub: self.user_id,
            exp: 9_999_999_999,
            iat: 0,
            nbf: 0,
            iss: "test".to_string(),
            token_type: self.token_type.clone(),
        })
    }
}

/// `web::Data` wrapper the auth extractor looks up.
pub fn token_provider_data(
    stub: StubTokenProvider,
) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(stub);
    web::Data::new(provider)
}

pub fn bearer() -> (&'static str, &'static str) {
    ("Authorization", "Bearer test-token")
}
