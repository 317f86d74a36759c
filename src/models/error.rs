use thiserror::Error;

use crate::{api::wrapped_client::WrappedClientError, service::token_store::TokenStoreError};

#[derive(Debug, Error)]
pub enum TriviaError {
    #[error("WrappedClient error: {0}")]
    WrappedClient(#[from] WrappedClientError),

    #[error("TokenStore error: {0}")]
    TokenStore(#[from] TokenStoreError),

    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),
}
