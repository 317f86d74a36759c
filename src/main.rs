use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api::wrapped_client::{WrappedClient, WrappedClientError},
    config::app_config::CONFIG,
    models::{error::TriviaError, question::generate_questions, quiz_session::QuizSession},
    service::{console::ConsoleRunner, token_store::TokenStore},
};

mod api;
mod config;
mod models;
mod service;
mod tests;

#[tokio::main]
async fn main() {
    // Initialize .env
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        match e {
            TriviaError::WrappedClient(WrappedClientError::Api(..)) => {
                eprintln!("Failed to fetch Wrapped data.");
            }
            TriviaError::WrappedClient(_) => {
                eprintln!("An error occurred while fetching Wrapped data.");
            }
            _ => eprintln!("{}", e),
        }
        std::process::exit(1);
    }
}

async fn run() -> Result<(), TriviaError> {
    let token_store = TokenStore::load()?;
    let client = reqwest::Client::new();
    let wrapped_client = WrappedClient::new(&CONFIG.api.base_url);

    let mut session = QuizSession::loading(CONFIG.game.question_seconds);
    println!("Loading Wrapped Data...");

    let history = match wrapped_client
        .fetch_wrapped_history(&client, token_store.access_token())
        .await
    {
        Ok(history) => history,
        Err(e) => {
            error!("Error fetching Wrapped data: {}", e);
            return Err(e.into());
        }
    };

    info!("Fetched {} wrapped entries", history.len());

    let mut rng = rand::rng();
    let questions = generate_questions(&history, CONFIG.game.option_pool, &mut rng);
    session.begin(questions);

    ConsoleRunner::new(session).run().await
}
