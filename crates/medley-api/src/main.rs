use medley_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (database, media service client, routes)
    let (_state, router) = medley_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    medley_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
