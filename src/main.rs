use hangar::server::{config::Config, error::Error, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> Result<(), Error> {
    startup::init_logger(config)?;

    let db = startup::connect_to_database(config).await?;

    startup::serve(config, db).await
}
