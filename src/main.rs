use app_lib::config::Config;
use clap::Parser;

fn init_logger(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env).try_init();
}

#[tokio::main]
async fn main() {
    let config = Config::parse();
    init_logger(&config.log_level);

    if let Err(e) = app_lib::run(config).await {
        log::error!("zoo-keeper failed: {}", e);
        std::process::exit(1);
    }
}
