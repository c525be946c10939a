use midway_app_config::config::{AppConfig, AppInfo, LogRecord, LoggerBackend, RequestContext};
use sqlx::{Executor, MySqlPool};
use std::env;
use std::process;
use std::time::Instant;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

fn parse_arg(prefix: &str) -> Option<String> {
    env::args()
        .skip(1)
        .find_map(|arg| arg.strip_prefix(prefix).map(str::to_string))
}

fn init_tracing(env_name: &str) {
    let level = match env_name {
        "local" | "unittest" => Level::DEBUG,
        _ => Level::INFO,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let name = parse_arg("--name=").unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
    let info = match AppInfo::new(name) {
        Ok(info) => info,
        Err(e) => {
            eprintln!("Invalid application metadata: {}", e);
            return;
        }
    };
    let info = match parse_arg("--env=") {
        Some(env_name) => info.with_env(env_name),
        None => info,
    };

    init_tracing(&info.env);

    let config = AppConfig::from_app_info(&info);
    if let Err(e) = config.middleware.validate() {
        error!(error = %e, "Middleware pipeline rejected");
        return;
    }

    info!(
        app = %info.name,
        env = %info.env,
        port = config.egg.port,
        middleware = ?config.middleware.names(),
        midway_logger = config.midway_feature.logger_backend() == LoggerBackend::Midway,
        task_prefix = %config.task.prefix,
        "Configuration built"
    );

    let boot_line = LogRecord {
        timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f").to_string(),
        level: "INFO".to_string(),
        pid: process::id(),
        ctx: RequestContext {
            start_time: Some(chrono::Utc::now().timestamp_millis()),
            ..Default::default()
        },
        message: format!("{} listening on {}", info.name, config.egg.port),
    };
    info!("{}", (config.egg.context_logger_format)(&boot_line));

    if env::args().any(|arg| arg == "--dump") {
        match config.to_yaml() {
            Ok(yaml) => println!("{}", yaml),
            Err(e) => error!(error = %e, "Failed to render configuration"),
        }
    }

    if let Ok(url) = env::var("DATABASE_URL") {
        check_database(&config, &url).await;
    }
}

/// Opens a pool with the configured policy and runs a trivial statement.
async fn check_database(config: &AppConfig, url: &str) {
    let options = &config.sequelize.options;
    let connect = match options.connect_options(url) {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "Invalid DATABASE_URL");
            return;
        }
    };

    let pool: MySqlPool = match options.pool_options().connect_with(connect).await {
        Ok(pool) => pool,
        Err(e) => {
            error!(error = %e, "Database connection failed");
            return;
        }
    };

    let started = Instant::now();
    let result = pool.execute("SELECT 1").await;
    options.report("SELECT 1", started.elapsed());

    match result {
        Ok(_) => info!(
            dialect = ?options.dialect,
            timezone = %options.timezone,
            "Database reachable"
        ),
        Err(e) => error!(error = %e, "Database ping failed"),
    }

    pool.close().await;
}
