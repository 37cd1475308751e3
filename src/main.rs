use clap::{CommandFactory, Parser};
use onexone::utils::logger;
use onexone::{dispatch, AppConfig, CliConfig, ConfigProvider, JsonFileStorage};

fn main() {
    let cli = CliConfig::parse();

    let config = match AppConfig::resolve(cli.config.as_deref(), cli.data_file.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, config.log_level.as_deref());
    tracing::debug!("CLI args: {:?}", cli);
    tracing::debug!("Resolved config: {:?}", config);

    // 沒有可寫入的資料位置就無法繼續
    let storage = match JsonFileStorage::from_config(&config) {
        Ok(storage) => storage,
        Err(e) => {
            tracing::error!(
                "❌ Cannot prepare datastore at {}: {}",
                config.data_file().display(),
                e
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let Some(command) = cli.command else {
        if let Err(e) = CliConfig::command().print_help() {
            eprintln!("❌ {}", e);
        }
        return;
    };

    let command = command.into_command();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = dispatch(command.as_ref(), &storage, &mut out) {
        tracing::error!("❌ Failed to write output: {}", e);
    }
}
