use std::process;
use tracing::error;
use unitpad::{cli, commands, ui, Config, UnitpadError};

fn main() {
    let args = cli::parse_args();

    init_logging(&args);

    match execute(&args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            ui::print_error(&e.to_string());
            error!("unitpad failed: {}", e);
            process::exit(1);
        }
    }
}

fn execute(args: &cli::Args) -> Result<String, UnitpadError> {
    // Load configuration (use defaults unless config file is provided)
    let mut config = match &args.config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    config.apply_cli_overrides(args)?;

    commands::run(&args.command, &config)
}

fn init_logging(args: &cli::Args) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
