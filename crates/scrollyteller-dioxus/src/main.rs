use dioxus::prelude::*;
use scrollyteller_config::{Config, ConfigError, Launch};
use scrollyteller_dioxus::App;
use scrollyteller_engine::io;
use std::env;
use std::process;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("scrollyteller starting up!");

    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    let args: Vec<String> = env::args().skip(1).collect();
    let launch = match Config::resolve_launch(&args, &config_path) {
        Ok(launch) => launch,
        Err(e) => {
            log::error!("Could not determine narratives path: {e}");
            eprintln!("Error: {e}");
            if matches!(e, ConfigError::MissingConfig { .. } | ConfigError::Usage) {
                let program_name = env::args()
                    .next()
                    .unwrap_or_else(|| "scrollyteller".to_string());
                eprintln!("Usage: {program_name} [narratives-path] [narrative-key]");
                eprintln!("Or create a config file at {}", config_path.display());
            }
            process::exit(1);
        }
    };

    log::info!(
        "Using narratives path {} ({})",
        launch.narratives_path.display(),
        if launch.from_config {
            "from config file"
        } else {
            "from command line"
        }
    );

    if let Err(e) = io::validate_narratives_dir(&launch.narratives_path) {
        let source = if launch.from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Narratives path '{}'{} is invalid: {e}",
            launch.narratives_path.display(),
            source
        );
        process::exit(1);
    }

    log::info!("About to launch Dioxus app for desktop");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .with_context(launch)
        .launch(app_root);
}

fn app_root() -> Element {
    let launch = use_context::<Launch>();

    rsx! {
        App {
            narratives_path: launch.narratives_path,
            initial_key: launch.narrative_key,
        }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("scrollyteller")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
