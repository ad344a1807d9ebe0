use ReactEng::cli::cli_main::run_interactive_menu;
use ReactEng::settings::{SETTINGS_FILE, Settings};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::path::Path;

pub fn main() {
    if let Err(e) = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("logger not initialised: {}", e);
    }
    let settings = Settings::load(Path::new(SETTINGS_FILE));
    run_interactive_menu(&settings);
}
