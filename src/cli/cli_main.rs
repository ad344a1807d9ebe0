use super::cli_examples::examples_menu;
use super::cli_reactor_problems::{
    batch_menu, cstr_menu, get_user_input, levenspiel_menu, task_file_menu, template_menu,
};
use super::reactor_help::REACTOR_ENG_HELPER;
use crate::settings::{SETTINGS_FILE, Settings};
use std::io::{self, Write};
use std::path::Path;

pub fn run_interactive_menu(settings: &Settings) {
    loop {
        show_main_menu();
        let Some(choice) = get_user_input() else {
            println!("Goodbye!");
            break;
        };

        match choice.trim() {
            "1" => batch_menu(settings),
            "2" => cstr_menu(settings),
            "3" => levenspiel_menu(settings),
            "4" => task_file_menu(settings),
            "5" => template_menu(),
            "6" => examples_menu(settings),
            "7" => show_help(),
            "8" => save_default_settings(settings),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options

Cyan (\x1b[36m) - prompts

Red (\x1b[31m) - errors
*/
fn show_main_menu() {
    println!(
        "\x1b[34m\n Reaction Engineering Interactive Tool\n
    batch, CSTR and PFR reactor design problems \n \x1b[0m"
    );
    println!("\x1b[33m1. Batch Reactor: Time to reach target conversion\x1b[0m");
    println!("\x1b[33m2. CSTR Volume Calculation\x1b[0m");
    println!("\x1b[33m3. Levenspiel Plot Analysis: CSTR + PFR in Series\x1b[0m");
    println!("\x1b[33m4. Solve problems from task file\x1b[0m");
    println!("\x1b[33m5. Generate task file template\x1b[0m");
    println!("\x1b[33m6. Examples\x1b[0m");
    println!("\x1b[33m7. Help\x1b[0m");
    println!("\x1b[33m8. Write settings file\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    print!("\x1b[36mEnter your choice: \x1b[0m");
    let _ = io::stdout().flush();
}

fn show_help() {
    println!("\n=== Reactor Design Help ===");
    println!("{}", REACTOR_ENG_HELPER);
    println!("\nPress Enter to return to menu...");
    let _ = get_user_input();
}

/// writes the settings in use so they can be edited by hand
fn save_default_settings(settings: &Settings) {
    match settings.save(Path::new(SETTINGS_FILE)) {
        Ok(()) => println!("Settings written to {}", SETTINGS_FILE),
        Err(e) => println!("\x1b[31mError: {}\x1b[0m", e),
    }
}
