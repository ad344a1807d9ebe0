use super::cli_reactor_problems::get_user_input;
use crate::Examples::reactor_examples::reactor_examples;
use crate::settings::Settings;
use std::io::{self, Write};

pub fn examples_menu(settings: &Settings) {
    loop {
        println!("\n=== Examples ===");
        println!("1. Batch reactor: time against conversion");
        println!("2. CSTR volume and batch time compared");
        println!("3. CSTR + PFR from the course rate data");
        println!("4. CSTR + PFR: total volume against intermediate conversion");
        println!("0. Back to main menu");
        print!("Enter your choice: ");
        let _ = io::stdout().flush();

        let Some(choice) = get_user_input() else {
            break;
        };
        match choice.trim() {
            "1" => reactor_examples(0, settings),
            "2" => reactor_examples(1, settings),
            "3" => reactor_examples(2, settings),
            "4" => reactor_examples(3, settings),
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
