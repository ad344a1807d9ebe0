pub mod cli_examples;
pub mod cli_main;
pub mod cli_reactor_problems;
pub mod reactor_help;
