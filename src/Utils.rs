/// reading reactor problems from task files
pub mod load_from_file;
/// CSV export of solved problems
pub mod save_results;
/// Levenspiel plot in the terminal
pub mod terminal_plot;
