use crate::ReactorDesign::levenspiel::SizingRequest;
use crate::ReactorDesign::rate_table::{RateTable, parse_rate_data};
use crate::ReactorDesign::reactor_problems::{
    BatchTask, CstrTask, LevenspielTask, ProblemReport, ReactorProblem, ReactorTask,
};
use crate::Utils::load_from_file::{create_template, load_tasks_from_file};
use crate::Utils::save_results::save_report_csv;
use crate::Utils::terminal_plot::{levenspiel_bar_chart, stage_legend};
use crate::settings::Settings;
use log::error;
use std::io::{self, Write};
use std::path::PathBuf;

const CHART_WIDTH: usize = 50;

/// None on end of input
pub fn get_user_input() -> Option<String> {
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input),
        Err(e) => {
            error!("failed to read input: {}", e);
            None
        }
    }
}

fn prompt(label: &str) -> Option<String> {
    print!("\x1b[36m{}\x1b[0m", label);
    let _ = io::stdout().flush();
    get_user_input()
}

/// Asks for a number, an empty answer keeps `default`.
fn prompt_f64(label: &str, default: f64) -> f64 {
    loop {
        let Some(input) = prompt(&format!("{} [{}]: ", label, default)) else {
            return default;
        };
        let input = input.trim();
        if input.is_empty() {
            return default;
        }
        match input.parse::<f64>() {
            Ok(value) => return value,
            Err(_) => println!("'{}' is not a number, try again.", input),
        }
    }
}

fn show_assumptions(task: &ReactorTask) {
    println!("\n=== {} ===", task.name());
    println!("Assumptions:");
    for a in task.assumptions() {
        println!("  - {}", a);
    }
}

fn offer_csv_export(report: &ProblemReport) {
    let Some(answer) = prompt("Save results to CSV? (file name or empty to skip): ") else {
        return;
    };
    let answer = answer.trim();
    if answer.is_empty() {
        return;
    }
    match save_report_csv(report, &PathBuf::from(answer)) {
        Ok(()) => println!("Results saved to {}", answer),
        Err(e) => println!("\x1b[31mError: {}\x1b[0m", e),
    }
}

/// Solves one task and prints the report, the Levenspiel chart when there is one.
pub fn run_task(task: &ReactorTask) -> Option<ProblemReport> {
    show_assumptions(task);
    match task.solve() {
        Ok(report) => {
            report.pretty_print();
            if let (Some(points), ReactorTask::LevenspielTask(t)) = (&report.levenspiel, task) {
                println!("\nLevenspiel plot");
                print!("{}", levenspiel_bar_chart(points, CHART_WIDTH));
                print!("{}", stage_legend(t.request.x_int, t.request.x_final));
            }
            Some(report)
        }
        Err(e) => {
            println!("\x1b[31mError: {}\x1b[0m", e);
            println!("Check the input data and try again.");
            None
        }
    }
}

pub fn batch_menu(settings: &Settings) {
    let defaults = settings.batch;
    let task = BatchTask {
        k: prompt_f64("Rate constant k (1/min)", defaults.k),
        x: prompt_f64("Target conversion X", defaults.x),
    };
    if let Some(report) = run_task(&task.into()) {
        offer_csv_export(&report);
    }
}

pub fn cstr_menu(settings: &Settings) {
    let defaults = settings.cstr;
    let task = CstrTask {
        fa0: prompt_f64("Entering molar flow rate F_A0 (mol/min)", defaults.fa0),
        x: prompt_f64("Conversion X", defaults.x),
        v0: prompt_f64("Inlet volumetric flow rate v0 (L/min)", defaults.v0),
        k: prompt_f64("Rate constant k (1/min)", defaults.k),
    };
    if let Some(report) = run_task(&task.into()) {
        offer_csv_export(&report);
    }
}

/// Reads the two rate rows. Empty first row or a parse failure fall back to the defaults.
fn read_rate_table(settings: &Settings) -> Option<RateTable> {
    let default_text = settings.levenspiel.rate_data_text();
    println!("Enter rate data as two comma-separated lines: X values, then -rA values.");
    println!("Press Enter on the first line to use:\n{}", default_text);
    let first = prompt("X:   ")?;
    if first.trim().is_empty() {
        return settings.levenspiel.rate_table().ok();
    }
    let second = prompt("-rA: ")?;
    match parse_rate_data(&format!("{}\n{}", first, second)) {
        Ok(table) => Some(table),
        Err(e) => {
            println!("\x1b[31mError parsing rate data: {}\x1b[0m", e);
            println!("Using the default rate data instead.");
            settings.levenspiel.rate_table().ok()
        }
    }
}

pub fn levenspiel_menu(settings: &Settings) {
    let Some(table) = read_rate_table(settings) else {
        println!("\x1b[31mNo valid rate table available.\x1b[0m");
        return;
    };
    let defaults = &settings.levenspiel;
    let request = SizingRequest::new(
        prompt_f64("Molar flow rate F_A0 (mol/min)", defaults.fa0),
        prompt_f64("Intermediate conversion X_int (after CSTR)", defaults.x_int),
        prompt_f64("Final conversion X_final (after PFR)", defaults.x_final),
    );
    if let Some(report) = run_task(&LevenspielTask::new(table, request).into()) {
        offer_csv_export(&report);
    }
}

pub fn task_file_menu(settings: &Settings) {
    let Some(file_path) = prompt("Enter task file path: ") else {
        return;
    };
    match load_tasks_from_file(file_path.trim(), settings) {
        Ok(tasks) => {
            println!("{} problem(s) found", tasks.len());
            for task in &tasks {
                run_task(task);
            }
        }
        Err(e) => println!("\x1b[31mError: {}\x1b[0m", e),
    }
}

pub fn template_menu() {
    let Some(file_path) = prompt("Template file name [problem.txt]: ") else {
        return;
    };
    let file_path = match file_path.trim() {
        "" => "problem.txt",
        other => other,
    };
    match create_template(&PathBuf::from(file_path)) {
        Ok(()) => println!("Template generated successfully: {}", file_path),
        Err(e) => println!("\x1b[31mError: {}\x1b[0m", e),
    }
}
