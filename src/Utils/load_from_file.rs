//! # Task File Loader
//!
//! Reads reactor problems from a plain text task file. Each problem is a section: a header
//! line (`BATCH`, `CSTR` or `LEVENSPIEL`) followed by `key: value` lines.
//! Keys are case-insensitive. Missing keys take their values from `Settings`.
//!
//! ```text
//! # first-order batch reactor
//! BATCH
//! k: 0.23
//! X: 0.99
//!
//! CSTR
//! FA0: 5.0
//! X: 0.9
//! v0: 10.0
//! k: 0.006
//!
//! LEVENSPIEL
//! FA0: 1.0
//! X_int: 0.3
//! X_final: 0.8
//! X: 0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.85
//! rA: 0.0053, 0.0052, 0.005, 0.0045, 0.004, 0.0033, 0.0025, 0.0018, 0.00125, 0.001
//! ```
//! Lines starting with `#` are comments. Unknown keys and unknown sections are reported
//! in the log and skipped, malformed numbers are errors with their line number.
use crate::ReactorDesign::levenspiel::SizingRequest;
use crate::ReactorDesign::rate_table::{RateTable, parse_row};
use crate::ReactorDesign::reactor_error::ReactorDesignError;
use crate::ReactorDesign::reactor_problems::{BatchTask, CstrTask, LevenspielTask, ReactorTask};
use crate::settings::Settings;
use log::{info, warn};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static KEY_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)\s*:\s*(.*)$").expect("key-value pattern is valid")
});

pub struct LoadData {
    pub file_name: String,
}

impl LoadData {
    pub fn new(file_name: String) -> Self {
        LoadData { file_name }
    }

    pub fn load_tasks(&self, settings: &Settings) -> Result<Vec<ReactorTask>, ReactorDesignError> {
        load_tasks_from_file(&self.file_name, settings)
    }
}

#[derive(Debug)]
struct Entry {
    line: usize,
    key: String,
    value: String,
}

#[derive(Debug)]
struct Section {
    header: String,
    line: usize,
    entries: Vec<Entry>,
}

impl Section {
    fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key == key)
    }

    fn scalar(&self, key: &str, default: f64) -> Result<f64, ReactorDesignError> {
        match self.get(key) {
            Some(entry) => entry
                .value
                .parse::<f64>()
                .map_err(|_| ReactorDesignError::ParseError {
                    line: entry.line,
                    column: 1,
                    token: entry.value.clone(),
                }),
            None => Ok(default),
        }
    }

    fn warn_unknown_keys(&self, known: &[&str]) {
        for entry in &self.entries {
            if !known.contains(&entry.key.as_str()) {
                warn!(
                    "line {}: unknown key '{}' in section {} ignored",
                    entry.line, entry.key, self.header
                );
            }
        }
    }
}

fn is_header(line: &str) -> bool {
    line.chars().all(|c| c.is_uppercase() || c == '_')
}

fn split_sections(content: &str) -> Result<Vec<Section>, ReactorDesignError> {
    let mut sections: Vec<Section> = Vec::new();
    for (i, raw) in content.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if is_header(line) {
            sections.push(Section {
                header: line.to_string(),
                line: line_no,
                entries: Vec::new(),
            });
            continue;
        }
        let caps = KEY_VALUE.captures(line).ok_or_else(|| {
            ReactorDesignError::DomainError(format!(
                "line {}: expected 'key: value', got '{}'",
                line_no, line
            ))
        })?;
        let entry = Entry {
            line: line_no,
            key: caps[1].to_lowercase(),
            value: caps[2].trim().to_string(),
        };
        match sections.last_mut() {
            Some(section) => section.entries.push(entry),
            None => warn!("line {}: '{}' is outside any section, ignored", line_no, line),
        }
    }
    Ok(sections)
}

fn batch_task(section: &Section, settings: &Settings) -> Result<BatchTask, ReactorDesignError> {
    section.warn_unknown_keys(&["k", "x"]);
    Ok(BatchTask {
        k: section.scalar("k", settings.batch.k)?,
        x: section.scalar("x", settings.batch.x)?,
    })
}

fn cstr_task(section: &Section, settings: &Settings) -> Result<CstrTask, ReactorDesignError> {
    section.warn_unknown_keys(&["fa0", "x", "v0", "k"]);
    let defaults = &settings.cstr;
    Ok(CstrTask {
        fa0: section.scalar("fa0", defaults.fa0)?,
        x: section.scalar("x", defaults.x)?,
        v0: section.scalar("v0", defaults.v0)?,
        k: section.scalar("k", defaults.k)?,
    })
}

fn levenspiel_task(
    section: &Section,
    settings: &Settings,
) -> Result<LevenspielTask, ReactorDesignError> {
    section.warn_unknown_keys(&["fa0", "x_int", "x_final", "x", "ra"]);
    let defaults = &settings.levenspiel;
    let table = match (section.get("x"), section.get("ra")) {
        (Some(x), Some(ra)) => {
            RateTable::new(parse_row(x.line, &x.value)?, parse_row(ra.line, &ra.value)?)?
        }
        (None, None) => defaults.rate_table()?,
        _ => {
            return Err(ReactorDesignError::DomainError(format!(
                "section LEVENSPIEL at line {}: both X and rA rows are needed for a rate table",
                section.line
            )));
        }
    };
    let request = SizingRequest::new(
        section.scalar("fa0", defaults.fa0)?,
        section.scalar("x_int", defaults.x_int)?,
        section.scalar("x_final", defaults.x_final)?,
    );
    Ok(LevenspielTask::new(table, request))
}

/// Parses a whole task document into the problems it describes, in document order.
pub fn parse_task_document(
    content: &str,
    settings: &Settings,
) -> Result<Vec<ReactorTask>, ReactorDesignError> {
    let mut tasks = Vec::new();
    for section in split_sections(content)? {
        let task: ReactorTask = match section.header.as_str() {
            "BATCH" => batch_task(&section, settings)?.into(),
            "CSTR" => cstr_task(&section, settings)?.into(),
            "LEVENSPIEL" => levenspiel_task(&section, settings)?.into(),
            other => {
                warn!(
                    "line {}: unknown section '{}' skipped",
                    section.line, other
                );
                continue;
            }
        };
        tasks.push(task);
    }
    if tasks.is_empty() {
        return Err(ReactorDesignError::DomainError(
            "no BATCH, CSTR or LEVENSPIEL section found".to_string(),
        ));
    }
    Ok(tasks)
}

pub fn load_tasks_from_file(
    file_name: &str,
    settings: &Settings,
) -> Result<Vec<ReactorTask>, ReactorDesignError> {
    let path = Path::new(file_name);
    if !path.exists() {
        return Err(ReactorDesignError::DomainError(format!(
            "File '{}' does not exist",
            file_name
        )));
    }
    let content = fs::read_to_string(path)?;
    let tasks = parse_task_document(&content, settings)?;
    info!("{} problem(s) read from '{}'", tasks.len(), file_name);
    Ok(tasks)
}

pub const TASK_TEMPLATE: &str = "# Reactor problems task file. Lines starting with # are comments.
# Every key may be omitted, its value is then taken from the settings.
BATCH
k: 0.23
X: 0.99

CSTR
FA0: 5.0
X: 0.99
v0: 10.0
k: 0.006

LEVENSPIEL
FA0: 1.0
X_int: 0.3
X_final: 0.8
X: 0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.85
rA: 0.0053, 0.0052, 0.005, 0.0045, 0.004, 0.0033, 0.0025, 0.0018, 0.00125, 0.001
";

/// writes an annotated example task file
pub fn create_template(path: &Path) -> Result<(), ReactorDesignError> {
    fs::write(path, TASK_TEMPLATE)?;
    info!("task file template written to {:?}", path);
    Ok(())
}
