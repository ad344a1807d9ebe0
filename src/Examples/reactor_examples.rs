use crate::ReactorDesign::reactor_problems::ReactorProblem;
use crate::settings::Settings;
use prettytable::{Table, row};

pub fn reactor_examples(task: usize, settings: &Settings) {
    match task {
        0 => {
            // BATCH REACTOR: time grows without bound as X -> 1
            use crate::ReactorDesign::closed_form::batch_time_to_conversion;
            let k = settings.batch.k;
            let mut table = Table::new();
            table.add_row(row!["X", "t, min"]);
            for x in [0.5, 0.9, 0.99, 0.999] {
                match batch_time_to_conversion(k, x) {
                    Ok(t) => table.add_row(row![x, format!("{:.2}", t)]),
                    Err(e) => table.add_row(row![x, e.to_string()]),
                };
            }
            println!("Batch reactor, k = {} 1/min", k);
            table.printstd();
        }
        1 => {
            // CSTR vs BATCH: same first-order kinetics, residence time V/v0 against batch time
            use crate::ReactorDesign::closed_form::{
                batch_time_to_conversion, cstr_first_order_volume,
            };
            let cstr = settings.cstr;
            let mut table = Table::new();
            table.add_row(row!["X", "V_CSTR, L", "tau_CSTR, min", "t_batch, min"]);
            for x in [0.5, 0.8, 0.9, 0.99] {
                let (Ok(v), Ok(t)) = (
                    cstr_first_order_volume(cstr.fa0, x, cstr.v0, cstr.k),
                    batch_time_to_conversion(cstr.k, x),
                ) else {
                    continue;
                };
                table.add_row(row![
                    x,
                    format!("{:.1}", v),
                    format!("{:.1}", v / cstr.v0),
                    format!("{:.1}", t)
                ]);
            }
            println!("CSTR, F_A0 = {} mol/min, v0 = {} L/min, k = {} 1/min", cstr.fa0, cstr.v0, cstr.k);
            table.printstd();
        }
        2 => {
            // LEVENSPIEL: course rate data, CSTR to X_int then PFR to X_final
            match settings.levenspiel.task().and_then(|t| t.solve()) {
                Ok(report) => report.pretty_print(),
                Err(e) => println!("Error: {}", e),
            }
        }
        3 => {
            // LEVENSPIEL: how the split point X_int changes the total volume
            use crate::ReactorDesign::levenspiel::{SizingRequest, size_cstr_pfr_series};
            let defaults = &settings.levenspiel;
            let rate_table = match defaults.rate_table() {
                Ok(t) => t,
                Err(e) => {
                    println!("Error: {}", e);
                    return;
                }
            };
            let mut table = Table::new();
            table.add_row(row!["X_int", "V_CSTR, L", "V_PFR, L", "V_total, L"]);
            let mut best: Option<(f64, f64)> = None;
            for i in 1..=7 {
                let x_int = i as f64 / 10.0;
                let request = SizingRequest::new(defaults.fa0, x_int, defaults.x_final);
                match size_cstr_pfr_series(&rate_table, &request) {
                    Ok(result) => {
                        table.add_row(row![
                            x_int,
                            format!("{:.2}", result.cstr_volume),
                            format!("{:.2}", result.pfr_volume),
                            format!("{:.2}", result.total_volume())
                        ]);
                        if best.is_none_or(|(_, v)| result.total_volume() < v) {
                            best = Some((x_int, result.total_volume()));
                        }
                    }
                    Err(e) => {
                        table.add_row(row![x_int, e.to_string(), "", ""]);
                    }
                }
            }
            println!("Total volume against X_int, X_final = {}", defaults.x_final);
            table.printstd();
            if let Some((x_int, v)) = best {
                println!("Smallest total volume {:.2} L at X_int = {}", v, x_int);
            }
        }
        _ => println!("No example with number {}", task),
    }
}
