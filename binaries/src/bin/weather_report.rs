// SPDX-License-Identifier: MPL-2.0

//! Interactive report menu over the station logs under `data/`.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use metstat::archive::WeatherArchive;
use metstat::report;

const DATA_DIR: &str = "data";
const CSV_FILE: &str = "WindTempSolar.csv";

const MENU: &str = "\
======================================================================
                                MENU
======================================================================
1. Average wind speed and sample standard deviation for a month and year
2. Average air temperature and sample standard deviation for each month of a year
3. Sample Pearson Correlation Coefficient for a month, across all years
4. Wind, temperature, and total solar radiation for each month of a year (written to 'WindTempSolar.csv')
5. Total solar radiation in kWh/m2 for each month of a year
6. Exit
======================================================================";

type InputLines = io::Lines<io::StdinLock<'static>>;

fn main() {
    let (archive, load) = match WeatherArchive::load(Path::new(DATA_DIR)) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    for path in &load.files_failed {
        println!("Failed to open {}", path.display());
    }
    println!(
        "Loaded {} readings from {} files ({} lines skipped).",
        archive.len(),
        load.files_read,
        load.stats.skipped,
    );

    let mut lines = io::stdin().lines();
    loop {
        println!("{MENU}");
        let Some(option) = read_number(&mut lines, "Enter option: ") else {
            break;
        };
        match option {
            1 => {
                let Some((month, year)) = read_month_and_year(&mut lines) else {
                    break;
                };
                let summary = report::wind_speed_summary(&archive, month, year);
                println!("{}", report::render_wind_summary(month, year, summary));
            }
            2 => {
                let Some(year) = read_year(&mut lines) else {
                    break;
                };
                let rows = report::temperature_by_month(&archive, year);
                println!("{}", report::render_temperature_report(year, &rows));
            }
            3 => {
                let Some(month) = read_month(&mut lines) else {
                    break;
                };
                let summary = report::correlations_for_month(&archive, month);
                println!("{}", report::render_correlations(month, summary));
            }
            4 => {
                let Some(year) = read_year(&mut lines) else {
                    break;
                };
                write_climate_file(&archive, year);
            }
            5 => {
                let Some(year) = read_year(&mut lines) else {
                    break;
                };
                let rows = report::solar_by_month(&archive, year);
                println!("{}", report::render_solar_report(&rows));
            }
            6 => {
                println!("Exiting the program.");
                break;
            }
            _ => println!("Invalid option. Please try again."),
        }
    }
}

fn write_climate_file(archive: &WeatherArchive, year: u32) {
    let rows = report::climate_by_month(archive, year);
    if rows.iter().all(|row| {
        row.wind.is_none() && row.temperature.is_none() && row.total_solar_kwh.is_none()
    }) {
        println!("No data available for the specified year.");
    }

    match File::create(CSV_FILE) {
        Ok(mut file) => match report::write_climate_csv(&mut file, year, &rows) {
            Ok(()) => println!("Data written to file '{CSV_FILE}'."),
            Err(err) => println!("Failed to write '{CSV_FILE}': {err}"),
        },
        Err(err) => println!("Unable to open '{CSV_FILE}' for writing: {err}"),
    }
}

/// Prompts until a line parses as a number. `None` means end of input.
fn read_number(lines: &mut InputLines, prompt: &str) -> Option<i64> {
    loop {
        print!("{prompt}");
        let _ = io::stdout().flush();
        let line = lines.next()?.ok()?;
        match line.trim().parse() {
            Ok(value) => return Some(value),
            Err(_) => println!("Invalid number. Please try again."),
        }
    }
}

fn read_month(lines: &mut InputLines) -> Option<u32> {
    loop {
        let value = read_number(lines, "Enter month (1-12): ")?;
        if (1..=12).contains(&value) {
            return Some(value as u32);
        }
        println!("Invalid month. Please try again.");
    }
}

fn read_year(lines: &mut InputLines) -> Option<u32> {
    loop {
        let value = read_number(lines, "Enter year: ")?;
        if value > 0 {
            return Some(value as u32);
        }
        println!("Invalid year. Please try again.");
    }
}

fn read_month_and_year(lines: &mut InputLines) -> Option<(u32, u32)> {
    let month = read_month(lines)?;
    let year = read_year(lines)?;
    Some((month, year))
}
