//! # WireCalc CLI
//!
//! Terminal front-end for the wire calculator. Prompts for the form fields,
//! runs the calculation, and offers the saved-setup operations (save, list,
//! load, rename, delete) backed by `setups.wcs` in the working directory.
//!
//! This is the UI collaborator around `wire_core`; all logic and
//! persistence live in the library.

use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use wire_core::calculations::wire::{calculate, Phases, VoltageType, WireInput};
use wire_core::materials::WireMaterial;
use wire_core::setups::SetupStore;
use wire_core::units::LengthUnit;

const SETUPS_FILE: &str = "setups.wcs";

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    Some(input.trim().to_string())
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    match prompt_line(prompt) {
        Some(line) if !line.is_empty() => line.parse().unwrap_or(default),
        _ => default,
    }
}

fn prompt_choice<T: Copy>(prompt: &str, options: &[(&str, T)], default: T) -> T {
    let line = match prompt_line(prompt) {
        Some(line) if !line.is_empty() => line.to_uppercase(),
        _ => return default,
    };
    options
        .iter()
        .find(|(token, _)| *token == line)
        .map(|(_, value)| *value)
        .unwrap_or(default)
}

fn prompt_input() -> WireInput {
    let voltage_type = prompt_choice(
        "Voltage type (DC/AC) [DC]: ",
        &[("DC", VoltageType::Dc), ("AC", VoltageType::Ac)],
        VoltageType::Dc,
    );

    let material_options: Vec<(&str, WireMaterial)> = WireMaterial::ALL
        .iter()
        .map(|m| (m.token(), *m))
        .collect();
    let wire_material = prompt_choice(
        "Wire material (COPPER/ALUMINUM/SILVER/GOLD/NICKEL/ALLOY) [COPPER]: ",
        &material_options,
        WireMaterial::Copper,
    );

    let phases = prompt_choice(
        "Phases (1/3) [1]: ",
        &[("1", Phases::Single), ("3", Phases::Three)],
        Phases::Single,
    );

    let voltage = prompt_f64("Voltage (V) [120.0]: ", 120.0);
    let current = prompt_f64("Current (A) [10.0]: ", 10.0);
    let wire_length = prompt_f64("Wire length [5.0]: ", 5.0);
    let length_unit = prompt_choice(
        "Length unit (CM/INCH) [CM]: ",
        &[("CM", LengthUnit::Cm), ("INCH", LengthUnit::Inch)],
        LengthUnit::Cm,
    );
    let voltage_drop_pct = prompt_f64("Voltage drop (%) [2.0]: ", 2.0);

    WireInput {
        voltage_type,
        wire_material,
        phases,
        voltage,
        current,
        wire_length,
        length_unit,
        voltage_drop_pct,
    }
}

fn print_setups(store: &SetupStore) {
    if store.is_empty() {
        println!("No saved setups.");
        return;
    }
    for (i, setup) in store.setups().iter().enumerate() {
        println!(
            "  [{}] {} - {} {}V {}A, {} {} of {}",
            i,
            setup.name,
            setup.input.voltage_type,
            setup.input.voltage,
            setup.input.current,
            setup.input.wire_length,
            setup.input.length_unit,
            setup.input.wire_material,
        );
    }
}

fn run_calculation(input: &WireInput, store: &mut SetupStore) {
    match calculate(input) {
        Ok(output) => {
            println!();
            println!("Wire size:      {} (AWG)", output.wire_size_text());
            println!("Estimated cost: {}", output.estimated_cost_text());
            println!("Impedance:      {}", output.impedance_text());
            println!();

            if let Some(name) = prompt_line("Save this setup? Enter a name (blank to skip): ") {
                if !name.is_empty() {
                    match store.append(name.as_str(), input.clone()) {
                        Ok(()) => println!("Setup \"{}\" has been saved.", name),
                        Err(e) => println!("Could not save setup: {}", e),
                    }
                }
            }
        }
        Err(e) => println!("Calculation failed: {}", e),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("WireCalc - Electrical Wire Calculator");
    println!("=====================================");
    println!();

    let path = Path::new(SETUPS_FILE);
    let mut store = match SetupStore::open(path) {
        Ok(store) => store,
        Err(e) => {
            warn!(error = %e, "could not open setups file, starting without persistence history");
            eprintln!("Failed to load {}: {}", SETUPS_FILE, e);
            std::process::exit(1);
        }
    };

    loop {
        println!();
        println!("  [c] Calculate    [l] List setups   [o] Load setup");
        println!("  [r] Rename setup [d] Delete setup  [x] Delete all  [q] Quit");

        let choice = prompt_line("> ").unwrap_or_default().to_lowercase();
        match choice.as_str() {
            "c" => {
                let input = prompt_input();
                run_calculation(&input, &mut store);
            }
            "l" => print_setups(&store),
            "o" => {
                print_setups(&store);
                let index = prompt_f64("Setup index to load: ", 0.0) as usize;
                match store.get(index) {
                    Some(setup) => {
                        let input = setup.input.clone();
                        println!("Loaded \"{}\".", setup.name);
                        run_calculation(&input, &mut store);
                    }
                    None => println!("No setup at index {}.", index),
                }
            }
            "r" => {
                print_setups(&store);
                let index = prompt_f64("Setup index to rename: ", 0.0) as usize;
                if let Some(name) = prompt_line("New name: ") {
                    if name.is_empty() {
                        println!("Name unchanged.");
                    } else if let Err(e) = store.rename(index, name.as_str()) {
                        println!("Rename failed: {}", e);
                    }
                }
            }
            "d" => {
                print_setups(&store);
                let index = prompt_f64("Setup index to delete: ", 0.0) as usize;
                if let Err(e) = store.delete_one(index) {
                    println!("Delete failed: {}", e);
                }
            }
            "x" => {
                if let Some(answer) = prompt_line("Delete ALL setups? (yes/no): ") {
                    if answer.eq_ignore_ascii_case("yes") {
                        if let Err(e) = store.delete_all() {
                            println!("Delete all failed: {}", e);
                        }
                    }
                }
            }
            "q" => break,
            _ => println!("Unknown option."),
        }
    }
}
