use clap::Parser;
use haisen::catalog::builtin;
use haisen::prelude::*;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::fs;

/// A CLI tool to generate practice wiring scripts for the haisen trainer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON script to
    #[arg(short, long, default_value = "generated_drill.json")]
    output: String,

    /// Optional path to a bank definition JSON; defaults to the built-in wye-wye bank
    #[arg(short, long)]
    bank: Option<String>,

    /// How many wrong wires to splice into the drill
    #[arg(long, default_value_t = 0)]
    faults: usize,
}

/// Mirrors the script format the demo driver replays.
#[derive(Debug, Serialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
enum ScriptAction {
    Connect { from: String, to: String },
    Energize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    let definition = match &cli.bank {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            serde_json::from_str::<BankDefinition>(&content)?
        }
        None => builtin::wye_wye(),
    };

    // Validate before generating; a drill over a broken definition helps no one.
    let bank_type = definition.bank_type;
    let mut library = CatalogLibrary::new();
    library.register(definition)?;
    let catalog = library.bank(bank_type).expect("bank was just registered");

    println!(
        "Generating a {} drill ({} required connections, {} faults)...",
        bank_type,
        catalog.required_connections().len(),
        cli.faults
    );

    let mut script: Vec<ScriptAction> = catalog
        .required_connections()
        .iter()
        .map(|connection| ScriptAction::Connect {
            from: connection.a.clone(),
            to: connection.b.clone(),
        })
        .collect();

    for _ in 0..cli.faults {
        script.push(generate_fault(catalog, &mut rng));
    }

    script.shuffle(&mut rng);
    script.push(ScriptAction::Energize);

    let json_output = serde_json::to_string_pretty(&script)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved a {}-action drill to '{}'",
        script.len(),
        cli.output
    );

    Ok(())
}

/// Picks a random pair of distinct points that is not a correct wiring.
fn generate_fault(catalog: &BankCatalog, rng: &mut impl Rng) -> ScriptAction {
    let points = catalog.points();
    loop {
        let from = &points[rng.random_range(0..points.len())].id;
        let to = &points[rng.random_range(0..points.len())].id;
        if from == to {
            continue;
        }
        if catalog.is_required(&PairKey::new(from.clone(), to.clone())) {
            continue;
        }
        return ScriptAction::Connect {
            from: from.clone(),
            to: to.clone(),
        };
    }
}
