use haisen::catalog::builtin;
use haisen::prelude::*;
use serde::Deserialize;
use std::env;
use std::fs;
use std::sync::Arc;

/// One action of a wiring script, the replayable format the demo driver
/// and the drill generator share.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
enum ScriptAction {
    Connect { from: String, to: String },
    Disconnect { from: String, to: String },
    Clear,
    Energize,
}

fn main() {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() > 3 {
        eprintln!("Usage: cargo run -- [path/to/bank.json] [path/to/script.json]");
        std::process::exit(1);
    }

    let bank_path = args.get(1);
    let script_path = args.get(2);

    // Load the bank definition
    let definition = if let Some(path) = bank_path {
        println!("Loading bank definition from: {}", path);
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Failed to read bank definition '{}': {}", path, e);
                std::process::exit(1);
            }
        };
        match serde_json::from_str::<BankDefinition>(&content) {
            Ok(definition) => definition,
            Err(e) => {
                eprintln!("Failed to parse bank definition '{}': {}", path, e);
                std::process::exit(1);
            }
        }
    } else {
        println!("No bank definition provided. Using the built-in wye-wye bank.");
        builtin::wye_wye()
    };
    let bank_type = definition.bank_type;

    let mut library = CatalogLibrary::new();
    if let Err(e) = library.register(definition) {
        eprintln!("Bank definition failed validation: {}", e);
        std::process::exit(1);
    }

    // Load the wiring script
    let script: Vec<ScriptAction> = if let Some(path) = script_path {
        println!("Loading wiring script from: {}", path);
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Failed to read script '{}': {}", path, e);
                std::process::exit(1);
            }
        };
        match serde_json::from_str(&content) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to parse script '{}': {}", path, e);
                std::process::exit(1);
            }
        }
    } else {
        println!("No script provided. Replaying the bank's own required wiring.");
        demo_script(&library, bank_type)
    };

    let mut session = TrainingSession::new(
        Arc::new(library),
        bank_type,
        TrainingMode::Guided,
        Difficulty::Apprentice,
    );

    println!("\nReplaying {} actions on the {} bank...", script.len(), bank_type);

    for action in script {
        match action {
            ScriptAction::Connect { from, to } => {
                session.add_connection(&from, &to);
                let added = session
                    .state()
                    .connections
                    .last()
                    .expect("connection was just added");
                if added.is_correct {
                    println!("  connect {} -> {}: ok", from, to);
                } else {
                    println!(
                        "  connect {} -> {}: WRONG ({})",
                        from,
                        to,
                        added.error_reason.as_deref().unwrap_or("no reason")
                    );
                }
                if let Some(step) = session.current_step() {
                    println!(
                        "    step {}/{}: {}",
                        step.step_number,
                        session.training_steps().len(),
                        step.instructions
                    );
                }
            }
            ScriptAction::Disconnect { from, to } => {
                session.remove_connection(&from, &to);
                println!("  disconnect {} -> {}", from, to);
            }
            ScriptAction::Clear => {
                session.clear_connections();
                println!("  cleared the board");
            }
            ScriptAction::Energize => {
                let result = session.energize_transformer();
                match result.outcome {
                    EnergizationOutcome::Success => println!("  energize: SUCCESS"),
                    _ => {
                        println!(
                            "  energize: {}",
                            result.message.as_deref().unwrap_or("not correct")
                        );
                        for connection in &result.incorrect_connections {
                            println!("    faulted wire: {} -> {}", connection.from, connection.to);
                        }
                    }
                }
            }
        }
    }

    let state = session.state();
    println!(
        "\nFinished: {} wires, {} steps completed, complete = {}",
        state.connections.len(),
        state.completed_step_ids.len(),
        state.is_complete
    );
}

/// Builds a script that wires the bank correctly, with an energize check
/// halfway through and at the end.
fn demo_script(library: &CatalogLibrary, bank_type: BankType) -> Vec<ScriptAction> {
    let catalog = library
        .bank(bank_type)
        .expect("bank was registered just above");
    let required = catalog.required_connections();

    let mut script = Vec::new();
    for (index, connection) in required.iter().enumerate() {
        if index == required.len() / 2 {
            script.push(ScriptAction::Energize);
        }
        script.push(ScriptAction::Connect {
            from: connection.a.clone(),
            to: connection.b.clone(),
        });
    }
    script.push(ScriptAction::Energize);
    script
}
