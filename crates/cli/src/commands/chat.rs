//! `cityguide chat` — interactive conversation mode.

use std::io::{BufRead, Write};

use cityguide_core::Message;

pub async fn run() -> anyhow::Result<()> {
    let (config, registry, assistant) = super::bootstrap()?;
    let (provider, settings) = registry.active();

    println!();
    println!("  ╔══════════════════════════════════════════════╗");
    println!("  ║       CityGuide — 台中旅遊小幫手             ║");
    println!("  ╚══════════════════════════════════════════════╝");
    println!();
    println!("  Provider:  {provider}");
    if !settings.model.is_empty() {
        println!("  Model:     {}", settings.model);
    }
    println!("  Lexicon:   {} scope terms, {} station names",
        config.lexicon.scope_terms.len(),
        config.lexicon.station_names.len(),
    );
    println!();
    println!("  Type your message and press Enter.");
    println!("  Type 'exit' or Ctrl+C to quit.");
    println!();

    let stdin = std::io::stdin();
    let mut history: Vec<Message> = Vec::new();

    print!("  You > ");
    std::io::stdout().flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let message = line.trim();

        if message.is_empty() {
            print!("  You > ");
            std::io::stdout().flush()?;
            continue;
        }
        if message == "exit" {
            break;
        }

        eprint!("  ...");
        match assistant.send_message(message, &history).await {
            Ok(reply) => {
                eprint!("\r     \r");
                println!();
                for line in reply.lines() {
                    println!("  Assistant > {line}");
                }
                println!();

                history.push(Message::user(message));
                history.push(Message::assistant(&reply));
            }
            Err(e) => {
                eprint!("\r     \r");
                eprintln!("  [Error] {e}");
                println!();
            }
        }

        print!("  You > ");
        std::io::stdout().flush()?;
    }

    println!();
    println!("  再見！歡迎再來台中玩 👋");
    println!();

    Ok(())
}
