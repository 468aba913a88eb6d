//! `cityguide ask` — one-shot question mode.

pub async fn run(question: &str) -> anyhow::Result<()> {
    let (_, registry, assistant) = super::bootstrap()?;

    if !registry.is_configured() {
        eprintln!("  Note: no API key configured, answering via the mock backend.");
    }

    eprint!("  Thinking...");
    let reply = assistant.send_message(question, &[]).await?;
    eprint!("\r             \r");
    println!("{reply}");

    Ok(())
}
