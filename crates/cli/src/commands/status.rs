//! `cityguide status` — show the active backend and its configuration.

use cityguide_config::AppConfig;

pub async fn run() -> anyhow::Result<()> {
    let (config, registry, _) = super::bootstrap()?;
    let (provider, settings) = registry.active();

    println!();
    println!("  CityGuide Status");
    println!("  ─────────────────────────────────────");
    println!("  Config file:  {}", AppConfig::config_dir().join("config.toml").display());
    println!("  Provider:     {provider}");
    println!(
        "  API key:      {}",
        if settings.api_key.is_empty() { "not set" } else { "[REDACTED]" }
    );
    if !settings.model.is_empty() {
        println!("  Model:        {}", settings.model);
    }
    if !settings.endpoint.is_empty() {
        println!("  Endpoint:     {}", settings.endpoint);
    }
    println!(
        "  Ready:        {}",
        if registry.is_configured() { "yes" } else { "no (falling back to errors at call time)" }
    );
    println!();
    println!("  Lexicon");
    println!("  ─────────────────────────────────────");
    println!("  Scope terms:     {}", config.lexicon.scope_terms.len());
    println!("  Trigger terms:   {}", config.lexicon.trigger_terms.len());
    println!("  Station names:   {}", config.lexicon.station_names.len());
    println!();

    Ok(())
}
