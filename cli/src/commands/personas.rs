use super::ui;
use console::Style;
use discovery_config::Config;
use discovery_core::Persona;

pub fn handle_personas(config: &Config) {
    ui::print_header("Persona weights");
    println!(
        "{}",
        Style::new().dim().apply_to(format!(
            "{:<14} {:>10} {:>10} {:>10} {:>10} {:>10}",
            "persona", "popularity", "community", "velocity", "maturity", "risk"
        ))
    );

    for persona in Persona::ALL {
        let w = persona.weights(&config.personas);
        println!(
            "{:<14} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
            persona.as_str(),
            w.popularity,
            w.community,
            w.velocity,
            w.maturity,
            w.risk
        );
    }
}
