//! Configuration merging logic
//!
//! Merges configurations from multiple sources with proper precedence.

use crate::{types::*, Config};

/// Merge two configurations, with `overlay` taking precedence
///
/// Fields of `overlay` that differ from their defaults replace the
/// corresponding fields of `base`.
pub fn merge(mut base: Config, overlay: Config) -> Config {
    base.personas = merge_personas(base.personas, overlay.personas);
    base.lexical = merge_lexical(base.lexical, overlay.lexical);
    base.cold_start = merge_cold_start(base.cold_start, overlay.cold_start);
    base.output = merge_output(base.output, overlay.output);

    base
}

fn pick_f64(base: f64, overlay: f64, default: f64) -> f64 {
    if (overlay - default).abs() > 1e-6 {
        overlay
    } else {
        base
    }
}

fn pick_f32(base: f32, overlay: f32, default: f32) -> f32 {
    if (overlay - default).abs() > 0.001 {
        overlay
    } else {
        base
    }
}

fn pick<T: PartialEq>(base: T, overlay: T, default: T) -> T {
    if overlay != default {
        overlay
    } else {
        base
    }
}

fn merge_weights(
    base: DimensionWeights,
    overlay: DimensionWeights,
    default: DimensionWeights,
) -> DimensionWeights {
    DimensionWeights {
        popularity: pick_f64(base.popularity, overlay.popularity, default.popularity),
        community: pick_f64(base.community, overlay.community, default.community),
        velocity: pick_f64(base.velocity, overlay.velocity, default.velocity),
        maturity: pick_f64(base.maturity, overlay.maturity, default.maturity),
        risk: pick_f64(base.risk, overlay.risk, default.risk),
    }
}

fn merge_personas(base: PersonasConfig, overlay: PersonasConfig) -> PersonasConfig {
    let default = PersonasConfig::default();
    PersonasConfig {
        contributor: merge_weights(base.contributor, overlay.contributor, default.contributor),
        early_adopter: merge_weights(
            base.early_adopter,
            overlay.early_adopter,
            default.early_adopter,
        ),
        enterprise: merge_weights(base.enterprise, overlay.enterprise, default.enterprise),
        learner: merge_weights(base.learner, overlay.learner, default.learner),
    }
}

fn merge_lexical(base: LexicalConfig, overlay: LexicalConfig) -> LexicalConfig {
    let default = LexicalConfig::default();
    LexicalConfig {
        name_boost: pick_f32(base.name_boost, overlay.name_boost, default.name_boost),
        topics_boost: pick_f32(base.topics_boost, overlay.topics_boost, default.topics_boost),
        description_boost: pick_f32(
            base.description_boost,
            overlay.description_boost,
            default.description_boost,
        ),
        readme_boost: pick_f32(base.readme_boost, overlay.readme_boost, default.readme_boost),
    }
}

fn merge_cold_start(base: ColdStartConfig, overlay: ColdStartConfig) -> ColdStartConfig {
    let default = ColdStartConfig::default();
    ColdStartConfig {
        enabled: pick(base.enabled, overlay.enabled, default.enabled),
        window_days: pick(base.window_days, overlay.window_days, default.window_days),
    }
}

fn merge_output(base: OutputConfig, overlay: OutputConfig) -> OutputConfig {
    let default = OutputConfig::default();
    OutputConfig {
        top_n: pick(base.top_n, overlay.top_n, default.top_n),
        format: pick(base.format, overlay.format, default.format),
    }
}
