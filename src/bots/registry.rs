use std::error::Error;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::Bot;
use crate::{HintBot, RandomBot};

/// Returns a normalized label for a bot spec (the head token before any ':').
pub fn label_for_spec(spec: &str) -> String {
    spec.split(':')
        .next()
        .unwrap_or(spec)
        .trim()
        .to_ascii_lowercase()
}

/// Create a bot instance from a CLI-style spec.
/// Supported specs:
/// - random[:seed]
/// - random-mover[:seed] (draws only one time in five while moves exist)
/// - hint
pub fn create_bot_from_spec(spec: &str, seed: u64) -> Result<Box<dyn Bot>, Box<dyn Error>> {
    match label_for_spec(spec).as_str() {
        "random" => {
            let custom_seed = spec
                .split_once(':')
                .and_then(|(_, value)| value.trim().parse::<u64>().ok())
                .unwrap_or(seed ^ 0x9E37_79B9);
            Ok(Box::new(RandomBot::new(StdRng::seed_from_u64(custom_seed))))
        }
        "random-mover" => {
            let custom_seed = spec
                .split_once(':')
                .and_then(|(_, value)| value.trim().parse::<u64>().ok())
                .unwrap_or(seed ^ 0x9E37_79B9);
            Ok(Box::new(RandomBot::with_draw_chance(
                StdRng::seed_from_u64(custom_seed),
                0.2,
            )))
        }
        "hint" => Ok(Box::new(HintBot::new())),
        _ => Err(format!("unrecognized bot spec: {spec}").into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_ignore_case_and_arguments() {
        assert_eq!(label_for_spec("Random:42"), "random");
        assert_eq!(label_for_spec(" hint "), "hint");
        assert_eq!(label_for_spec("random-mover:3"), "random-mover");
    }

    #[test]
    fn unknown_specs_are_rejected() {
        assert!(create_bot_from_spec("hint", 1).is_ok());
        assert!(create_bot_from_spec("random:7", 1).is_ok());
        assert!(create_bot_from_spec("random-mover", 1).is_ok());
        assert!(create_bot_from_spec("heuristic", 1).is_err());
    }
}
