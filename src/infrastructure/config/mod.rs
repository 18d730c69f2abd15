//! Site configuration loading

mod yaml;

pub use yaml::{
    config_candidates, discover_config, load_environments, parse_environments,
    DEFAULT_CONFIG_FILE,
};
