use std::{collections::HashMap, env};

/// Returns a HashMap containing all environment variables.
pub fn get_envv() -> HashMap<String, String> {
    env::vars().collect()
}

/// Returns the value of an environment variable or a default value if not
/// found.
pub fn get_env_or(key: &str, default: &str) -> String {
    let envv = get_envv();
    if envv.contains_key(key) {
        // Safety: The HashMap is already checked for the key
        envv.get(key).unwrap().clone()
    } else {
        default.to_string()
    }
}
