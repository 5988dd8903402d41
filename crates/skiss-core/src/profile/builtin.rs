use crate::error::SkissError;
use crate::profile::parse_profile_str;
use crate::profile::schema::HeuristicProfile;
use std::sync::LazyLock;

const DEFAULT_JSON: &str = include_str!("../../../../profiles/default.json");
const STRICT_JSON: &str = include_str!("../../../../profiles/strict.json");

/// Available predefined profiles.
pub const PRESETS: &[&str] = &["default", "strict"];

static DEFAULT_PROFILE: LazyLock<HeuristicProfile> = LazyLock::new(|| {
    parse_profile_str(DEFAULT_JSON).expect("embedded profiles/default.json is valid")
});

/// The profile used when no preset or custom file is given.
pub fn default_profile() -> &'static HeuristicProfile {
    &DEFAULT_PROFILE
}

/// Load a predefined profile by name.
pub fn load_preset(name: &str) -> Result<HeuristicProfile, SkissError> {
    match name {
        "default" => Ok(DEFAULT_PROFILE.clone()),
        "strict" => parse_profile_str(STRICT_JSON),
        _ => Err(SkissError::ProfileInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

/// Raw embedded JSON of a preset, for `skiss profiles show`.
pub fn preset_json(name: &str) -> Option<&'static str> {
    match name {
        "default" => Some(DEFAULT_JSON),
        "strict" => Some(STRICT_JSON),
        _ => None,
    }
}
