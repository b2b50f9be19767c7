use serde::{Deserialize, Serialize};

/// Configuration for the auth module (`modules.auth` in the server config).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
    #[serde(default = "default_max_field_length")]
    pub max_name_length: usize,
    #[serde(default = "default_max_field_length")]
    pub max_email_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            min_password_length: default_min_password_length(),
            max_name_length: default_max_field_length(),
            max_email_length: default_max_field_length(),
        }
    }
}

fn default_min_password_length() -> usize {
    8
}

fn default_max_field_length() -> usize {
    255
}
