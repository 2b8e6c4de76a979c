use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::gate_config::GateConfig;
use crate::config::structs::nanami_config::NanamiConfig;

impl GateConfig {
    /// Parses the options fragment a host hands over, e.g.
    /// `nanami_address = "http://nanami.local/"`.
    pub fn from_toml(options: &str) -> Result<GateConfig, ConfigurationError> {
        toml::from_str(options).map_err(ConfigurationError::ParseError)
    }
}

impl From<GateConfig> for NanamiConfig {
    fn from(config: GateConfig) -> Self {
        NanamiConfig::new(&config.nanami_address)
    }
}
