use crate::config::enums::configuration_error::ConfigurationError;

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigurationError::IOError(e) => e.fmt(f),
            ConfigurationError::ParseError(e) => e.fmt(f),
            ConfigurationError::SerializeError(e) => e.fmt(f),
            ConfigurationError::MissingNanamiAddress => write!(f, "nanami address not configured"),
            ConfigurationError::InvalidValue(msg) => write!(f, "invalid configuration value: {msg}"),
        }
    }
}

impl std::error::Error for ConfigurationError {}
