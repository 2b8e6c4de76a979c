use std::time::Duration;
use log::warn;
use regex::Regex;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::user_token_source::UserTokenSource;
use crate::config::structs::nanami_config::NanamiConfig;
use crate::tracker::enums::client_id_scheme::ClientIdScheme;

impl Default for NanamiConfig {
    fn default() -> Self {
        NanamiConfig {
            nanami_address: String::new(),
            refresh_interval: 300,
            request_timeout: 15,
            batch_size: 50,
            batch_flush_interval: 10,
            queue_capacity: 1000,
            user_token_source: UserTokenSource::path_segment,
            user_token_segment: 2,
            user_token_param: String::from("user_id"),
            client_id_scheme: ClientIdScheme::azureus,
        }
    }
}

impl NanamiConfig {
    pub const MIN_REFRESH_INTERVAL: u64 = 10;
    pub const MIN_BATCH_FLUSH_INTERVAL: u64 = 1;
    pub const MIN_REQUEST_TIMEOUT: u64 = 1;
    pub const MAX_BATCH_SIZE: usize = 1000;

    pub fn new(nanami_address: &str) -> NanamiConfig {
        NanamiConfig {
            nanami_address: nanami_address.to_string(),
            ..Default::default()
        }
    }

    /// Checks the settings and returns a normalized copy.
    ///
    /// A missing or malformed address and impossible batch sizes are errors.
    /// Intervals below their minimum are raised to it, and the address gets a
    /// trailing `/` so endpoint names can be appended directly.
    pub fn validate(&self) -> Result<NanamiConfig, ConfigurationError> {
        let mut config = self.clone();

        config.nanami_address = config.nanami_address.trim().to_string();
        if config.nanami_address.is_empty() {
            return Err(ConfigurationError::MissingNanamiAddress);
        }
        let address_check = Regex::new(r"^https?://[^\s/]+(/\S*)?$")
            .map_err(|e| ConfigurationError::InvalidValue(e.to_string()))?;
        if !address_check.is_match(&config.nanami_address) {
            return Err(ConfigurationError::InvalidValue(format!(
                "nanami_address \"{}\" is not an http(s) url", config.nanami_address
            )));
        }
        if !config.nanami_address.ends_with('/') {
            config.nanami_address.push('/');
        }

        if config.batch_size == 0 || config.batch_size > Self::MAX_BATCH_SIZE {
            return Err(ConfigurationError::InvalidValue(format!(
                "batch_size must be between 1 and {}, got {}", Self::MAX_BATCH_SIZE, config.batch_size
            )));
        }
        if config.queue_capacity < config.batch_size {
            return Err(ConfigurationError::InvalidValue(format!(
                "queue_capacity ({}) must be at least batch_size ({})", config.queue_capacity, config.batch_size
            )));
        }
        if config.user_token_source == UserTokenSource::query_param && config.user_token_param.is_empty() {
            return Err(ConfigurationError::InvalidValue(String::from("user_token_param must not be empty")));
        }

        if config.refresh_interval < Self::MIN_REFRESH_INTERVAL {
            warn!("[CONFIG] refresh_interval {}s is below the minimum, using {}s", config.refresh_interval, Self::MIN_REFRESH_INTERVAL);
            config.refresh_interval = Self::MIN_REFRESH_INTERVAL;
        }
        if config.batch_flush_interval < Self::MIN_BATCH_FLUSH_INTERVAL {
            warn!("[CONFIG] batch_flush_interval {}s is below the minimum, using {}s", config.batch_flush_interval, Self::MIN_BATCH_FLUSH_INTERVAL);
            config.batch_flush_interval = Self::MIN_BATCH_FLUSH_INTERVAL;
        }
        if config.request_timeout < Self::MIN_REQUEST_TIMEOUT {
            warn!("[CONFIG] request_timeout {}s is below the minimum, using {}s", config.request_timeout, Self::MIN_REQUEST_TIMEOUT);
            config.request_timeout = Self::MIN_REQUEST_TIMEOUT;
        }

        Ok(config)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval)
    }

    pub fn batch_flush_interval(&self) -> Duration {
        Duration::from_secs(self.batch_flush_interval)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn endpoint(&self, name: &str) -> String {
        format!("{}{}", self.nanami_address, name)
    }
}
