//! Configuration validation utilities

use crate::schema::Config;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate complete configuration
    pub fn validate(config: &Config) -> ValidationReport {
        let mut report = ValidationReport::new();

        Self::validate_relay(config, &mut report);
        Self::validate_fees(config, &mut report);
        Self::validate_signer(config, &mut report);
        Self::validate_logging(config, &mut report);

        report
    }

    fn validate_relay(config: &Config, report: &mut ValidationReport) {
        let relay = &config.relay;

        if relay.name.is_empty() {
            report.add_error("relay.name", "Relay name cannot be empty");
        }

        for (field, url) in [
            ("relay.relay_url", &relay.relay_url),
            ("relay.blocks_api_url", &relay.blocks_api_url),
        ] {
            if url.is_empty() {
                report.add_error(field, "URL cannot be empty");
            } else if !url.starts_with("http://") && !url.starts_with("https://") {
                report.add_error(field, &format!("Invalid URL format: {}", url));
            } else if !url.starts_with("https://") {
                report.add_warning(field, "URL should use HTTPS");
            }
        }

        if relay.timeout_seconds == 0 {
            report.add_error("relay.timeout_seconds", "Timeout must be greater than 0");
        } else if relay.timeout_seconds > 300 {
            report.add_warning(
                "relay.timeout_seconds",
                &format!("Timeout is very high ({}s)", relay.timeout_seconds),
            );
        }

        // must be usable as an HTTP header value
        let user_agent = &relay.user_agent;
        if user_agent.trim().is_empty() {
            report.add_error("relay.user_agent", "User agent cannot be empty");
        } else if !user_agent.chars().all(|c| c == ' ' || c.is_ascii_graphic()) {
            report.add_error("relay.user_agent", "User agent must be printable ASCII");
        }
    }

    fn validate_fees(config: &Config, report: &mut ValidationReport) {
        if config.fees.max_change_denominator == 0 {
            report.add_error("fees.max_change_denominator", "Max change denominator cannot be 0");
        } else if config.fees.max_change_denominator != pricing::BASE_FEE_MAX_CHANGE_DENOMINATOR {
            report.add_warning(
                "fees.max_change_denominator",
                "Max change denominator differs from the Ethereum mainnet value of 8",
            );
        }

        if config.fees.blocks_in_future > 25 {
            report.add_warning(
                "fees.blocks_in_future",
                "Projecting far ahead grows the worst-case base fee exponentially",
            );
        }
    }

    fn validate_signer(config: &Config, report: &mut ValidationReport) {
        if config.signer.private_key.is_none() {
            report.add_warning(
                "signer.private_key",
                "No auth key configured, only unauthenticated calls are available",
            );
        } else if let Err(e) = config.signer.auth_signer() {
            report.add_error("signer.private_key", &e.to_string());
        }
    }

    fn validate_logging(config: &Config, report: &mut ValidationReport) {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&config.logging.level.as_str()) {
            report.add_error(
                "logging.level",
                &format!(
                    "Invalid log level: {}. Valid levels: {:?}",
                    config.logging.level, valid_levels
                ),
            );
        }

        let valid_formats = ["json", "pretty"];
        if !valid_formats.contains(&config.logging.format.as_str()) {
            report.add_error(
                "logging.format",
                &format!(
                    "Invalid log format: {}. Valid formats: {:?}",
                    config.logging.format, valid_formats
                ),
            );
        }
    }
}

/// Validation report containing errors and warnings
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

/// A validation issue (error or warning)
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.errors.push(ValidationIssue {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn add_warning(&mut self, field: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn summary(&self) -> String {
        format!("Validation: {} errors, {} warnings", self.errors.len(), self.warnings.len())
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}
