//! Tool configuration, read once from a TOML file and passed to every command.

use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration file '{}' not found", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read configuration: {0}")]
    Io(#[from] io::Error),
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("[email] section is required to send mail")]
    MissingEmailSettings,
    #[error("provider 'custom' requires email.host")]
    MissingHost,
    #[error("schedule.interval_days must be at least 1")]
    ZeroInterval,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub email: Option<EmailSettings>,
    pub files: FilePaths,
    #[serde(default)]
    pub content: Content,
    #[serde(default)]
    pub draft: DraftAddresses,
    #[serde(default)]
    pub schedule: Schedule,
}

/// Mail provider, matched case-insensitively ("Gmail", "gmail", "GMAIL")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Provider {
    Gmail,
    Outlook,
    Custom,
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gmail" => Ok(Provider::Gmail),
            "outlook" => Ok(Provider::Outlook),
            "custom" => Ok(Provider::Custom),
            _ => Err(format!(
                "unsupported provider '{}', expected Gmail, Outlook or Custom",
                s
            )),
        }
    }
}

impl TryFrom<String> for Provider {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// SMTP account used by `send` and `schedule`
#[derive(Debug, Clone, Deserialize)]
pub struct EmailSettings {
    pub provider: Provider,
    pub sender: String,
    pub password: String,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
}

impl EmailSettings {
    /// SMTP host and STARTTLS port for the provider
    pub fn relay(&self) -> Result<(&str, u16), ConfigError> {
        match self.provider {
            Provider::Gmail => Ok(("smtp.gmail.com", 587)),
            Provider::Outlook => Ok(("smtp.office365.com", 587)),
            Provider::Custom => {
                let host = self.host.as_deref().ok_or(ConfigError::MissingHost)?;
                Ok((host, self.port.unwrap_or(587)))
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilePaths {
    pub holidays: PathBuf,
    pub employees: PathBuf,
}

/// Display strings of the email
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Content {
    pub subject_suffix: String,
    pub company_footer: String,
    pub signature: String,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            subject_suffix: "Upcoming Holiday Reminder!".to_string(),
            company_footer: "Your Company Name".to_string(),
            signature: "HR Department".to_string(),
        }
    }
}

/// Placeholder addresses written into draft `.eml` files; the user edits
/// them in their mail client before sending.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DraftAddresses {
    pub from: String,
    pub to: String,
}

impl Default for DraftAddresses {
    fn default() -> Self {
        Self {
            from: "holidays@company.com".to_string(),
            to: "recipients@company.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Schedule {
    pub interval_days: u32,
    pub initial_delay_secs: u64,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            interval_days: 14,
            initial_delay_secs: 2,
        }
    }
}

impl Schedule {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(u64::from(self.interval_days) * 24 * 60 * 60)
    }

    pub fn initial_delay(&self) -> Duration {
        Duration::from_secs(self.initial_delay_secs)
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
            _ => ConfigError::Io(err),
        })?;
        let config = Self::from_toml(&text)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        if config.schedule.interval_days == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(config)
    }

    pub fn email(&self) -> Result<&EmailSettings, ConfigError> {
        self.email.as_ref().ok_or(ConfigError::MissingEmailSettings)
    }

    /// Subject line shared by sent mail and drafts
    pub fn subject(&self) -> String {
        format!("Upcoming Holiday Reminder! - {}", self.content.subject_suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[files]
holidays = "holidays.csv"
employees = "employees.csv"
"#;

    #[test]
    fn minimal_config_uses_defaults() {
        let config = Config::from_toml(MINIMAL).unwrap();
        assert_eq!(config.files.holidays, PathBuf::from("holidays.csv"));
        assert_eq!(config.content.company_footer, "Your Company Name");
        assert_eq!(config.content.signature, "HR Department");
        assert_eq!(config.draft.from, "holidays@company.com");
        assert_eq!(config.schedule.interval(), Duration::from_secs(14 * 86_400));
        assert_eq!(config.schedule.initial_delay(), Duration::from_secs(2));
        assert_eq!(
            config.subject(),
            "Upcoming Holiday Reminder! - Upcoming Holiday Reminder!"
        );
        assert!(matches!(config.email(), Err(ConfigError::MissingEmailSettings)));
    }

    #[test]
    fn full_config() {
        let config = Config::from_toml(
            r#"
[email]
provider = "outlook"
sender = "hr@example.com"
password = "secret"

[files]
holidays = "data/holidays.csv"
employees = "data/employees.csv"

[content]
subject_suffix = "Acme Corp"
company_footer = "Acme Corp"
signature = "People Team"

[schedule]
interval_days = 7
"#,
        )
        .unwrap();

        let email = config.email().unwrap();
        assert_eq!(email.provider, Provider::Outlook);
        assert_eq!(email.relay().unwrap(), ("smtp.office365.com", 587));
        assert_eq!(config.subject(), "Upcoming Holiday Reminder! - Acme Corp");
        assert_eq!(config.content.signature, "People Team");
        assert_eq!(config.schedule.interval_days, 7);
        assert_eq!(config.schedule.initial_delay_secs, 2);
    }

    #[test]
    fn custom_provider_needs_host() {
        let mut settings = EmailSettings {
            provider: Provider::Custom,
            sender: "hr@example.com".to_string(),
            password: "secret".to_string(),
            host: None,
            port: None,
        };
        assert!(matches!(settings.relay(), Err(ConfigError::MissingHost)));

        settings.host = Some("mail.example.com".to_string());
        settings.port = Some(2525);
        assert_eq!(settings.relay().unwrap(), ("mail.example.com", 2525));
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let text = format!(
            "{}\n[email]\nprovider = \"yahoo\"\nsender = \"a@b.com\"\npassword = \"x\"\n",
            MINIMAL
        );
        assert!(matches!(Config::from_toml(&text), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn provider_is_case_insensitive() {
        for (name, expected) in [
            ("Gmail", Provider::Gmail),
            ("OUTLOOK", Provider::Outlook),
            ("Custom", Provider::Custom),
        ] {
            let text = format!(
                "{}\n[email]\nprovider = \"{}\"\nsender = \"a@b.com\"\npassword = \"x\"\n",
                MINIMAL, name
            );
            let config = Config::from_toml(&text).unwrap();
            assert_eq!(config.email().unwrap().provider, expected);
        }
        assert_eq!("gMaIl".parse::<Provider>(), Ok(Provider::Gmail));
    }

    #[test]
    fn zero_interval_is_rejected() {
        let text = format!("{}\n[schedule]\ninterval_days = 0\n", MINIMAL);
        assert!(matches!(
            Config::from_toml(&text),
            Err(ConfigError::ZeroInterval)
        ));
    }

    #[test]
    fn missing_file() {
        let err = Config::load(Path::new("no/such/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }
}
