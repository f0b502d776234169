/// Operating mode of the service. Only non-production modes expose send diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn parse(value: &str) -> anyhow::Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" => Ok(Self::Development),
            other => anyhow::bail!("APP_ENV must be 'production' or 'development', got '{}'", other),
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub app_env: AppEnvironment,
    /// Absent key means the mail capability is not configured; checked per request.
    pub resend_api_key: Option<String>,
    /// Absent sender is reported per request, naming the variable.
    pub resend_from_email: Option<String>,
    pub resend_base_url: String,
    pub contact_to_email: String,
    pub email_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub content_path: String,
    pub content_cache_ttl_secs: u64,
}

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_RESEND_BASE_URL: &str = "https://api.resend.com";
pub const DEFAULT_EMAIL_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_CONTENT_PATH: &str = "content/site.json";
pub const DEFAULT_CONTENT_CACHE_TTL_SECS: u64 = 60;

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn secs_var(name: &str, default: u64) -> anyhow::Result<u64> {
    match optional_var(name) {
        None => Ok(default),
        Some(raw) => raw
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| anyhow::anyhow!("{} must be a positive number of seconds", name)),
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            app_env: match optional_var("APP_ENV") {
                Some(raw) => AppEnvironment::parse(&raw)?,
                None => AppEnvironment::Production,
            },
            resend_api_key: optional_var("RESEND_API_KEY"),
            resend_from_email: optional_var("RESEND_FROM_EMAIL"),
            resend_base_url: validate_base_url(
                "RESEND_BASE_URL",
                optional_var("RESEND_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_RESEND_BASE_URL.to_string()),
            )?,
            contact_to_email: std::env::var("CONTACT_FORM_TO_EMAIL")
                .map_err(|_| anyhow::anyhow!("CONTACT_FORM_TO_EMAIL environment variable required"))
                .and_then(|email| {
                    if email.trim().is_empty() {
                        anyhow::bail!("CONTACT_FORM_TO_EMAIL cannot be empty");
                    }
                    Ok(email.trim().to_string())
                })?,
            email_timeout_secs: secs_var("EMAIL_TIMEOUT_SECS", DEFAULT_EMAIL_TIMEOUT_SECS)?,
            request_timeout_secs: secs_var("REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
            content_path: optional_var("CONTENT_PATH")
                .unwrap_or_else(|| DEFAULT_CONTENT_PATH.to_string()),
            content_cache_ttl_secs: secs_var(
                "CONTENT_CACHE_TTL_SECS",
                DEFAULT_CONTENT_CACHE_TTL_SECS,
            )?,
        };

        // Log presence only, never the secret values
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Environment: {:?}", config.app_env);
        tracing::debug!("Resend API key configured: {}", config.resend_api_key.is_some());
        match config.resend_from_email {
            Some(ref sender) => tracing::debug!("Sender address: {}", sender),
            None => tracing::warn!("RESEND_FROM_EMAIL is not set; contact submissions will fail"),
        }
        tracing::debug!("Resend Base URL: {}", config.resend_base_url);
        tracing::debug!("Content path: {}", config.content_path);
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }
}

fn validate_base_url(name: &str, url: String) -> anyhow::Result<String> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("{} must start with http:// or https://", name);
    }
    url::Url::parse(&url).map_err(|e| anyhow::anyhow!("{} is not a valid URL: {}", name, e))?;
    Ok(url.trim_end_matches('/').to_string())
}
