use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port", deserialize_with = "lenient_port")]
    pub port: u16,

    pub db_host: String,

    #[serde(default = "default_db_port")]
    pub db_port: u16,

    pub db_user: String,

    pub db_password: String,

    pub db_name: String,

    // CA certificate for the database connection, as inline base64 PEM
    pub ca_cert: Option<String>,

    // Alternative to CA_CERT: path to a PEM file on disk
    pub ca_cert_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Config>()
    }

    /// CA certificate material for the database TLS handshake, if configured.
    /// Inline base64 material takes precedence over a file path.
    pub fn ca_pem(&self) -> anyhow::Result<Option<Vec<u8>>> {
        use base64::{engine::general_purpose::STANDARD, Engine};

        if let Some(encoded) = &self.ca_cert {
            let pem = STANDARD
                .decode(encoded.trim())
                .map_err(|e| anyhow::anyhow!("CA_CERT is not valid base64: {e}"))?;
            return Ok(Some(pem));
        }

        if let Some(path) = &self.ca_cert_path {
            let pem = std::fs::read(path)
                .map_err(|e| anyhow::anyhow!("failed to read CA_CERT_PATH {path}: {e}"))?;
            return Ok(Some(pem));
        }

        Ok(None)
    }
}

fn default_port() -> u16 {
    3000
}

fn default_db_port() -> u16 {
    3306
}

// PORT falls back to the default when unset or unparsable, matching the
// original deployment contract rather than failing startup.
fn lenient_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_else(default_port))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_vars() -> Vec<(String, String)> {
        vec![
            ("DB_HOST".into(), "localhost".into()),
            ("DB_USER".into(), "app".into()),
            ("DB_PASSWORD".into(), "secret".into()),
            ("DB_NAME".into(), "schools".into()),
        ]
    }

    #[test]
    fn test_defaults_applied() {
        let config: Config = envy::from_iter(base_vars()).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.db_port, 3306);
        assert!(config.ca_cert.is_none());
        assert!(config.ca_cert_path.is_none());
    }

    #[test]
    fn test_explicit_port() {
        let mut vars = base_vars();
        vars.push(("PORT".into(), "8080".into()));
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_unparsable_port_falls_back() {
        let mut vars = base_vars();
        vars.push(("PORT".into(), "not-a-port".into()));
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_missing_db_host_is_an_error() {
        let vars = base_vars()
            .into_iter()
            .filter(|(k, _)| k != "DB_HOST")
            .collect::<Vec<_>>();
        assert!(envy::from_iter::<_, Config>(vars).is_err());
    }

    #[test]
    fn test_inline_ca_cert_decoded() {
        use base64::{engine::general_purpose::STANDARD, Engine};

        let pem = b"-----BEGIN CERTIFICATE-----\nabc\n-----END CERTIFICATE-----\n";
        let mut vars = base_vars();
        vars.push(("CA_CERT".into(), STANDARD.encode(pem)));

        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.ca_pem().unwrap(), Some(pem.to_vec()));
    }

    #[test]
    fn test_invalid_ca_cert_rejected() {
        let mut vars = base_vars();
        vars.push(("CA_CERT".into(), "%%not base64%%".into()));
        let config: Config = envy::from_iter(vars).unwrap();
        assert!(config.ca_pem().is_err());
    }

    #[test]
    fn test_no_ca_material_is_none() {
        let config: Config = envy::from_iter(base_vars()).unwrap();
        assert_eq!(config.ca_pem().unwrap(), None);
    }
}
