//! Configuração do transwatch carregada a partir de `transwatch.toml`.
//!
//! A struct [`TranswatchConfig`] contém todos os parâmetros configuráveis.
//! Valores não presentes no arquivo usam defaults sensíveis, os mesmos
//! embutidos em [`ClientConfig`](crate::poller::ClientConfig).

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::poller::ClientConfig;

/// Configuração de nível superior carregada de `transwatch.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct TranswatchConfig {
    /// Atraso inicial entre consultas de status, em milissegundos.
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,

    /// Atraso máximo entre consultas, em milissegundos.
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,

    /// Fator de crescimento do atraso após cada consulta pendente.
    #[serde(default = "default_backoff_factor")]
    pub backoff_factor: f64,

    /// Máximo de retentativas consecutivas para falhas de transporte.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Orçamento total de espera, em milissegundos.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Habilita jitter aleatório nos atrasos.
    #[serde(default = "default_jitter")]
    pub jitter: bool,

    /// Tempo simulado até o job poder concluir, em milissegundos (servidor).
    #[serde(default = "default_completion_time_ms")]
    pub completion_time_ms: u64,

    /// Probabilidade de o desfecho do job ser falha, em [0, 1] (servidor).
    #[serde(default = "default_error_probability")]
    pub error_probability: f64,
}

// Valor padrão para o atraso inicial: 1000ms.
fn default_initial_delay_ms() -> u64 {
    1_000
}

// Valor padrão para o atraso máximo: 30000ms.
fn default_max_delay_ms() -> u64 {
    30_000
}

// Valor padrão para o fator de backoff: 1.5.
fn default_backoff_factor() -> f64 {
    1.5
}

// Valor padrão para retentativas máximas: 3.
fn default_max_retries() -> u32 {
    3
}

// Valor padrão para o orçamento de espera: 300000ms.
fn default_timeout_ms() -> u64 {
    300_000
}

// Jitter habilitado por padrão.
fn default_jitter() -> bool {
    true
}

// Valor padrão para o tempo de conclusão simulado: 10000ms.
fn default_completion_time_ms() -> u64 {
    10_000
}

// Valor padrão para a probabilidade de falha: 0.1.
fn default_error_probability() -> f64 {
    0.1
}

impl Default for TranswatchConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: default_initial_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            backoff_factor: default_backoff_factor(),
            max_retries: default_max_retries(),
            timeout_ms: default_timeout_ms(),
            jitter: default_jitter(),
            completion_time_ms: default_completion_time_ms(),
            error_probability: default_error_probability(),
        }
    }
}

impl TranswatchConfig {
    /// Carrega a configuração de `transwatch.toml` no diretório atual.
    /// Usa valores padrão se o arquivo não existir.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("transwatch.toml"))
    }

    /// Carrega a configuração do caminho informado.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Converte os campos de cliente em um [`ClientConfig`].
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            initial_delay: Duration::from_millis(self.initial_delay_ms),
            max_delay: Duration::from_millis(self.max_delay_ms),
            backoff_factor: self.backoff_factor,
            max_retries: self.max_retries,
            timeout: Duration::from_millis(self.timeout_ms),
            jitter: self.jitter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let config = TranswatchConfig::default();
        assert_eq!(config.initial_delay_ms, 1_000);
        assert_eq!(config.max_delay_ms, 30_000);
        assert_eq!(config.backoff_factor, 1.5);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.timeout_ms, 300_000);
        assert!(config.jitter);
        assert_eq!(config.completion_time_ms, 10_000);
        assert_eq!(config.error_probability, 0.1);
    }

    #[test]
    fn deserialize_partial_toml() {
        let toml_str = r#"
            max_retries = 5
            jitter = false
        "#;
        let config: TranswatchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.max_retries, 5);
        assert!(!config.jitter);
        assert_eq!(config.initial_delay_ms, 1_000);
        assert_eq!(config.timeout_ms, 300_000);
    }

    #[test]
    fn load_from_reads_a_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "initial_delay_ms = 250\ncompletion_time_ms = 2000").unwrap();

        let config = TranswatchConfig::load_from(file.path()).unwrap();
        assert_eq!(config.initial_delay_ms, 250);
        assert_eq!(config.completion_time_ms, 2_000);
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn load_from_missing_file_falls_back_to_defaults() {
        let config = TranswatchConfig::load_from(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn client_config_converts_milliseconds() {
        let config = TranswatchConfig {
            initial_delay_ms: 500,
            timeout_ms: 60_000,
            ..Default::default()
        };
        let client = config.client_config();
        assert_eq!(client.initial_delay, Duration::from_millis(500));
        assert_eq!(client.timeout, Duration::from_secs(60));
        assert_eq!(client.backoff_factor, 1.5);
        assert!(client.jitter);
    }
}
