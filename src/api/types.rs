//! Tipos de dados para a resposta do endpoint de status de tradução.
//!
//! Todas as structs derivam `Serialize` e `Deserialize` para conversão JSON
//! conforme o formato do endpoint `/status` do servidor de simulação.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Estado corrente de um job de tradução.
///
/// Serializado em minúsculas no JSON (`"pending"`, `"completed"`, `"error"`).
/// `Completed` e `Error` são terminais: o polling para ao observá-los.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// O job ainda está em processamento.
    Pending,
    /// O job terminou com sucesso.
    Completed,
    /// O job terminou com falha.
    Error,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Pending => write!(f, "pending"),
            JobStatus::Completed => write!(f, "completed"),
            JobStatus::Error => write!(f, "error"),
        }
    }
}

/// Resposta retornada pelo endpoint `/status`.
///
/// `progress` está presente apenas enquanto `result` é `pending`, fica no
/// intervalo [0, 99] e é arredondado para uma casa decimal. O campo é
/// omitido do JSON quando ausente.
///
/// Cada resposta é um snapshot construído na hora da consulta; nunca é
/// mutada ou compartilhada depois de retornada.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Estado corrente do job.
    pub result: JobStatus,
    /// Percentual de progresso, presente apenas para `pending`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
}

impl StatusResponse {
    /// Resposta pendente com o percentual informado.
    pub fn pending(progress: f64) -> Self {
        Self {
            result: JobStatus::Pending,
            progress: Some(progress),
        }
    }

    /// Resposta terminal de sucesso.
    pub fn completed() -> Self {
        Self {
            result: JobStatus::Completed,
            progress: None,
        }
    }

    /// Resposta terminal de falha.
    pub fn error() -> Self {
        Self {
            result: JobStatus::Error,
            progress: None,
        }
    }
}
