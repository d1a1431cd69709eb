//! Tipos de erro para o cliente de status de tradução.
//!
//! Define [`ApiError`] com variantes para respostas HTTP não-2xx e falhas
//! de rede. Usa `thiserror` para derivar `Display` e `Error`
//! automaticamente a partir dos atributos `#[error(...)]`.

use thiserror::Error;

/// Falhas possíveis em uma única consulta de status.
///
/// Para o laço de polling todas as variantes são transitórias e contam
/// contra o mesmo orçamento de retentativas:
/// - [`HttpStatus`](ApiError::HttpStatus) — o servidor retornou um código não-2xx
/// - [`Network`](ApiError::Network) — falha na camada de rede ou na decodificação
#[derive(Debug, Error)]
pub enum ApiError {
    /// O servidor respondeu com um código de status diferente de 2xx.
    #[error("status check failed with code {status}")]
    HttpStatus { status: u16 },

    /// Falha de rede subjacente (DNS, conexão recusada, timeout) ou corpo de
    /// resposta inválido. Encapsula o erro original do `reqwest` via `#[from]`.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}
