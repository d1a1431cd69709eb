//! Interface de linha de comando do transwatch baseada em clap.
//!
//! Define a struct [`Cli`] com subcomandos [`Command`] (serve, wait, demo)
//! e flags globais (--max-retries, --verbose).

use std::net::SocketAddr;

use clap::{Parser, Subcommand};

/// transwatch — acompanhamento de jobs de tradução com backoff adaptativo.
#[derive(Debug, Parser)]
#[command(name = "transwatch", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Número máximo de retentativas consecutivas para falhas de transporte.
    #[arg(long, global = true)]
    pub max_retries: Option<u32>,

    /// Habilita saída detalhada (verbose).
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Inicia o servidor de simulação de status.
    Serve {
        /// Endereço e porta para escutar.
        #[arg(long, default_value = "127.0.0.1:8000")]
        addr: SocketAddr,

        /// Tempo até o job poder concluir, em milissegundos.
        #[arg(long)]
        completion_time_ms: Option<u64>,

        /// Probabilidade de o desfecho ser falha, em [0, 1].
        #[arg(long)]
        error_probability: Option<f64>,
    },

    /// Aguarda a conclusão de um job consultando um servidor existente.
    Wait {
        /// URL base do servidor de status (ex.: http://127.0.0.1:8000).
        base_url: String,

        /// Orçamento total de espera, em milissegundos.
        #[arg(long)]
        timeout_ms: Option<u64>,
    },

    /// Executa servidor e cliente no mesmo processo, em porta efêmera.
    Demo,
}
