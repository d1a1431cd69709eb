//! Interface de terminal do transwatch — spinner e saída colorida.
//!
//! Usa as crates `indicatif` para o spinner de progresso e `console` para
//! estilização com cores. O [`WaitProgress`] acompanha visualmente o
//! polling de um job no terminal.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::StatusResponse;
use crate::error::TranslationError;

/// Indicador visual de progresso para a espera de um job no terminal.
///
/// Exibe um spinner animado com o percentual corrente durante o polling e
/// mensagens coloridas para sucesso (verde) e falha (vermelho).
#[derive(Clone)]
pub struct WaitProgress {
    // Spinner do indicatif.
    pb: ProgressBar,
    // Estilo verde para mensagens de sucesso.
    green: Style,
    // Estilo vermelho para mensagens de falha.
    red: Style,
}

impl WaitProgress {
    /// Inicia o spinner e retorna a instância de progresso.
    pub fn start() -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("invalid template"),
        );
        pb.set_message("pending");
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        Self {
            pb,
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
        }
    }

    /// Atualiza a mensagem do spinner com o status observado.
    pub fn observe(&self, status: &StatusResponse) {
        match status.progress {
            Some(progress) => self
                .pb
                .set_message(format!("{}: {progress:.1}%", status.result)),
            None => self.pb.set_message(status.result.to_string()),
        }
    }

    /// Finaliza o spinner e exibe o resultado final da espera.
    ///
    /// Sucesso é mostrado em verde com checkmark; falha em vermelho com X.
    pub fn complete(&self, result: &Result<StatusResponse, TranslationError>) {
        self.pb.finish_and_clear();
        match result {
            Ok(_) => {
                println!("  {} Translation completed", self.green.apply_to("✓"));
            }
            Err(err) => {
                println!("  {} Translation failed: {err}", self.red.apply_to("✗"));
            }
        }
    }
}
