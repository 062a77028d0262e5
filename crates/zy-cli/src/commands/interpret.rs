use std::io::Write;

use colored::Colorize;
use tokio::sync::mpsc;

use zy_core::Hexagram;
use zy_oracle::{InterpretationRequest, OracleConfig, Transcript, stream_interpretation};

pub fn run(reference: &str) -> Result<(), String> {
    let table = super::load_table()?;
    let hexagram = super::find_hexagram(&table, reference)?;
    super::print_hexagram(hexagram);
    println!();
    stream_to_stdout(hexagram)
}

/// Stream an interpretation to stdout, printing fragments as they land.
///
/// The transcript is the gatekeeper: only fragments carrying the current
/// generation reach the terminal, and a failed stream ends in its notice
/// text rather than an error exit.
pub fn stream_to_stdout(hexagram: &Hexagram) -> Result<(), String> {
    let config = OracleConfig::from_env();
    let request = InterpretationRequest::new(hexagram);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("tokio runtime: {e}"))?;

    runtime.block_on(async move {
        let (tx, mut rx) = mpsc::channel(32);
        let mut transcript = Transcript::new();
        let generation = transcript.begin();

        let producer = tokio::spawn(async move {
            stream_interpretation(&config, &request, tx).await;
        });

        println!("  {}", "Interpretation / 解卦".bold());
        println!();

        let mut printed = 0;
        while let Some(event) = rx.recv().await {
            if transcript.apply(generation, &event) {
                let text = transcript.text();
                if text.len() > printed {
                    print!("{}", &text[printed..]);
                    let _ = std::io::stdout().flush();
                    printed = text.len();
                }
            }
        }
        let _ = producer.await;
        println!();

        Ok(())
    })
}
