use anyhow::{Context, Result};
use background_remover::RemoverConfig;
use std::io::Write;

fn main() -> Result<()> {
    init_logger();

    let config = RemoverConfig::new();
    log::info!(
        "Removing white background: {} -> {}",
        config.input_path.display(),
        config.output_path.display()
    );

    let stats = config
        .run()
        .with_context(|| format!("process {}", config.input_path.display()))?;
    log::debug!("{stats:?}");

    println!("Logo traité avec succès.");

    Ok(())
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
