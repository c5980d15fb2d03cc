use sentigrade_analyzer::ProviderRegistry;
use sentigrade_core::config::Config;
use sentigrade_core::AppResult;
use sentigrade_dataset::LabeledDataset;
use sentigrade_report::write_report_output;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("{}", err.message());
        process::exit(err.exit_code());
    }
}

fn run() -> AppResult<()> {
    let config = Config::load_default()?;
    config.validate()?;

    let dataset = LabeledDataset::from_csv_path(&config.dataset_path)?;
    log::info!(
        "loaded {} labeled samples from {}",
        dataset.len(),
        config.dataset_path.display()
    );

    let registry = ProviderRegistry::from_config(&config.analyzers);
    write_report_output(&config.output_path, &dataset, &registry)?;

    println!(
        "Accuracy reports generated and saved to {}",
        config.output_path.display()
    );
    Ok(())
}
