use clap::Parser;
use env_logger::Env;
use log::info;
use package_statistics::{decompress, parse, print_summary, Config, Downloader, ErrorKind, Result};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    let config = Config::parse();
    let url = config.contents_url();

    match run(&config, &url) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.kind() {
                ErrorKind::Network(_) => eprint!("{}", e),
                _ => eprint!("Error processing file: {}", e),
            }
            for cause in e.iter().skip(1) {
                eprint!(": {}", cause);
            }
            eprintln!();
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config, url: &str) -> Result<()> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    println!("Downloading {}", url);
    let content = rt.block_on(Downloader::new().download(url))?;

    let text = decompress(&content)?;
    let statistics = parse(&text);
    info!("{} packages found in {}", statistics.len(), url);

    print_summary(&statistics, config.number_of_packages)
}
