mod analysis;
mod common;
mod discovery;
mod loading;
mod pipeline;

use pipeline::PipelineConfig;

fn main() {
    let config = PipelineConfig::default();

    if let Err(error) = pipeline::run(&config) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}
