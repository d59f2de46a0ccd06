use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(short = 'd', long, default_value = "data/global_hydrogen_infrastructure.json")]
    data: String,

    #[arg(long, default_value_t = false, help = "Run the HTTP API instead of a one-shot search")]
    serve: bool,

    #[arg(short = 'p', long, default_value_t = 5000)]
    port: u16,

    #[arg(short = 't', long, default_value = "electrolysis")]
    technology: String,

    #[arg(long, default_value_t = 0.0)]
    min_capacity: f64,

    #[arg(long, default_value_t = 100.0, help = "Max distance to the renewable source in km; values <= 1 disable the limit")]
    max_distance: f64,

    #[arg(long, default_value_t = 10.0, help = "Demand proximity floor; values <= 1 disable the floor")]
    min_demand_proximity: f64,

    #[arg(long, default_value_t = 10_000_000.0)]
    budget: f64,

    #[arg(short = 'r', long, default_value = "global")]
    region: String,

    #[arg(long, help = "Random seed for deterministic sample data")]
    seed: Option<u64>,

    #[arg(long, default_value_t = false)]
    enable_timing: bool,

    #[arg(long, default_value_t = false)]
    debug_logging: bool,

    #[arg(long, default_value_t = false)]
    export_csv: bool,

    #[arg(short = 'o', long, default_value = "results")]
    output_dir: String,
}

// Add getter methods for all fields
impl Args {
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn serve(&self) -> bool {
        self.serve
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn technology(&self) -> &str {
        &self.technology
    }

    pub fn min_capacity(&self) -> f64 {
        self.min_capacity
    }

    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    pub fn min_demand_proximity(&self) -> f64 {
        self.min_demand_proximity
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn enable_timing(&self) -> bool {
        self.enable_timing
    }

    pub fn debug_logging(&self) -> bool {
        self.debug_logging
    }

    pub fn export_csv(&self) -> bool {
        self.export_csv
    }

    pub fn output_dir(&self) -> &str {
        &self.output_dir
    }
}
