use lazy_static::lazy_static;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::Level;
use tracing_subscriber::{prelude::*, EnvFilter};

// Define categories for different types of operations
#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum OperationCategory {
    LocationSearch { subcategory: LocationSearchType },
    FileIO { subcategory: FileIOType },
    Other,
}

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum LocationSearchType {
    FullSearch,
    SourceFilter,
    Other,
}

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum FileIOType {
    DataLoad,
    ResultsSave,
    Other,
}

impl OperationCategory {
    pub fn as_str(&self) -> String {
        match self {
            OperationCategory::LocationSearch { subcategory } => {
                format!(
                    "Location Search - {}",
                    match subcategory {
                        LocationSearchType::FullSearch => "Full Search",
                        LocationSearchType::SourceFilter => "Source Filter",
                        LocationSearchType::Other => "Other",
                    }
                )
            }
            OperationCategory::FileIO { subcategory } => {
                format!(
                    "File I/O - {}",
                    match subcategory {
                        FileIOType::DataLoad => "Data Load",
                        FileIOType::ResultsSave => "Results Save",
                        FileIOType::Other => "Other",
                    }
                )
            }
            OperationCategory::Other => "Other Operations".to_string(),
        }
    }
}

lazy_static! {
    static ref TIMING_ENABLED: AtomicBool = AtomicBool::new(false);
    static ref FUNCTION_TIMINGS: Arc<RwLock<HashMap<String, (Duration, usize)>>> =
        Arc::new(RwLock::new(HashMap::new()));
    static ref CATEGORY_TIMINGS: Arc<RwLock<HashMap<OperationCategory, (Duration, usize)>>> =
        Arc::new(RwLock::new(HashMap::new()));
}

pub struct TimingGuard {
    function_name: String,
    category: OperationCategory,
    start: Instant,
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        record_timing(&self.function_name, duration, &self.category);
    }
}

pub fn start_timing(function_name: &str, category: OperationCategory) -> TimingGuard {
    TimingGuard {
        function_name: function_name.to_string(),
        category,
        start: Instant::now(),
    }
}

fn record_timing(function_name: &str, duration: Duration, category: &OperationCategory) {
    if !is_timing_enabled() {
        return;
    }

    {
        let mut timings = FUNCTION_TIMINGS.write();
        let entry = timings
            .entry(function_name.to_string())
            .or_insert((Duration::ZERO, 0));
        entry.0 += duration;
        entry.1 += 1;
    }

    {
        let mut timings = CATEGORY_TIMINGS.write();
        let entry = timings
            .entry(category.clone())
            .or_insert((Duration::ZERO, 0));
        entry.0 += duration;
        entry.1 += 1;
    }
}

pub fn init_logging(enable_timing: bool, debug_logging: bool) {
    TIMING_ENABLED.store(enable_timing, Ordering::SeqCst);

    let mut env_filter = EnvFilter::from_default_env().add_directive(Level::INFO.into());
    if debug_logging {
        env_filter = env_filter.add_directive("h2atlas=debug".parse().unwrap());
    }

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer());

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set up tracing subscriber");
}

pub fn is_timing_enabled() -> bool {
    TIMING_ENABLED.load(Ordering::SeqCst)
}

pub fn print_timing_report() {
    if !is_timing_enabled() {
        return;
    }

    println!("\nTiming Report");
    println!("=============");

    println!("\nBy function:");
    let timings = FUNCTION_TIMINGS.read();
    let mut entries: Vec<_> = timings.iter().collect();
    entries.sort_by(|a, b| b.1 .0.cmp(&a.1 .0));
    for (name, (total, count)) in entries {
        let avg = total.div_f64((*count).max(1) as f64);
        println!(
            "{}: total={:.3}ms, count={}, avg={:.3}ms",
            name,
            total.as_secs_f64() * 1000.0,
            count,
            avg.as_secs_f64() * 1000.0,
        );
    }

    println!("\nBy category:");
    let categories = CATEGORY_TIMINGS.read();
    let mut entries: Vec<_> = categories.iter().collect();
    entries.sort_by(|a, b| b.1 .0.cmp(&a.1 .0));
    for (category, (total, count)) in entries {
        println!(
            "{}: total={:.3}ms, count={}",
            category.as_str(),
            total.as_secs_f64() * 1000.0,
            count,
        );
    }
    println!("=============\n");
}
