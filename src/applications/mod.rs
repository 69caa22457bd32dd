pub mod arbitrage;
pub mod cpm;

pub use arbitrage::{find_arbitrage, parse_rates, ArbitrageCycle, Trade};
pub use cpm::{parse_jobs, schedule, Job, Schedule};
