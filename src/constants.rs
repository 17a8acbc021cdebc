// UI timing constants
pub const INPUT_POLL_MS: u64 = 100;

// Form defaults
pub const DEFAULT_START_BALANCE: i64 = 100;
pub const DEFAULT_WAGER: i64 = 5;
pub const DEFAULT_BET_COUNT: u32 = 100;

// Distribution validation: probabilities are summed and rounded to this many
// decimal places, then compared for equality with 1.00
pub const PROBABILITY_DECIMALS: usize = 2;

// Storage constants
pub const DATA_DIR_NAME: &str = ".betsim";
pub const GRAPHS_DIR_NAME: &str = "graphs";
pub const GRAPH_FILE_EXTENSION: &str = "json";
pub const LOG_FILE_NAME: &str = "betsim.log";
pub const MAX_GRAPH_NAME_LEN: usize = 32;

// Chart constants
pub const CHART_Y_PADDING: f64 = 100.0;
