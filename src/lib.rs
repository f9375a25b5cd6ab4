// Reusable library API: the CLI and the bench runner are thin wrappers around it
pub mod adjacency;
pub mod dictionary;
pub mod errors;
pub mod grid;
pub mod log;
pub mod oracle;
pub mod path_state;
pub mod sink;
pub mod solver;
