pub mod investigation;
pub mod run_context;
