pub mod cli_args;
pub mod cli_main;
