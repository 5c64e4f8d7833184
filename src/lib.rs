#[allow(non_snake_case)]
pub mod ResponseParser;
#[allow(non_snake_case)]
pub mod Session;
#[allow(non_snake_case)]
pub mod Utils;
pub mod cli;
pub mod settings;
