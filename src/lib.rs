pub mod config;
pub mod punchout;
