//! CLI support: styled terminal output helpers.

pub mod output;
