//! Build-time timer configuration
//!
//! `timer.toml` is validated by the build script and turned into constants;
//! see build.rs.

include!(concat!(env!("OUT_DIR"), "/timer_config.rs"));
