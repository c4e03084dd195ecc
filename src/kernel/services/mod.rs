//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types shared with the host (traits, config, settings).
//! - `adapters`: OS specific implementations (IO).

pub mod adapters;
pub mod ports;
