//! # Muezzin Core Library
//!
//! This library provides the core logic for muezzin, a prayer-times lookup
//! and next-prayer countdown tool. It implements a CLI-first philosophy where
//! all operations are available via a standalone CLI binary built as a thin
//! layer over this library.
//!
//! ## Architecture
//!
//! - **Scheduler**: a pure next-event lookup -- the caller injects the
//!   reference instant, so no wall-clock mocking is needed in tests
//! - **Providers**: HTTP clients for the Nominatim geocoder and the AlAdhan
//!   prayer-time API; astronomical calculation is entirely delegated
//! - **Session**: explicit per-run state (settings, cached geocode, current
//!   day schedule) driven by the caller, no internal threads
//! - **Config**: TOML-based configuration at `~/.config/muezzin/`
//!
//! ## Key Components
//!
//! - [`EventSet`]: one day's named prayer events in one timezone
//! - [`find_next`]: next upcoming event and remaining countdown
//! - [`ProviderClient`]: geocoding and timings lookups
//! - [`Session`]: refresh lifecycle around the providers

pub mod config;
pub mod error;
pub mod event;
pub mod method;
pub mod providers;
pub mod scheduler;
pub mod session;

pub use config::Config;
pub use error::{ConfigError, CoreError, ProviderError, Result, ValidationError};
pub use event::{EventSet, NamedEvent};
pub use method::CalculationMethod;
pub use providers::{DaySchedule, GeocodedLocation, HijriDate, PrayerTimings, ProviderClient};
pub use scheduler::{find_next, Countdown, NextEvent};
pub use session::{Session, Settings};
