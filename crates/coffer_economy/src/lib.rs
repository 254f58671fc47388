//! # Coffer Economy
//!
//! Physical money for a game world: item stacks are valued in integer cents
//! and amounts are rendered back as denomination breakdowns.
//!
//! ## Design Principles
//!
//! 1. **Integer cents** - All monetary arithmetic uses checked `u64` cents
//! 2. **Floats only for display** - A display amount is converted exactly once
//! 3. **Build, then freeze** - Denominations are registered on a builder; the
//!    resulting [`Currency`] is immutable and `Send + Sync`
//! 4. **External configuration** - Currency definitions live in TOML files
//!
//! ## Example
//!
//! ```rust,ignore
//! use coffer_economy::{AmountPattern, CurrencySettings};
//!
//! let currency = CurrencySettings::from_toml_file("config/currency.toml")?.build()?;
//! let pattern: AmountPattern = "%.2f %s".parse()?;
//!
//! let worth = currency.value_of_all(&chest_slots)?;
//! println!("{}", currency.format(&pattern, currency.to_display(worth))?);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod cents;
pub mod config;
pub mod currency;
pub mod denomination;
pub mod error;
pub mod item;
pub mod pattern;

pub use cents::Cents;
pub use config::{CurrencySettings, DenominationSettings};
pub use currency::{Breakdown, Currency, CurrencyBuilder};
pub use denomination::{Denomination, DenominationKey};
pub use error::{EconomyError, EconomyResult};
pub use item::{ItemDescriptor, ItemStack};
pub use pattern::AmountPattern;
