//! Settings loading and the static product catalog.
//!
//! Settings come from a TOML file (`merchstand.toml` in the working
//! directory, or the path in `MERCHSTAND_CONFIG`) with environment
//! overrides for the secrets that must never live in a file. A missing
//! file is not an error: every field has a usable default, including the
//! built-in two-product catalog.

mod catalog;
mod settings;

pub use catalog::default_catalog;
pub use settings::{
    CHALLENGE_SECRET_ENV, CHECKOUT_PUBLIC_KEY_ENV, CONFIG_ENV, ChallengeSettings,
    CheckoutSettings, RelaySettings, ServerSettings, Settings, SettingsError,
};
