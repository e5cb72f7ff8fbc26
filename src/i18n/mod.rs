// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded at build time. The UI locale
//! is taken from the command line, then the config file, then the system
//! locale, and falls back to `en-US`.

pub mod fluent;
