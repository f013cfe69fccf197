//! Resource SDKs for the accounts API.

pub mod google;

pub use google::{GoogleAccount, GoogleAccounts, GoogleSdk};
