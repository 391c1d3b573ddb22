//! Installing a validated bundle into a consuming project.
//!
//! A bundle is authored once and copied into a consuming repository's
//! configuration root; from then on it is read-only data. [`install_bundle`]
//! performs that copy and records content digests in a manifest;
//! [`check_install`] tells a maintainer whether the read-only contract has
//! been broken downstream.

mod check;
mod run;

pub use check::{check_install, CheckError, FileCheck, InstallState, InstallStatus};
pub use run::{install_bundle, InstallError, InstallResult};
