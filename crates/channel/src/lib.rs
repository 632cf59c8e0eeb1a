#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Bridge channel contracts for droidmgr
//!
//! This crate defines the two seams between the package-management core
//! and the device bridge: a command channel that runs a shell-style
//! command and streams its text output, and a sync channel that moves
//! file contents to the device. Both are trait contracts; concrete
//! transports live with the bridge implementation and are injected at
//! construction time.
//!
//! It also provides the line-oriented output consumers the core hands to
//! the command channel. Each consumer owns the accumulation state for one
//! operation and exposes a typed accessor once the channel call returns.

mod cancel;
mod command;
pub mod consumer;
mod sync;

pub use cancel::CancelSignal;
pub use command::CommandChannel;
pub use consumer::{InstallOutcomeConsumer, LineConsumer, PackageListConsumer, VersionInfoConsumer};
pub use sync::{SyncChannel, SyncChannelFactory, TransferProgress};
