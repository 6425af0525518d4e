// KILT Blockchain – <https://kilt.io>
// Copyright (C) 2025, KILT Foundation

// The KILT Blockchain is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The KILT Blockchain is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

// If you feel like getting in touch with us, you can do so at <hello@kilt.io>

//! Library to build XCM reserve transfers and HRMP channel management calls
//! for a relay chain and the parachains connected to it.
//!
//! A request is first built as a plain value ([`TransferRequest`] or
//! [`ChannelRequest`]), then assembled into the SCALE-encoded runtime call of
//! the origin chain ([`CallPayload`]) and finally handed to a
//! [`SubmissionGateway`] which signs, submits and tracks it.

#![warn(clippy::as_conversions)]
#![warn(clippy::missing_errors_doc)]
#![warn(clippy::arithmetic_side_effects)]

pub mod account;
pub mod asset;
pub mod call;
pub mod channel;
pub mod config;
pub mod location;
pub mod submission;
pub mod transfer;
pub mod weight;

mod errors;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export relevant types
pub use account::{AccountIdentifierCodec, AddressCodec, HexAddressCodec, Ss58AddressCodec};
pub use asset::{AssetDescriptor, AssetRegistry, StaticAssetRegistry};
pub use call::{CallPayload, DispatchOrigin, EncodedCall};
pub use channel::{ChannelRequest, ChannelRequestBuilder};
pub use config::{AssetConfig, AssetLocation, NetworkConfig, ParachainConfig, RelayConfig, RelayPallets};
pub use errors::*;
pub use location::{ChainIdentifier, ChainRole, MultilocationBuilder};
pub use submission::{
	wait_for_outcome, DispatchOutcome, ModuleError, StatusStream, Submission, SubmissionGateway, SubmissionStatus,
	TrackedOutcome,
};
pub use transfer::{TransferKind, TransferRequest, TransferRequestBuilder};
pub use weight::WeightLimitSelector;

pub use cumulus_primitives_core::ParaId;
pub use sp_core::crypto::AccountId32;
