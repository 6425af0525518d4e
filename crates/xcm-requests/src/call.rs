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

//! # Call Assembly Module
//!
//! Encodes requests into the runtime calls of the chain that dispatches
//! them. A runtime call is the pallet index followed by the pallet call,
//! whose first byte is the call index. Pallet indices differ between
//! runtimes and are taken from the [`NetworkConfig`]; call indices are fixed
//! by the pallets and encoded below.

use core::fmt;

use cumulus_primitives_core::ParaId;
use parity_scale_codec::{Decode, Encode, Output};
use scale_info::TypeInfo;
use xcm::{
	v4::{Assets, WeightLimit},
	VersionedAsset, VersionedAssets, VersionedLocation,
};

use crate::{
	ChainIdentifier, ChannelRequest, Error, MultilocationBuilder, NetworkConfig, TransferKind, TransferRequest,
	UnknownChain,
};

const LOG_TARGET: &str = "xcm-requests::call";

/// A pallet call prefixed with the index of the pallet in the runtime.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug, TypeInfo)]
pub struct PalletCall<C> {
	pub pallet_index: u8,
	pub call: C,
}

/// `pallet-xcm`, named `XcmPallet` in relay chain runtimes.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug, TypeInfo)]
pub enum XcmPalletCall {
	#[codec(index = 2)]
	ReserveTransferAssets {
		dest: Box<VersionedLocation>,
		beneficiary: Box<VersionedLocation>,
		assets: Box<VersionedAssets>,
		fee_asset_item: u32,
	},
	#[codec(index = 8)]
	LimitedReserveTransferAssets {
		dest: Box<VersionedLocation>,
		beneficiary: Box<VersionedLocation>,
		assets: Box<VersionedAssets>,
		fee_asset_item: u32,
		weight_limit: WeightLimit,
	},
}

/// `orml-xtokens`, used by parachains to send their registered currencies.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug, TypeInfo)]
pub enum XTokensCall {
	#[codec(index = 1)]
	TransferMultiasset {
		asset: Box<VersionedAsset>,
		dest: Box<VersionedLocation>,
		dest_weight_limit: WeightLimit,
	},
}

#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug, TypeInfo)]
pub enum ParasSudoWrapperCall {
	#[codec(index = 5)]
	SudoEstablishHrmpChannel {
		sender: ParaId,
		recipient: ParaId,
		max_capacity: u32,
		max_message_size: u32,
	},
}

#[derive(Encode, Decode, Clone, PartialEq, Eq, Debug, TypeInfo)]
pub enum HrmpCall {
	#[codec(index = 3)]
	ForceCleanHrmp {
		para: ParaId,
		num_inbound: u32,
		num_outbound: u32,
	},
}

#[derive(Encode, Clone, PartialEq, Eq, Debug)]
pub enum SudoCall {
	#[codec(index = 0)]
	Sudo { call: Box<EncodedCall> },
}

/// An already encoded runtime call. It encodes to its raw bytes, without a
/// length prefix, so it can be nested into other calls.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct EncodedCall(Vec<u8>);

impl EncodedCall {
	pub fn new(call: &impl Encode) -> Self {
		Self(call.encode())
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	pub fn into_inner(self) -> Vec<u8> {
		self.0
	}

	pub fn pallet_index(&self) -> Option<u8> {
		self.0.first().copied()
	}

	pub fn call_index(&self) -> Option<u8> {
		self.0.get(1).copied()
	}
}

impl Encode for EncodedCall {
	fn size_hint(&self) -> usize {
		self.0.len()
	}

	fn encode_to<T: Output + ?Sized>(&self, dest: &mut T) {
		dest.write(&self.0)
	}
}

impl fmt::Display for EncodedCall {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "0x{}", hex::encode(&self.0))
	}
}

/// The origin a call has to be dispatched with.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DispatchOrigin {
	/// Signed by the submitting account.
	Signed,
	/// Root. The submitter wraps the call with [`wrap_in_sudo`].
	Root,
}

/// An assembled call, ready for signing and submission on `chain`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CallPayload {
	pub chain: ChainIdentifier,
	pub origin: DispatchOrigin,
	pub call: EncodedCall,
}

/// Wrap `call` into `Sudo::sudo` so that it is dispatched with a root origin.
pub fn wrap_in_sudo(call: &EncodedCall, sudo_pallet_index: u8) -> EncodedCall {
	EncodedCall::new(&PalletCall {
		pallet_index: sudo_pallet_index,
		call: SudoCall::Sudo {
			call: Box::new(call.clone()),
		},
	})
}

impl TransferRequest {
	/// Assemble the call that performs this transfer on the origin chain.
	///
	/// # Errors
	///
	/// Returns [`Error::UnknownChain`] if the origin parachain is not part of
	/// `config`.
	pub fn to_payload(&self, config: &NetworkConfig) -> Result<CallPayload, Error> {
		let call = match self.kind {
			TransferKind::RelayToPara | TransferKind::LimitedRelayToPara => {
				let (dest, beneficiary) = MultilocationBuilder::split_beneficiary(self.location.clone());
				let dest = Box::new(VersionedLocation::V4(dest));
				let beneficiary = Box::new(VersionedLocation::V4(beneficiary));
				let assets = Box::new(VersionedAssets::V4(Assets::from(self.asset.clone())));
				let call = match self.kind {
					TransferKind::RelayToPara => XcmPalletCall::ReserveTransferAssets {
						dest,
						beneficiary,
						assets,
						fee_asset_item: 0,
					},
					_ => XcmPalletCall::LimitedReserveTransferAssets {
						dest,
						beneficiary,
						assets,
						fee_asset_item: 0,
						weight_limit: self.weight_limit.clone(),
					},
				};
				EncodedCall::new(&PalletCall {
					pallet_index: config.relay.pallets.xcm_pallet,
					call,
				})
			}
			TransferKind::ParaToRelay | TransferKind::ParaToPara => {
				let parachain = self
					.origin
					.para_id()
					.and_then(|id| config.parachain(id))
					.ok_or(UnknownChain::Id(self.origin))?;
				EncodedCall::new(&PalletCall {
					pallet_index: parachain.xtokens_pallet_index,
					call: XTokensCall::TransferMultiasset {
						asset: Box::new(VersionedAsset::V4(self.asset.clone())),
						dest: Box::new(VersionedLocation::V4(self.location.clone())),
						dest_weight_limit: self.weight_limit.clone(),
					},
				})
			}
		};
		log::debug!(target: LOG_TARGET, "Assembled {:?} call on {}: {}", self.kind, self.origin, call);
		Ok(CallPayload {
			chain: self.origin,
			origin: DispatchOrigin::Signed,
			call,
		})
	}
}

impl ChannelRequest {
	/// Assemble the relay chain call that performs this channel operation.
	/// The payload requires a root origin.
	pub fn to_payload(&self, config: &NetworkConfig) -> CallPayload {
		let pallets = &config.relay.pallets;
		let call = match self {
			Self::Open {
				sender,
				recipient,
				max_capacity,
				max_message_size,
			} => EncodedCall::new(&PalletCall {
				pallet_index: pallets.paras_sudo_wrapper,
				call: ParasSudoWrapperCall::SudoEstablishHrmpChannel {
					sender: *sender,
					recipient: *recipient,
					max_capacity: *max_capacity,
					max_message_size: *max_message_size,
				},
			}),
			Self::Close { para, inbound, outbound } => EncodedCall::new(&PalletCall {
				pallet_index: pallets.hrmp,
				call: HrmpCall::ForceCleanHrmp {
					para: *para,
					num_inbound: *inbound,
					num_outbound: *outbound,
				},
			}),
		};
		log::debug!(target: LOG_TARGET, "Assembled channel call: {}", call);
		CallPayload {
			chain: ChainIdentifier::Relay,
			origin: DispatchOrigin::Root,
			call,
		}
	}
}
