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

use cumulus_primitives_core::ParaId;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use sp_core::crypto::AccountId32;
use xcm::v4::{Asset, Location, WeightLimit};

use crate::{
	AccountIdentifierCodec, AddressCodec, AssetDescriptor, AssetRegistry, ChainIdentifier, ChainRole, Error,
	MultilocationBuilder, Ss58AddressCodec, StaticAssetRegistry, WeightLimitSelector,
};

const LOG_TARGET: &str = "xcm-requests::transfer";

/// The operation a [`TransferRequest`] was built with. It decides which
/// extrinsic carries the transfer.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Encode, Decode, TypeInfo)]
pub enum TransferKind {
	RelayToPara,
	LimitedRelayToPara,
	ParaToRelay,
	ParaToPara,
}

/// A fully resolved reserve transfer, ready to be assembled into a call of
/// the origin chain.
#[derive(Clone, Eq, PartialEq, Debug, Encode, Decode, TypeInfo)]
pub struct TransferRequest {
	pub kind: TransferKind,
	pub origin: ChainIdentifier,
	pub destination: ChainIdentifier,
	pub beneficiary: AccountId32,
	/// Location of the beneficiary account on the destination chain,
	/// relative to the origin chain.
	pub location: Location,
	pub asset: Asset,
	pub weight_limit: WeightLimit,
}

/// Builds [`TransferRequest`]s for the four supported directions.
///
/// The builder holds no state besides its collaborators and every method
/// only reads them, so it can be shared between threads.
#[derive(Clone, Default, Debug)]
pub struct TransferRequestBuilder<C = Ss58AddressCodec, R = StaticAssetRegistry> {
	accounts: AccountIdentifierCodec<C>,
	registry: R,
}

impl<C, R> TransferRequestBuilder<C, R>
where
	C: AddressCodec,
	R: AssetRegistry,
{
	pub fn new(codec: C, registry: R) -> Self {
		Self {
			accounts: AccountIdentifierCodec::new(codec),
			registry,
		}
	}

	pub fn registry(&self) -> &R {
		&self.registry
	}

	/// Reserve transfer of the relay token to a parachain, without a weight
	/// limit for the remote execution.
	///
	/// # Errors
	///
	/// Fails if the amount is zero or the address cannot be decoded.
	pub fn build_relay_to_para(
		&self,
		dest_para_id: ParaId,
		amount: u128,
		beneficiary_address: &str,
	) -> Result<TransferRequest, Error> {
		self.relay_to_para(
			TransferKind::RelayToPara,
			dest_para_id,
			amount,
			beneficiary_address,
			WeightLimit::Unlimited,
		)
	}

	/// Like [`Self::build_relay_to_para`] with an explicit weight limit, see
	/// [`WeightLimitSelector::select`].
	///
	/// # Errors
	///
	/// Fails if the amount is zero or the address cannot be decoded.
	pub fn build_limited_relay_to_para(
		&self,
		dest_para_id: ParaId,
		amount: u128,
		beneficiary_address: &str,
		weight: u64,
		bounded: bool,
	) -> Result<TransferRequest, Error> {
		self.relay_to_para(
			TransferKind::LimitedRelayToPara,
			dest_para_id,
			amount,
			beneficiary_address,
			WeightLimitSelector::select(weight, bounded),
		)
	}

	/// Transfer `currency_symbol` from a parachain to an account on the
	/// relay chain.
	///
	/// # Errors
	///
	/// Fails if the amount is zero, the address cannot be decoded, the origin
	/// is the relay chain or the currency is not registered on the origin.
	pub fn build_para_to_relay(
		&self,
		origin_chain: ChainIdentifier,
		currency_symbol: &str,
		amount: u128,
		beneficiary_address: &str,
	) -> Result<TransferRequest, Error> {
		self.from_para(
			TransferKind::ParaToRelay,
			origin_chain,
			ChainIdentifier::Relay,
			currency_symbol,
			amount,
			beneficiary_address,
		)
	}

	/// Transfer `currency_symbol` from a parachain to an account on a sibling
	/// parachain.
	///
	/// # Errors
	///
	/// Fails if the amount is zero, the address cannot be decoded, the origin
	/// is the relay chain or `dest_para_id` itself, or the currency is not
	/// registered on the origin.
	pub fn build_para_to_para(
		&self,
		origin_chain: ChainIdentifier,
		dest_para_id: ParaId,
		currency_symbol: &str,
		amount: u128,
		beneficiary_address: &str,
	) -> Result<TransferRequest, Error> {
		self.from_para(
			TransferKind::ParaToPara,
			origin_chain,
			ChainIdentifier::Parachain(dest_para_id),
			currency_symbol,
			amount,
			beneficiary_address,
		)
	}

	fn relay_to_para(
		&self,
		kind: TransferKind,
		dest_para_id: ParaId,
		amount: u128,
		beneficiary_address: &str,
		weight_limit: WeightLimit,
	) -> Result<TransferRequest, Error> {
		ensure_positive(amount)?;
		let destination = ChainIdentifier::Parachain(dest_para_id);
		let beneficiary = self.accounts.encode(beneficiary_address)?;
		let location = MultilocationBuilder::build(ChainRole::Relay, destination, &beneficiary)?;
		let asset = AssetDescriptor::relay_native(ChainRole::Relay, amount);

		log::debug!(target: LOG_TARGET, "Built {:?} transfer of {} to {}", kind, amount, destination);
		Ok(TransferRequest {
			kind,
			origin: ChainIdentifier::Relay,
			destination,
			beneficiary,
			location,
			asset,
			weight_limit,
		})
	}

	fn from_para(
		&self,
		kind: TransferKind,
		origin: ChainIdentifier,
		destination: ChainIdentifier,
		currency_symbol: &str,
		amount: u128,
		beneficiary_address: &str,
	) -> Result<TransferRequest, Error> {
		ensure_positive(amount)?;
		let beneficiary = self.accounts.encode(beneficiary_address)?;
		// Rejects relay chain origins before the asset lookup.
		if origin.role() != ChainRole::Parachain {
			log::error!(target: LOG_TARGET, "{:?} transfers must originate from a parachain", kind);
			return Err(Error::UnsupportedDirection {
				origin: origin.role(),
				destination,
			});
		}
		// Sibling addressing only, a parachain cannot route to itself.
		if destination == origin {
			log::error!(target: LOG_TARGET, "Rejected {:?} transfer from {} to itself", kind, origin);
			return Err(Error::UnsupportedDirection {
				origin: ChainRole::Parachain,
				destination,
			});
		}
		let location = MultilocationBuilder::build(ChainRole::Parachain, destination, &beneficiary)?;
		let asset = AssetDescriptor::resolve(&self.registry, currency_symbol, origin, amount)?;

		log::debug!(
			target: LOG_TARGET,
			"Built {:?} transfer of {} {} from {} to {}",
			kind,
			amount,
			currency_symbol,
			origin,
			destination
		);
		Ok(TransferRequest {
			kind,
			origin,
			destination,
			beneficiary,
			location,
			asset,
			weight_limit: WeightLimit::Unlimited,
		})
	}
}

fn ensure_positive(amount: u128) -> Result<(), Error> {
	if amount == 0 {
		log::error!(target: LOG_TARGET, "Rejected transfer of zero amount");
		return Err(Error::InvalidAmount);
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use hex_literal::hex;
	use sp_weights::Weight;
	use xcm::v4::{AssetId, Fungibility, Junction};

	use super::*;
	use crate::{DecodeError, NetworkConfig};

	const BENEFICIARY: &str = "5GuyiXkd2idYJUD7q6cjMqErrKoC665D8pbmJacjnJErqwoU";
	const BENEFICIARY_ID: [u8; 32] = hex!("d68558dc97ed11b88215d11b2c346109e668de16002c6218fc0b5d572644bb35");
	const BIFROST: u32 = 2001;
	const KARURA: u32 = 2000;

	fn builder() -> TransferRequestBuilder {
		let _ = env_logger::builder().is_test(true).try_init();
		TransferRequestBuilder::new(Ss58AddressCodec::new(), NetworkConfig::local().asset_registry())
	}

	fn account() -> Junction {
		Junction::AccountId32 {
			network: None,
			id: BENEFICIARY_ID,
		}
	}

	#[test]
	fn relay_to_para_is_unlimited() {
		let request = builder()
			.build_relay_to_para(BIFROST.into(), 10_000_000_000_000, BENEFICIARY)
			.expect("Relay to parachain transfer should build.");

		assert_eq!(request.kind, TransferKind::RelayToPara);
		assert_eq!(request.origin, ChainIdentifier::Relay);
		assert_eq!(request.destination, ChainIdentifier::para(BIFROST));
		assert_eq!(request.beneficiary, AccountId32::new(BENEFICIARY_ID));
		assert_eq!(request.location, Location::new(0, [Junction::Parachain(BIFROST), account()]));
		assert_eq!(
			request.asset,
			Asset {
				id: AssetId(Location::here()),
				fun: Fungibility::Fungible(10_000_000_000_000)
			}
		);
		assert_eq!(request.weight_limit, WeightLimit::Unlimited);
	}

	#[test]
	fn limited_relay_to_para_uses_selector() {
		let builder = builder();

		let bounded = builder
			.build_limited_relay_to_para(BIFROST.into(), 9_000_000_000_000, BENEFICIARY, 100_000, true)
			.unwrap();
		let unbounded = builder
			.build_limited_relay_to_para(BIFROST.into(), 9_000_000_000_000, BENEFICIARY, 100_000, false)
			.unwrap();

		assert_eq!(bounded.kind, TransferKind::LimitedRelayToPara);
		assert_eq!(bounded.weight_limit, WeightLimit::Limited(Weight::from_parts(100_000, 0)));
		assert_eq!(unbounded.weight_limit, WeightLimit::Unlimited);
		assert_eq!(bounded.location, unbounded.location);
	}

	#[test]
	fn para_to_relay() {
		let request = builder()
			.build_para_to_relay(ChainIdentifier::para(BIFROST), "KSM", 1_000_000_000_000, BENEFICIARY)
			.expect("Parachain to relay transfer should build.");

		assert_eq!(request.kind, TransferKind::ParaToRelay);
		assert_eq!(request.destination, ChainIdentifier::Relay);
		assert_eq!(request.location, Location::new(1, [account()]));
		assert_eq!(request.asset.id, AssetId(Location::parent()));
		assert_eq!(request.weight_limit, WeightLimit::Unlimited);
	}

	#[test]
	fn para_to_para() {
		let request = builder()
			.build_para_to_para(
				ChainIdentifier::para(BIFROST),
				KARURA.into(),
				"KSM",
				1_000_000_000_000,
				BENEFICIARY,
			)
			.expect("Parachain to parachain transfer should build.");

		assert_eq!(request.kind, TransferKind::ParaToPara);
		assert_eq!(request.origin, ChainIdentifier::para(BIFROST));
		assert_eq!(request.destination, ChainIdentifier::para(KARURA));
		assert_eq!(request.location, Location::new(1, [Junction::Parachain(KARURA), account()]));
		assert_eq!(request.asset.fun, Fungibility::Fungible(1_000_000_000_000));
	}

	#[test]
	fn zero_amount_is_rejected() {
		let builder = builder();

		assert_eq!(
			builder.build_relay_to_para(BIFROST.into(), 0, BENEFICIARY),
			Err(Error::InvalidAmount)
		);
		assert_eq!(
			builder.build_limited_relay_to_para(BIFROST.into(), 0, BENEFICIARY, 0, true),
			Err(Error::InvalidAmount)
		);
		assert_eq!(
			builder.build_para_to_relay(ChainIdentifier::para(BIFROST), "KSM", 0, BENEFICIARY),
			Err(Error::InvalidAmount)
		);
		assert_eq!(
			builder.build_para_to_para(ChainIdentifier::para(BIFROST), KARURA.into(), "KSM", 0, BENEFICIARY),
			Err(Error::InvalidAmount)
		);
	}

	#[test]
	fn any_positive_amount_is_accepted() {
		let builder = builder();

		for amount in [1, 1_000, u128::from(u64::MAX), u128::MAX] {
			assert!(builder.build_relay_to_para(BIFROST.into(), amount, BENEFICIARY).is_ok());
			assert!(builder
				.build_para_to_relay(ChainIdentifier::para(KARURA), "ksm", amount, BENEFICIARY)
				.is_ok());
			assert!(builder
				.build_para_to_para(ChainIdentifier::para(KARURA), BIFROST.into(), "KAR", amount, BENEFICIARY)
				.is_ok());
		}
	}

	#[test]
	fn unknown_currency_is_rejected() {
		assert_eq!(
			builder().build_para_to_relay(ChainIdentifier::para(BIFROST), "KAR", 1, BENEFICIARY),
			Err(Error::UnknownAsset {
				symbol: "KAR".into(),
				origin: ChainIdentifier::para(BIFROST)
			})
		);
	}

	#[test]
	fn relay_origin_is_unsupported_for_para_operations() {
		assert_eq!(
			builder().build_para_to_relay(ChainIdentifier::Relay, "KSM", 1, BENEFICIARY),
			Err(Error::UnsupportedDirection {
				origin: ChainRole::Relay,
				destination: ChainIdentifier::Relay
			})
		);
		assert!(matches!(
			builder().build_para_to_para(ChainIdentifier::Relay, KARURA.into(), "KSM", 1, BENEFICIARY),
			Err(Error::UnsupportedDirection { .. })
		));
	}

	#[test]
	fn para_to_para_rejects_own_chain() {
		assert_eq!(
			builder().build_para_to_para(ChainIdentifier::para(BIFROST), BIFROST.into(), "KSM", 1, BENEFICIARY),
			Err(Error::UnsupportedDirection {
				origin: ChainRole::Parachain,
				destination: ChainIdentifier::para(BIFROST)
			})
		);
		assert!(builder()
			.build_para_to_para(ChainIdentifier::para(BIFROST), KARURA.into(), "KSM", 1, BENEFICIARY)
			.is_ok());
	}

	#[test]
	fn malformed_beneficiary_is_rejected() {
		assert!(matches!(
			builder().build_relay_to_para(BIFROST.into(), 1, "5Guyi"),
			Err(Error::Decode(DecodeError::InvalidSs58(_)))
		));
	}

	#[test]
	fn identical_inputs_build_equal_requests() {
		let builder = builder();

		assert_eq!(
			builder.build_para_to_para(ChainIdentifier::para(BIFROST), KARURA.into(), "KSM", 42, BENEFICIARY),
			builder.build_para_to_para(ChainIdentifier::para(BIFROST), KARURA.into(), "KSM", 42, BENEFICIARY)
		);
		assert_eq!(
			builder.build_limited_relay_to_para(BIFROST.into(), 42, BENEFICIARY, 7, true),
			builder.build_limited_relay_to_para(BIFROST.into(), 42, BENEFICIARY, 7, true)
		);
	}
}
