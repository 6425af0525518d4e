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
use hex_literal::hex;
use parity_scale_codec::Decode;
use sp_core::H256;
use xcm::{
	v4::{Asset, AssetId, Fungibility, Junction, Location, WeightLimit},
	VersionedAsset, VersionedAssets, VersionedLocation,
};
use xcm_requests::{
	call::{PalletCall, XTokensCall, XcmPalletCall},
	mock::MockGateway,
	ChainIdentifier, ChainRole, DispatchOrigin, DispatchOutcome, Error, ModuleError, NetworkConfig, SubmissionStatus,
	TrackedOutcome, WeightLimitSelector,
};

use crate::mock::network::{MockNetwork, ALICE, BIFROST, BOB, KARURA, UNIT};

const ALICE_ID: [u8; 32] = hex!("d43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d");
const BOB_ID: [u8; 32] = hex!("8eaf04151687736326c9fea17e25fc5287613693c912909cb226aa4794f26a48");

fn account(id: [u8; 32]) -> Junction {
	Junction::AccountId32 { network: None, id }
}

fn relay_token(amount: u128) -> Asset {
	Asset {
		id: AssetId(Location::parent()),
		fun: Fungibility::Fungible(amount),
	}
}

#[test]
fn test_reserve_transfer_from_relay_to_bifrost() {
	let network = MockNetwork::new();

	let request = network
		.builder
		.build_relay_to_para(BIFROST.into(), 10 * UNIT, ALICE)
		.expect("Request should be valid.");
	let payload = request.to_payload(&network.config).expect("Payload should be assembled.");
	assert_eq!(payload.chain, ChainIdentifier::Relay);
	assert_eq!(payload.origin, DispatchOrigin::Signed);

	let decoded = PalletCall::<XcmPalletCall>::decode(&mut payload.call.as_bytes()).expect("Call should decode.");
	assert_eq!(decoded.pallet_index, network.config.relay.pallets.xcm_pallet);
	assert_eq!(
		decoded.call,
		XcmPalletCall::ReserveTransferAssets {
			dest: Box::new(VersionedLocation::V4(Location::new(0, [Junction::Parachain(BIFROST)]))),
			beneficiary: Box::new(VersionedLocation::V4(Location::new(0, [account(ALICE_ID)]))),
			assets: Box::new(VersionedAssets::V4(
				Asset {
					id: AssetId(Location::here()),
					fun: Fungibility::Fungible(10 * UNIT),
				}
				.into()
			)),
			fee_asset_item: 0,
		}
	);

	assert!(network.execute(payload.clone()).is_success());
	// Signed calls are submitted as they are.
	assert_eq!(network.last_submitted().call, payload.call);
}

#[test]
fn test_limited_reserve_transfer_from_relay_to_bifrost() {
	let network = MockNetwork::new();

	let request = network
		.builder
		.build_limited_relay_to_para(BIFROST.into(), 10 * UNIT, BOB, 0, true)
		.expect("Request should be valid.");
	assert_eq!(request.weight_limit, WeightLimitSelector::select(0, true));
	let payload = request.to_payload(&network.config).expect("Payload should be assembled.");

	let decoded = PalletCall::<XcmPalletCall>::decode(&mut payload.call.as_bytes()).expect("Call should decode.");
	let XcmPalletCall::LimitedReserveTransferAssets {
		beneficiary,
		weight_limit,
		..
	} = decoded.call
	else {
		panic!("Expected a limited reserve transfer.");
	};
	assert_eq!(*beneficiary, VersionedLocation::V4(Location::new(0, [account(BOB_ID)])));
	assert!(matches!(weight_limit, WeightLimit::Limited(_)));

	assert!(network.execute(payload).is_success());
}

#[test]
fn test_transfer_from_bifrost_to_relay() {
	let network = MockNetwork::new();

	let request = network
		.builder
		.build_para_to_relay(ChainIdentifier::para(BIFROST), "KSM", 10 * UNIT, ALICE)
		.expect("Request should be valid.");
	let payload = request.to_payload(&network.config).expect("Payload should be assembled.");
	assert_eq!(payload.chain, ChainIdentifier::para(BIFROST));
	assert_eq!(payload.origin, DispatchOrigin::Signed);

	let decoded = PalletCall::<XTokensCall>::decode(&mut payload.call.as_bytes()).expect("Call should decode.");
	assert_eq!(decoded.pallet_index, 70);
	assert_eq!(
		decoded.call,
		XTokensCall::TransferMultiasset {
			asset: Box::new(VersionedAsset::V4(relay_token(10 * UNIT))),
			dest: Box::new(VersionedLocation::V4(Location::new(1, [account(ALICE_ID)]))),
			dest_weight_limit: WeightLimit::Unlimited,
		}
	);

	assert!(network.execute(payload).is_success());
}

#[test]
fn test_transfer_from_bifrost_to_karura() {
	let network = MockNetwork::new();

	let request = network
		.builder
		.build_para_to_para(ChainIdentifier::para(BIFROST), KARURA.into(), "ksm", 10 * UNIT, BOB)
		.expect("Request should be valid.");
	let payload = request.to_payload(&network.config).expect("Payload should be assembled.");

	let decoded = PalletCall::<XTokensCall>::decode(&mut payload.call.as_bytes()).expect("Call should decode.");
	let XTokensCall::TransferMultiasset { asset, dest, .. } = decoded.call;
	assert_eq!(*asset, VersionedAsset::V4(relay_token(10 * UNIT)));
	assert_eq!(
		*dest,
		VersionedLocation::V4(Location::new(1, [Junction::Parachain(KARURA), account(BOB_ID)]))
	);

	assert!(network.execute(payload).is_success());
}

#[test]
fn test_transfer_of_unregistered_currency() {
	let network = MockNetwork::new();

	assert_eq!(
		network
			.builder
			.build_para_to_para(ChainIdentifier::para(BIFROST), KARURA.into(), "KAR", UNIT, BOB),
		Err(Error::UnknownAsset {
			symbol: "KAR".into(),
			origin: ChainIdentifier::para(BIFROST)
		})
	);
	assert!(network.gateway.submitted().is_empty());
}

#[test]
fn test_transfer_from_bifrost_to_itself() {
	let network = MockNetwork::new();

	assert_eq!(
		network
			.builder
			.build_para_to_para(ChainIdentifier::para(BIFROST), BIFROST.into(), "KSM", UNIT, BOB),
		Err(Error::UnsupportedDirection {
			origin: ChainRole::Parachain,
			destination: ChainIdentifier::para(BIFROST)
		})
	);
	assert!(network.gateway.submitted().is_empty());
}

#[test]
fn test_transfer_from_unconfigured_parachain() {
	let network = MockNetwork::new();
	let request = network
		.builder
		.build_para_to_relay(ChainIdentifier::para(BIFROST), "KSM", UNIT, ALICE)
		.expect("Request should be valid.");

	// Same registry, but the origin chain is unknown to the call assembly.
	let mut config = NetworkConfig::local();
	config.parachains.retain(|parachain| parachain.para_id != BIFROST);
	assert!(matches!(request.to_payload(&config), Err(Error::UnknownChain(_))));
}

#[test]
fn test_dispatch_error_is_reported() {
	let block_hash = H256::repeat_byte(7);
	let failure = DispatchOutcome::module_error(99, [21, 0, 0, 0]);
	let config = NetworkConfig::local();
	let gateway = MockGateway::new(config.relay.pallets.sudo).with_statuses(vec![
		SubmissionStatus::Ready,
		SubmissionStatus::InBlock {
			block_hash,
			outcome: failure.clone(),
		},
		SubmissionStatus::Finalized {
			block_hash,
			outcome: failure,
		},
	]);
	let network = MockNetwork::with_gateway(config, gateway);

	let payload = network
		.builder
		.build_relay_to_para(KARURA.into(), UNIT, ALICE)
		.and_then(|request| request.to_payload(&network.config))
		.expect("Payload should be assembled.");

	let outcome = network.execute(payload);
	assert!(!outcome.is_success());
	let TrackedOutcome::Finalized { outcome, .. } = outcome else {
		panic!("Expected finalization.");
	};
	assert_eq!(
		outcome.module_error,
		Some(ModuleError {
			index: 99,
			error: [21, 0, 0, 0]
		})
	);
}

#[test]
fn test_dropped_transfer() {
	let config = NetworkConfig::local();
	let gateway = MockGateway::new(config.relay.pallets.sudo)
		.with_statuses(vec![SubmissionStatus::Ready, SubmissionStatus::Dropped]);
	let network = MockNetwork::with_gateway(config, gateway);

	let payload = network
		.builder
		.build_para_to_relay(ChainIdentifier::para(KARURA), "KSM", UNIT, BOB)
		.and_then(|request| request.to_payload(&network.config))
		.expect("Payload should be assembled.");

	assert_eq!(network.execute(payload), TrackedOutcome::Dropped);
}
