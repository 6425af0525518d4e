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
use futures::executor::block_on;
use xcm_requests::{
	mock::{MockGateway, SubmittedCall},
	wait_for_outcome, CallPayload, NetworkConfig, Ss58AddressCodec, StaticAssetRegistry, SubmissionGateway,
	TrackedOutcome, TransferRequestBuilder,
};

pub(crate) const ALICE: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";
pub(crate) const BOB: &str = "5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty";

pub(crate) const KARURA: u32 = 2000;
pub(crate) const BIFROST: u32 = 2001;

pub(crate) const UNIT: u128 = 1_000_000_000_000;

/// The local Rococo network with Karura and Bifrost, submitting through a
/// [`MockGateway`].
pub(crate) struct MockNetwork {
	pub(crate) config: NetworkConfig,
	pub(crate) builder: TransferRequestBuilder<Ss58AddressCodec, StaticAssetRegistry>,
	pub(crate) gateway: MockGateway,
}

impl MockNetwork {
	pub(crate) fn new() -> Self {
		let config = NetworkConfig::local();
		let gateway = MockGateway::new(config.relay.pallets.sudo);
		Self::with_gateway(config, gateway)
	}

	pub(crate) fn with_gateway(config: NetworkConfig, gateway: MockGateway) -> Self {
		let _ = env_logger::builder().is_test(true).try_init();
		let builder = TransferRequestBuilder::new(Ss58AddressCodec::new(), config.asset_registry());
		Self {
			config,
			builder,
			gateway,
		}
	}

	/// Submit `payload` and follow it until a terminal status.
	pub(crate) fn execute(&self, payload: CallPayload) -> TrackedOutcome {
		block_on(async {
			let submission = self
				.gateway
				.submit(payload)
				.await
				.expect("Submission should be accepted.");
			wait_for_outcome(submission.statuses).await
		})
	}

	pub(crate) fn last_submitted(&self) -> SubmittedCall {
		self.gateway
			.submitted()
			.pop()
			.expect("A call should have been submitted.")
	}
}
