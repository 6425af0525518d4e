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

//! In-memory [`SubmissionGateway`] that records what it is given and replays
//! a scripted sequence of statuses.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use futures::stream;
use sp_core::{blake2_256, H256};

use crate::{
	call::wrap_in_sudo, CallPayload, ChainIdentifier, DispatchOrigin, DispatchOutcome, EncodedCall, Submission,
	SubmissionGateway, SubmissionStatus,
};

const LOG_TARGET: &str = "xcm-requests::mock";

/// A call as it would have been signed by the gateway.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SubmittedCall {
	pub chain: ChainIdentifier,
	pub call: EncodedCall,
	pub tx_hash: H256,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum MockGatewayError {
	Rejected(String),
}

pub struct MockGateway {
	sudo_pallet_index: u8,
	statuses: Option<Vec<SubmissionStatus>>,
	rejection: Option<String>,
	submitted: Mutex<Vec<SubmittedCall>>,
}

impl MockGateway {
	pub fn new(sudo_pallet_index: u8) -> Self {
		Self {
			sudo_pallet_index,
			statuses: None,
			rejection: None,
			submitted: Mutex::new(Vec::new()),
		}
	}

	/// Replay `statuses` for every submission instead of a successful
	/// inclusion and finalization.
	pub fn with_statuses(mut self, statuses: Vec<SubmissionStatus>) -> Self {
		self.statuses = Some(statuses);
		self
	}

	/// Refuse every submission.
	pub fn rejecting(mut self, reason: impl Into<String>) -> Self {
		self.rejection = Some(reason.into());
		self
	}

	pub fn submitted(&self) -> Vec<SubmittedCall> {
		self.lock().clone()
	}

	fn lock(&self) -> MutexGuard<'_, Vec<SubmittedCall>> {
		self.submitted.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
	}

	fn default_statuses(tx_hash: H256) -> Vec<SubmissionStatus> {
		let block_hash = H256(blake2_256(tx_hash.as_bytes()));
		vec![
			SubmissionStatus::Ready,
			SubmissionStatus::Broadcast,
			SubmissionStatus::InBlock {
				block_hash,
				outcome: DispatchOutcome::success(),
			},
			SubmissionStatus::Finalized {
				block_hash,
				outcome: DispatchOutcome::success(),
			},
		]
	}
}

#[async_trait]
impl SubmissionGateway for MockGateway {
	type Error = MockGatewayError;

	async fn submit(&self, payload: CallPayload) -> Result<Submission, Self::Error> {
		if let Some(reason) = &self.rejection {
			return Err(MockGatewayError::Rejected(reason.clone()));
		}
		let call = match payload.origin {
			DispatchOrigin::Signed => payload.call,
			DispatchOrigin::Root => wrap_in_sudo(&payload.call, self.sudo_pallet_index),
		};
		let tx_hash = H256(blake2_256(call.as_bytes()));
		log::info!(target: LOG_TARGET, "Submitting {} on {} as {:?}", call, payload.chain, tx_hash);
		self.lock().push(SubmittedCall {
			chain: payload.chain,
			call,
			tx_hash,
		});
		let statuses = self
			.statuses
			.clone()
			.unwrap_or_else(|| Self::default_statuses(tx_hash));
		Ok(Submission {
			tx_hash,
			statuses: Box::pin(stream::iter(statuses)),
		})
	}
}
