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

//! Boundary to the chain client that signs, submits and tracks payloads.
//!
//! This crate never submits anything itself. A [`SubmissionGateway`] is
//! expected to wrap [`DispatchOrigin::Root`](crate::DispatchOrigin::Root)
//! payloads with [`wrap_in_sudo`](crate::call::wrap_in_sudo), sign them and
//! report their progress as a stream of [`SubmissionStatus`] values.

use std::pin::Pin;

use async_trait::async_trait;
use futures::stream::{Stream, StreamExt};
use sp_core::H256;

use crate::CallPayload;

const LOG_TARGET: &str = "xcm-requests::submission";

pub type StatusStream = Pin<Box<dyn Stream<Item = SubmissionStatus> + Send>>;

/// A submitted extrinsic and the stream of its status updates.
pub struct Submission {
	pub tx_hash: H256,
	pub statuses: StatusStream,
}

#[async_trait]
pub trait SubmissionGateway {
	type Error;

	/// Sign and submit `payload`, resolving once the transaction pool has
	/// accepted it. The returned stream may yield any number of
	/// intermediate statuses before a terminal one, or none at all.
	async fn submit(&self, payload: CallPayload) -> Result<Submission, Self::Error>;
}

/// The module error of a failed dispatch.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ModuleError {
	/// Index of the pallet that raised the error.
	pub index: u8,
	/// Encoded error variant.
	pub error: [u8; 4],
}

/// Result of executing an included extrinsic.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct DispatchOutcome {
	pub success: bool,
	pub module_error: Option<ModuleError>,
	pub other_error: Option<String>,
}

impl DispatchOutcome {
	pub fn success() -> Self {
		Self {
			success: true,
			..Default::default()
		}
	}

	pub fn module_error(index: u8, error: [u8; 4]) -> Self {
		Self {
			success: false,
			module_error: Some(ModuleError { index, error }),
			other_error: None,
		}
	}

	pub fn other_error(reason: impl Into<String>) -> Self {
		Self {
			success: false,
			module_error: None,
			other_error: Some(reason.into()),
		}
	}
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SubmissionStatus {
	Ready,
	Broadcast,
	InBlock { block_hash: H256, outcome: DispatchOutcome },
	Finalized { block_hash: H256, outcome: DispatchOutcome },
	/// Dropped from the transaction pool.
	Dropped,
	/// Rejected as invalid by the transaction pool.
	Invalid,
}

impl SubmissionStatus {
	pub fn is_terminal(&self) -> bool {
		matches!(self, Self::Finalized { .. } | Self::Dropped | Self::Invalid)
	}
}

/// The last status a stream reported.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TrackedOutcome {
	Finalized { block_hash: H256, outcome: DispatchOutcome },
	Dropped,
	Invalid,
	/// The stream ended without a terminal status. Holds the last inclusion,
	/// if any.
	Interrupted { in_block: Option<(H256, DispatchOutcome)> },
}

impl TrackedOutcome {
	/// Finalized without a dispatch error.
	pub fn is_success(&self) -> bool {
		matches!(self, Self::Finalized { outcome, .. } if outcome.success)
	}
}

/// Drain `statuses` until a terminal status is reached.
///
/// There is no deadline here: wrap the future in a timeout to bound the
/// wait, dropping it abandons the stream.
pub async fn wait_for_outcome(mut statuses: StatusStream) -> TrackedOutcome {
	let mut in_block = None;
	while let Some(status) = statuses.next().await {
		log::trace!(target: LOG_TARGET, "Received status {:?}", status);
		match status {
			SubmissionStatus::Ready | SubmissionStatus::Broadcast => {}
			SubmissionStatus::InBlock { block_hash, outcome } => {
				if !outcome.success {
					log::warn!(target: LOG_TARGET, "Dispatch failed in block {:?}: {:?}", block_hash, outcome);
				}
				in_block = Some((block_hash, outcome));
			}
			SubmissionStatus::Finalized { block_hash, outcome } => {
				log::debug!(target: LOG_TARGET, "Finalized in block {:?}", block_hash);
				return TrackedOutcome::Finalized { block_hash, outcome };
			}
			SubmissionStatus::Dropped => return TrackedOutcome::Dropped,
			SubmissionStatus::Invalid => return TrackedOutcome::Invalid,
		}
	}
	log::warn!(target: LOG_TARGET, "Status stream ended before a terminal status");
	TrackedOutcome::Interrupted { in_block }
}
