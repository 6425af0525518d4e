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

//! HRMP channel management between two parachains. Both operations are
//! privileged relay chain calls and must be dispatched with a root origin.

use cumulus_primitives_core::ParaId;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

use crate::{ChannelParameterError, Error};

const LOG_TARGET: &str = "xcm-requests::channel";

#[derive(Clone, Eq, PartialEq, Debug, Encode, Decode, TypeInfo)]
pub enum ChannelRequest {
	/// Establish a channel from `sender` to `recipient`.
	Open {
		sender: ParaId,
		recipient: ParaId,
		max_capacity: u32,
		max_message_size: u32,
	},
	/// Clean up the channels of `para`. `inbound` and `outbound` are
	/// forwarded to the chain as they are.
	Close { para: ParaId, inbound: u32, outbound: u32 },
}

pub struct ChannelRequestBuilder;

impl ChannelRequestBuilder {
	/// On top of a positive capacity and message size, the sender and the
	/// recipient must be distinct parachains
	/// ([`ChannelParameterError::SameParachain`]).
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidChannelParameters`] if the capacity or the
	/// message size is zero, or if both sides are the same parachain.
	pub fn build_open(
		sender: ParaId,
		recipient: ParaId,
		max_capacity: u32,
		max_message_size: u32,
	) -> Result<ChannelRequest, Error> {
		if max_capacity == 0 {
			return Err(ChannelParameterError::ZeroCapacity.into());
		}
		if max_message_size == 0 {
			return Err(ChannelParameterError::ZeroMessageSize.into());
		}
		if sender == recipient {
			return Err(ChannelParameterError::SameParachain.into());
		}
		log::debug!(
			target: LOG_TARGET,
			"Built channel open request {:?} -> {:?} (capacity {}, message size {})",
			sender,
			recipient,
			max_capacity,
			max_message_size
		);
		Ok(ChannelRequest::Open {
			sender,
			recipient,
			max_capacity,
			max_message_size,
		})
	}

	pub fn build_close(channel_owner: ParaId, inbound: u32, outbound: u32) -> ChannelRequest {
		log::debug!(target: LOG_TARGET, "Built channel close request for {:?}", channel_owner);
		ChannelRequest::Close {
			para: channel_owner,
			inbound,
			outbound,
		}
	}
}
