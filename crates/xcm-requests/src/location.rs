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

use core::fmt;

use cumulus_primitives_core::ParaId;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_core::crypto::AccountId32;
use xcm::v4::{Junction, Location};

use crate::Error;

const LOG_TARGET: &str = "xcm-requests::location";

/// The addressing convention a chain follows inside the network.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Encode, Decode, MaxEncodedLen, TypeInfo)]
pub enum ChainRole {
	Relay,
	Parachain,
}

/// A chain of the network: either the relay chain itself or one of its
/// parachains.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Encode, Decode, MaxEncodedLen, TypeInfo)]
pub enum ChainIdentifier {
	Relay,
	Parachain(ParaId),
}

impl ChainIdentifier {
	pub fn para(id: u32) -> Self {
		Self::Parachain(id.into())
	}

	pub fn role(&self) -> ChainRole {
		match self {
			Self::Relay => ChainRole::Relay,
			Self::Parachain(_) => ChainRole::Parachain,
		}
	}

	pub fn para_id(&self) -> Option<ParaId> {
		match self {
			Self::Relay => None,
			Self::Parachain(id) => Some(*id),
		}
	}
}

impl From<ParaId> for ChainIdentifier {
	fn from(id: ParaId) -> Self {
		Self::Parachain(id)
	}
}

impl fmt::Display for ChainIdentifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Relay => write!(f, "relay chain"),
			Self::Parachain(id) => write!(f, "parachain {}", u32::from(*id)),
		}
	}
}

/// Builds locations relative to the chain that sends the XCM message.
///
/// A parachain reaches the relay chain and its siblings through one parent
/// hop, while the relay chain addresses its parachains as direct children.
/// Getting the number of parents wrong routes a message to a different
/// consensus system without any error being raised.
pub struct MultilocationBuilder;

impl MultilocationBuilder {
	/// The location of `beneficiary` on `destination`, as seen from a chain
	/// with the `origin` role.
	///
	/// # Errors
	///
	/// Returns [`Error::UnsupportedDirection`] for relay to relay.
	pub fn build(origin: ChainRole, destination: ChainIdentifier, beneficiary: &AccountId32) -> Result<Location, Error> {
		let account = Junction::AccountId32 {
			network: None,
			id: beneficiary.clone().into(),
		};
		let location = match (origin, destination) {
			(ChainRole::Relay, ChainIdentifier::Parachain(id)) => {
				Location::new(0, [Junction::Parachain(id.into()), account])
			}
			(ChainRole::Parachain, ChainIdentifier::Relay) => Location::new(1, [account]),
			(ChainRole::Parachain, ChainIdentifier::Parachain(id)) => {
				Location::new(1, [Junction::Parachain(id.into()), account])
			}
			(ChainRole::Relay, ChainIdentifier::Relay) => {
				log::error!(target: LOG_TARGET, "Relay chain cannot transfer to itself.");
				return Err(Error::UnsupportedDirection { origin, destination });
			}
		};
		log::trace!(target: LOG_TARGET, "Built location {:?} for {} from {:?}", location, destination, origin);
		Ok(location)
	}

	/// The location of the `destination` chain itself.
	///
	/// # Errors
	///
	/// Returns [`Error::UnsupportedDirection`] for relay to relay.
	pub fn destination_location(origin: ChainRole, destination: ChainIdentifier) -> Result<Location, Error> {
		match (origin, destination) {
			(ChainRole::Relay, ChainIdentifier::Parachain(id)) => Ok(Location::new(0, [Junction::Parachain(id.into())])),
			(ChainRole::Parachain, ChainIdentifier::Relay) => Ok(Location::parent()),
			(ChainRole::Parachain, ChainIdentifier::Parachain(id)) => {
				Ok(Location::new(1, [Junction::Parachain(id.into())]))
			}
			(ChainRole::Relay, ChainIdentifier::Relay) => Err(Error::UnsupportedDirection { origin, destination }),
		}
	}

	/// Split a location built by [`Self::build`] into the destination chain
	/// and the beneficiary relative to that chain.
	pub fn split_beneficiary(location: Location) -> (Location, Location) {
		let (destination, account) = location.split_last_interior();
		let beneficiary = account.map_or_else(Location::here, |junction| Location::new(0, [junction]));
		(destination, beneficiary)
	}
}
