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

use crate::location::{ChainIdentifier, ChainRole};

/// An error in the request construction logic.
///
/// All variants are raised synchronously while building a request and leave
/// no side effects behind, so a caller can fix the input and build again.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Error {
	/// The beneficiary address could not be decoded.
	Decode(DecodeError),
	/// There is no routing rule from the origin role to the destination.
	UnsupportedDirection {
		origin: ChainRole,
		destination: ChainIdentifier,
	},
	/// The currency is not registered on the origin chain.
	UnknownAsset { symbol: String, origin: ChainIdentifier },
	/// The transfer amount is zero.
	InvalidAmount,
	/// The HRMP channel parameters are not acceptable.
	InvalidChannelParameters(ChannelParameterError),
	/// The chain is not part of the configured network.
	UnknownChain(UnknownChain),
	/// The network configuration is invalid.
	Config(ConfigError),
}

/// An error in the address decoding logic.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum DecodeError {
	/// The address is not a valid SS58 string (alphabet, length or checksum).
	InvalidSs58(String),
	/// The address is valid but belongs to a different network.
	UnexpectedNetwork { expected: u16, found: u16 },
	/// The address is not a `0x`-prefixed hex string.
	InvalidHex,
	/// The decoded public key does not have 32 bytes.
	InvalidLength(usize),
}

/// An error in the HRMP channel parameter validation.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ChannelParameterError {
	/// `max_capacity` is zero.
	ZeroCapacity,
	/// `max_message_size` is zero.
	ZeroMessageSize,
	/// Sender and recipient are the same parachain.
	SameParachain,
}

/// A chain reference that could not be resolved against the configuration.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum UnknownChain {
	Id(ChainIdentifier),
	Name(String),
}

/// An error in the network configuration.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ConfigError {
	/// The configuration could not be read.
	Io(String),
	/// The configuration is not valid JSON for the expected schema.
	Json(String),
	/// Two parachains share the same ID.
	DuplicateParaId(u32),
	/// Two parachains share the same name.
	DuplicateName(String),
}

impl From<DecodeError> for Error {
	fn from(err: DecodeError) -> Self {
		Self::Decode(err)
	}
}

impl From<ChannelParameterError> for Error {
	fn from(err: ChannelParameterError) -> Self {
		Self::InvalidChannelParameters(err)
	}
}

impl From<UnknownChain> for Error {
	fn from(err: UnknownChain) -> Self {
		Self::UnknownChain(err)
	}
}

impl From<ConfigError> for Error {
	fn from(err: ConfigError) -> Self {
		Self::Config(err)
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Decode(err) => write!(f, "address decoding failed: {err}"),
			Self::UnsupportedDirection { origin, destination } => {
				write!(f, "no transfer route from a {origin:?} origin to {destination}")
			}
			Self::UnknownAsset { symbol, origin } => write!(f, "asset {symbol} is not registered on {origin}"),
			Self::InvalidAmount => write!(f, "transfer amount must be greater than zero"),
			Self::InvalidChannelParameters(err) => write!(f, "invalid channel parameters: {err}"),
			Self::UnknownChain(UnknownChain::Id(id)) => write!(f, "chain {id} is not configured"),
			Self::UnknownChain(UnknownChain::Name(name)) => write!(f, "chain {name:?} is not configured"),
			Self::Config(err) => write!(f, "invalid network configuration: {err}"),
		}
	}
}

impl fmt::Display for DecodeError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidSs58(reason) => write!(f, "invalid SS58 address ({reason})"),
			Self::UnexpectedNetwork { expected, found } => {
				write!(f, "address has network prefix {found}, expected {expected}")
			}
			Self::InvalidHex => write!(f, "invalid hex address"),
			Self::InvalidLength(len) => write!(f, "public key has {len} bytes, expected 32"),
		}
	}
}

impl fmt::Display for ChannelParameterError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::ZeroCapacity => write!(f, "channel capacity must be greater than zero"),
			Self::ZeroMessageSize => write!(f, "maximum message size must be greater than zero"),
			Self::SameParachain => write!(f, "sender and recipient must be different parachains"),
		}
	}
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Io(reason) => write!(f, "cannot read configuration file ({reason})"),
			Self::Json(reason) => write!(f, "malformed configuration ({reason})"),
			Self::DuplicateParaId(id) => write!(f, "parachain {id} is configured more than once"),
			Self::DuplicateName(name) => write!(f, "chain name {name:?} is used more than once"),
		}
	}
}

impl std::error::Error for Error {}
impl std::error::Error for DecodeError {}
