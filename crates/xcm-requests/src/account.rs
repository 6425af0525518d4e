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

//! Conversion of human-readable addresses into the 32-byte account
//! identifiers carried by `AccountId32` junctions.

use sp_core::crypto::{AccountId32, Ss58Codec};

use crate::DecodeError;

const LOG_TARGET: &str = "xcm-requests::account";

/// Decodes an address string into the raw public key bytes it encodes.
///
/// Implementations must be deterministic and must reject malformed input.
pub trait AddressCodec {
	/// # Errors
	///
	/// Returns a [`DecodeError`] if `address` is not valid for this format.
	fn decode_address(&self, address: &str) -> Result<[u8; 32], DecodeError>;
}

impl<C: AddressCodec + ?Sized> AddressCodec for &C {
	fn decode_address(&self, address: &str) -> Result<[u8; 32], DecodeError> {
		(**self).decode_address(address)
	}
}

/// SS58 addresses, as used by every Substrate-based chain.
///
/// Any registered network prefix is accepted unless an expected prefix is
/// set, in which case addresses of other networks are rejected.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Ss58AddressCodec {
	expected_prefix: Option<u16>,
}

impl Ss58AddressCodec {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_expected_prefix(prefix: u16) -> Self {
		Self {
			expected_prefix: Some(prefix),
		}
	}
}

impl AddressCodec for Ss58AddressCodec {
	fn decode_address(&self, address: &str) -> Result<[u8; 32], DecodeError> {
		let (account, format) = AccountId32::from_ss58check_with_version(address).map_err(|e| {
			log::debug!(target: LOG_TARGET, "Failed to decode SS58 address {:?}: {:?}", address, e);
			DecodeError::InvalidSs58(format!("{e:?}"))
		})?;
		let found = u16::from(format);
		match self.expected_prefix {
			Some(expected) if expected != found => Err(DecodeError::UnexpectedNetwork { expected, found }),
			_ => Ok(account.into()),
		}
	}
}

/// `0x`-prefixed hex encoding of the raw public key.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct HexAddressCodec;

impl AddressCodec for HexAddressCodec {
	fn decode_address(&self, address: &str) -> Result<[u8; 32], DecodeError> {
		let digits = address.strip_prefix("0x").ok_or(DecodeError::InvalidHex)?;
		let bytes = hex::decode(digits).map_err(|_| DecodeError::InvalidHex)?;
		let len = bytes.len();
		bytes.try_into().map_err(|_| DecodeError::InvalidLength(len))
	}
}

/// Derives the [`AccountId32`] of a destination address.
#[derive(Clone, Default, Debug)]
pub struct AccountIdentifierCodec<C = Ss58AddressCodec> {
	codec: C,
}

impl<C: AddressCodec> AccountIdentifierCodec<C> {
	pub fn new(codec: C) -> Self {
		Self { codec }
	}

	/// Decode `address` into the account identifier used inside XCM
	/// locations. The same address always yields the same identifier.
	///
	/// # Errors
	///
	/// Returns a [`DecodeError`] if the address is malformed.
	pub fn encode(&self, address: &str) -> Result<AccountId32, DecodeError> {
		let raw = self.codec.decode_address(address)?;
		log::trace!(target: LOG_TARGET, "Decoded address {} into 0x{}", address, hex::encode(raw));
		Ok(AccountId32::new(raw))
	}
}
