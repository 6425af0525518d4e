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

use std::collections::BTreeMap;

use xcm::v4::{Asset, AssetId, Fungibility, Location};

use crate::{ChainIdentifier, ChainRole, Error};

const LOG_TARGET: &str = "xcm-requests::asset";

/// Lookup of the XCM location of a currency, relative to the chain that
/// holds it.
///
/// Implementations may be backed by a static table or by a cached registry
/// query. The lookup itself is synchronous.
pub trait AssetRegistry {
	fn lookup(&self, symbol: &str, origin: ChainIdentifier) -> Option<Location>;
}

impl<R: AssetRegistry + ?Sized> AssetRegistry for &R {
	fn lookup(&self, symbol: &str, origin: ChainIdentifier) -> Option<Location> {
		(**self).lookup(symbol, origin)
	}
}

/// In-memory asset table. Symbols are matched case-insensitively.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct StaticAssetRegistry {
	entries: BTreeMap<(ChainIdentifier, String), Location>,
}

impl StaticAssetRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_asset(mut self, origin: ChainIdentifier, symbol: &str, location: Location) -> Self {
		self.register(origin, symbol, location);
		self
	}

	/// Register `symbol` on `origin`, returning the location it replaced.
	pub fn register(&mut self, origin: ChainIdentifier, symbol: &str, location: Location) -> Option<Location> {
		self.entries.insert((origin, normalize(symbol)), location)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl AssetRegistry for StaticAssetRegistry {
	fn lookup(&self, symbol: &str, origin: ChainIdentifier) -> Option<Location> {
		self.entries.get(&(origin, normalize(symbol))).cloned()
	}
}

fn normalize(symbol: &str) -> String {
	symbol.trim().to_ascii_uppercase()
}

/// Resolves currencies into the fungible XCM assets moved by a transfer.
pub struct AssetDescriptor;

impl AssetDescriptor {
	/// # Errors
	///
	/// Returns [`Error::UnknownAsset`] if `symbol` is not registered on
	/// `origin`.
	pub fn resolve<R: AssetRegistry + ?Sized>(
		registry: &R,
		symbol: &str,
		origin: ChainIdentifier,
		amount: u128,
	) -> Result<Asset, Error> {
		let Some(location) = registry.lookup(symbol, origin) else {
			log::error!(target: LOG_TARGET, "Asset {} is not registered on {}", symbol, origin);
			return Err(Error::UnknownAsset {
				symbol: symbol.to_owned(),
				origin,
			});
		};
		log::trace!(target: LOG_TARGET, "Resolved asset {} on {} to {:?}", symbol, origin, location);
		Ok(fungible(location, amount))
	}

	/// The relay chain native token as seen from a chain with the `origin`
	/// role.
	pub fn relay_native(origin: ChainRole, amount: u128) -> Asset {
		let location = match origin {
			ChainRole::Relay => Location::here(),
			ChainRole::Parachain => Location::parent(),
		};
		fungible(location, amount)
	}
}

fn fungible(location: Location, amount: u128) -> Asset {
	Asset {
		id: AssetId(location),
		fun: Fungibility::Fungible(amount),
	}
}

#[cfg(test)]
mod tests {
	use xcm::v4::Junction;

	use super::*;

	fn registry() -> StaticAssetRegistry {
		StaticAssetRegistry::new()
			.with_asset(ChainIdentifier::para(2001), "KSM", Location::parent())
			.with_asset(ChainIdentifier::para(2001), "BNC", Location::here())
			.with_asset(
				ChainIdentifier::para(2000),
				"USDT",
				Location::new(1, [Junction::Parachain(1_000), Junction::GeneralIndex(1_984)]),
			)
	}

	#[test]
	fn resolves_registered_assets() {
		let registry = registry();

		assert_eq!(
			AssetDescriptor::resolve(&registry, "KSM", ChainIdentifier::para(2001), 1_000),
			Ok(Asset {
				id: AssetId(Location::parent()),
				fun: Fungibility::Fungible(1_000)
			})
		);
		assert_eq!(
			AssetDescriptor::resolve(&registry, "usdt", ChainIdentifier::para(2000), 5)
				.unwrap()
				.id,
			AssetId(Location::new(
				1,
				[Junction::Parachain(1_000), Junction::GeneralIndex(1_984)]
			))
		);
	}

	#[test]
	fn unknown_pairs_fail() {
		let registry = registry();

		// Registered, but on a different chain.
		assert_eq!(
			AssetDescriptor::resolve(&registry, "BNC", ChainIdentifier::para(2000), 1),
			Err(Error::UnknownAsset {
				symbol: "BNC".into(),
				origin: ChainIdentifier::para(2000)
			})
		);
		assert!(AssetDescriptor::resolve(&registry, "DOT", ChainIdentifier::para(2001), 1).is_err());
		assert!(AssetDescriptor::resolve(&StaticAssetRegistry::new(), "KSM", ChainIdentifier::Relay, 1).is_err());
	}

	#[test]
	fn relay_native_collapses_to_here_on_relay() {
		assert_eq!(
			AssetDescriptor::relay_native(ChainRole::Relay, 10).id,
			AssetId(Location::here())
		);
		assert_eq!(
			AssetDescriptor::relay_native(ChainRole::Parachain, 10).id,
			AssetId(Location::parent())
		);
	}

	#[test]
	fn register_replaces_existing_entry() {
		let mut registry = registry();

		assert_eq!(
			registry.register(ChainIdentifier::para(2001), "ksm", Location::here()),
			Some(Location::parent())
		);
		assert_eq!(registry.len(), 3);
	}
}
