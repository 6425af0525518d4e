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

//! Description of the network the requests are built for: the pallet
//! indices of each runtime, the parachain IDs and the currencies every
//! parachain can send.

use std::{collections::BTreeSet, path::Path};

use cumulus_primitives_core::ParaId;
use serde::{Deserialize, Serialize};
use xcm::v4::{Junction, Location};

use crate::{ChainIdentifier, ConfigError, Error, StaticAssetRegistry, UnknownChain};

const LOG_TARGET: &str = "xcm-requests::config";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
	pub relay: RelayConfig,
	#[serde(default)]
	pub parachains: Vec<ParachainConfig>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayConfig {
	pub name: String,
	/// Symbol of the relay chain token.
	pub native_symbol: String,
	#[serde(default)]
	pub pallets: RelayPallets,
}

/// Pallet indices in the relay chain runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayPallets {
	pub xcm_pallet: u8,
	pub hrmp: u8,
	pub paras_sudo_wrapper: u8,
	pub sudo: u8,
}

/// The encoded indices correspond to Rococo's runtime configuration.
impl Default for RelayPallets {
	fn default() -> Self {
		Self {
			xcm_pallet: 99,
			hrmp: 60,
			paras_sudo_wrapper: 250,
			sudo: 255,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParachainConfig {
	pub name: String,
	pub para_id: u32,
	pub xtokens_pallet_index: u8,
	#[serde(default)]
	pub assets: Vec<AssetConfig>,
}

impl ParachainConfig {
	pub fn chain_id(&self) -> ChainIdentifier {
		ChainIdentifier::para(self.para_id)
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetConfig {
	pub symbol: String,
	pub location: AssetLocation,
}

/// Where a currency lives, relative to the parachain that sends it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AssetLocation {
	/// The relay chain token.
	RelayNative,
	/// The parachain's own token.
	Native,
	/// A token reserved on a sibling parachain.
	#[serde(rename_all = "camelCase")]
	Sibling {
		para_id: u32,
		#[serde(default)]
		general_index: Option<u64>,
	},
}

impl AssetLocation {
	pub fn to_location(&self) -> Location {
		match self {
			Self::RelayNative => Location::parent(),
			Self::Native => Location::here(),
			Self::Sibling {
				para_id,
				general_index: None,
			} => Location::new(1, [Junction::Parachain(*para_id)]),
			Self::Sibling {
				para_id,
				general_index: Some(index),
			} => Location::new(1, [Junction::Parachain(*para_id), Junction::GeneralIndex(u128::from(*index))]),
		}
	}
}

impl NetworkConfig {
	/// The local development network: a Rococo relay chain whose token is
	/// registered as KSM by Karura (2000) and Bifrost (2001).
	pub fn local() -> Self {
		Self {
			relay: RelayConfig {
				name: "Rococo".into(),
				native_symbol: "KSM".into(),
				pallets: RelayPallets::default(),
			},
			parachains: vec![
				ParachainConfig {
					name: "Karura".into(),
					para_id: 2000,
					xtokens_pallet_index: 54,
					assets: vec![
						AssetConfig {
							symbol: "KSM".into(),
							location: AssetLocation::RelayNative,
						},
						AssetConfig {
							symbol: "KAR".into(),
							location: AssetLocation::Native,
						},
					],
				},
				ParachainConfig {
					name: "Bifrost".into(),
					para_id: 2001,
					xtokens_pallet_index: 70,
					assets: vec![
						AssetConfig {
							symbol: "KSM".into(),
							location: AssetLocation::RelayNative,
						},
						AssetConfig {
							symbol: "BNC".into(),
							location: AssetLocation::Native,
						},
					],
				},
			],
		}
	}

	/// # Errors
	///
	/// Returns [`ConfigError::Json`] for malformed input and the validation
	/// errors of [`Self::validate`].
	pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
		let config: Self = serde_json::from_str(input).map_err(|e| ConfigError::Json(e.to_string()))?;
		config.validate()?;
		Ok(config)
	}

	/// # Errors
	///
	/// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
	/// errors of [`Self::from_json_str`].
	pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		log::debug!(target: LOG_TARGET, "Loading network configuration from {}", path.display());
		let input = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
		Self::from_json_str(&input)
	}

	/// # Errors
	///
	/// Returns an error if two parachains share an ID or a name.
	pub fn validate(&self) -> Result<(), ConfigError> {
		let mut ids = BTreeSet::new();
		let mut names = BTreeSet::new();
		for parachain in &self.parachains {
			if !ids.insert(parachain.para_id) {
				return Err(ConfigError::DuplicateParaId(parachain.para_id));
			}
			let name = parachain.name.to_ascii_lowercase();
			if name == self.relay.name.to_ascii_lowercase() || !names.insert(name) {
				return Err(ConfigError::DuplicateName(parachain.name.clone()));
			}
		}
		Ok(())
	}

	pub fn parachain(&self, id: ParaId) -> Option<&ParachainConfig> {
		let id = u32::from(id);
		self.parachains.iter().find(|parachain| parachain.para_id == id)
	}

	/// Resolve a configured chain name, ignoring case.
	///
	/// # Errors
	///
	/// Returns [`Error::UnknownChain`] if no chain has that name.
	pub fn chain_by_name(&self, name: &str) -> Result<ChainIdentifier, Error> {
		if self.relay.name.eq_ignore_ascii_case(name) {
			return Ok(ChainIdentifier::Relay);
		}
		self.parachains
			.iter()
			.find(|parachain| parachain.name.eq_ignore_ascii_case(name))
			.map(ParachainConfig::chain_id)
			.ok_or_else(|| UnknownChain::Name(name.to_owned()).into())
	}

	/// The asset table described by this configuration.
	pub fn asset_registry(&self) -> StaticAssetRegistry {
		let mut registry =
			StaticAssetRegistry::new().with_asset(ChainIdentifier::Relay, &self.relay.native_symbol, Location::here());
		for parachain in &self.parachains {
			for asset in &parachain.assets {
				registry.register(parachain.chain_id(), &asset.symbol, asset.location.to_location());
			}
		}
		registry
	}
}

impl Default for NetworkConfig {
	fn default() -> Self {
		Self::local()
	}
}
