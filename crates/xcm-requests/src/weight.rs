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

use sp_weights::Weight;
use xcm::v4::WeightLimit;

/// Maps a weight budget onto the XCM weight limit of the remote execution.
pub struct WeightLimitSelector;

impl WeightLimitSelector {
	/// `Limited` with `weight` as reference time if `bounded`, `Unlimited`
	/// otherwise. The weight is ignored when the limit is unbounded.
	pub fn select(weight: u64, bounded: bool) -> WeightLimit {
		Self::select_with_proof_size(weight, 0, bounded)
	}

	pub fn select_with_proof_size(ref_time: u64, proof_size: u64, bounded: bool) -> WeightLimit {
		if bounded {
			WeightLimit::Limited(Weight::from_parts(ref_time, proof_size))
		} else {
			WeightLimit::Unlimited
		}
	}
}
