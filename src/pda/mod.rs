// Program-Derived Address Derivation
//
// A PDA is a 32-byte SHA-256 digest that does not decode to a valid
// Ed25519 point, so no private key can ever sign for it. Derivation
// searches bump seeds downward from 255; each candidate hashes the seed
// list, the bump, the program id, and a fixed marker string.
//
// The off-curve test delegates to curve25519-dalek's point
// decompression, which is deterministic and audited. Heuristics are not
// acceptable here: a false positive produces addresses the program will
// refuse to sign for, and the caller verifies against the chain's own
// derivation.

use curve25519_dalek::edwards::CompressedEdwardsY;
use sha2::{Digest, Sha256};
use tracing::trace;

use crate::error::{SdkError, SdkResult};
use crate::pubkey::Pubkey;

/// Domain separator appended to every PDA hash
pub const PDA_MARKER: &[u8; 21] = b"ProgramDerivedAddress";

/// Does this 32-byte value decode to a valid Ed25519 point?
pub fn is_on_curve(bytes: &[u8; 32]) -> bool {
    CompressedEdwardsY(*bytes).decompress().is_some()
}

/// Hash seeds plus one bump into a candidate address. Fails with
/// `OnCurve` when the digest happens to decode as a curve point.
pub fn create_program_address(
    seeds: &[&[u8]],
    bump: u8,
    program_id: &Pubkey,
) -> SdkResult<Pubkey> {
    let mut hasher = Sha256::new();
    for seed in seeds {
        hasher.update(seed);
    }
    hasher.update([bump]);
    hasher.update(program_id.as_ref());
    hasher.update(PDA_MARKER);
    let digest: [u8; 32] = hasher.finalize().into();

    if is_on_curve(&digest) {
        return Err(SdkError::OnCurve);
    }
    Ok(Pubkey(digest))
}

/// Search bumps 255 down to 0 for the first off-curve candidate
pub fn find_program_address(seeds: &[&[u8]], program_id: &Pubkey) -> SdkResult<(Pubkey, u8)> {
    for bump in (0..=255u8).rev() {
        match create_program_address(seeds, bump, program_id) {
            Ok(address) => {
                trace!(bump, %address, "derived program address");
                return Ok((address, bump));
            }
            Err(SdkError::OnCurve) => continue,
            Err(e) => return Err(e),
        }
    }
    Err(SdkError::NoValidBump)
}

// Labelled derivations for the addresses the program actually uses.
// Each fixes the seed prefix and takes the program id last, so callers
// can anchor to a fork deployment.

/// Pool PDA: ("pool", mint0, mint1)
pub fn derive_pool(mint0: &Pubkey, mint1: &Pubkey, program_id: &Pubkey) -> SdkResult<(Pubkey, u8)> {
    find_program_address(&[b"pool", mint0.as_ref(), mint1.as_ref()], program_id)
}

/// Token vault PDA: ("vault", pool, mint)
pub fn derive_vault(pool: &Pubkey, mint: &Pubkey, program_id: &Pubkey) -> SdkResult<(Pubkey, u8)> {
    find_program_address(&[b"vault", pool.as_ref(), mint.as_ref()], program_id)
}

/// LP mint PDA: ("lp_mint", pool)
pub fn derive_lp_mint(pool: &Pubkey, program_id: &Pubkey) -> SdkResult<(Pubkey, u8)> {
    find_program_address(&[b"lp_mint", pool.as_ref()], program_id)
}

/// Farm PDA: ("farm", pool)
pub fn derive_farm(pool: &Pubkey, program_id: &Pubkey) -> SdkResult<(Pubkey, u8)> {
    find_program_address(&[b"farm", pool.as_ref()], program_id)
}

/// User farm position PDA: ("user_farm", farm, user)
pub fn derive_user_farm(
    farm: &Pubkey,
    user: &Pubkey,
    program_id: &Pubkey,
) -> SdkResult<(Pubkey, u8)> {
    find_program_address(&[b"user_farm", farm.as_ref(), user.as_ref()], program_id)
}

/// Lottery PDA: ("lottery", pool)
pub fn derive_lottery(pool: &Pubkey, program_id: &Pubkey) -> SdkResult<(Pubkey, u8)> {
    find_program_address(&[b"lottery", pool.as_ref()], program_id)
}

/// Lottery entry PDA: ("lottery_entry", lottery, user)
pub fn derive_lottery_entry(
    lottery: &Pubkey,
    user: &Pubkey,
    program_id: &Pubkey,
) -> SdkResult<(Pubkey, u8)> {
    find_program_address(&[b"lottery_entry", lottery.as_ref(), user.as_ref()], program_id)
}

/// Registry PDA: ("registry"); one per deployment
pub fn derive_registry(program_id: &Pubkey) -> SdkResult<(Pubkey, u8)> {
    find_program_address(&[b"registry"], program_id)
}

/// ML brain PDA: ("ml_brain", pool)
pub fn derive_ml_brain(pool: &Pubkey, program_id: &Pubkey) -> SdkResult<(Pubkey, u8)> {
    find_program_address(&[b"ml_brain", pool.as_ref()], program_id)
}

/// Governance proposal PDA: ("gov_proposal", pool, id as u64 LE)
pub fn derive_gov_proposal(
    pool: &Pubkey,
    proposal_id: u64,
    program_id: &Pubkey,
) -> SdkResult<(Pubkey, u8)> {
    find_program_address(
        &[b"gov_proposal", pool.as_ref(), &proposal_id.to_le_bytes()],
        program_id,
    )
}

/// Governance vote PDA: ("gov_vote", proposal, voter)
pub fn derive_gov_vote(
    proposal: &Pubkey,
    voter: &Pubkey,
    program_id: &Pubkey,
) -> SdkResult<(Pubkey, u8)> {
    find_program_address(&[b"gov_vote", proposal.as_ref(), voter.as_ref()], program_id)
}

/// Concentrated-liquidity pool PDA: ("cl_pool", pool)
pub fn derive_cl_pool(pool: &Pubkey, program_id: &Pubkey) -> SdkResult<(Pubkey, u8)> {
    find_program_address(&[b"cl_pool", pool.as_ref()], program_id)
}

/// Concentrated-liquidity position PDA: ("cl_position", cl_pool, id as u64 LE)
pub fn derive_cl_position(
    cl_pool: &Pubkey,
    position_id: u64,
    program_id: &Pubkey,
) -> SdkResult<(Pubkey, u8)> {
    find_program_address(
        &[b"cl_position", cl_pool.as_ref(), &position_id.to_le_bytes()],
        program_id,
    )
}

/// Orderbook PDA: ("orderbook", pool)
pub fn derive_orderbook(pool: &Pubkey, program_id: &Pubkey) -> SdkResult<(Pubkey, u8)> {
    find_program_address(&[b"orderbook", pool.as_ref()], program_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::program_id;

    fn mint(seed: u8) -> Pubkey {
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = seed.wrapping_add(i as u8);
        }
        Pubkey(bytes)
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let pid = program_id();
        let (a1, b1) = derive_pool(&mint(1), &mint(33), &pid).unwrap();
        let (a2, b2) = derive_pool(&mint(1), &mint(33), &pid).unwrap();
        assert_eq!(a1, a2);
        assert_eq!(b1, b2);
    }

    #[test]
    fn test_seed_order_matters() {
        let pid = program_id();
        let (ab, _) = derive_pool(&mint(1), &mint(33), &pid).unwrap();
        let (ba, _) = derive_pool(&mint(33), &mint(1), &pid).unwrap();
        assert_ne!(ab, ba);
    }

    #[test]
    fn test_find_create_round_trip() {
        let pid = program_id();
        let m0 = mint(1);
        let m1 = mint(33);
        let seeds: &[&[u8]] = &[b"pool", m0.as_ref(), m1.as_ref()];
        let (address, bump) = find_program_address(seeds, &pid).unwrap();
        assert_eq!(create_program_address(seeds, bump, &pid).unwrap(), address);
    }

    #[test]
    fn test_derived_addresses_are_off_curve() {
        let pid = program_id();
        for helper in [
            derive_registry(&pid).unwrap().0,
            derive_pool(&mint(1), &mint(33), &pid).unwrap().0,
            derive_farm(&mint(7), &pid).unwrap().0,
            derive_gov_proposal(&mint(7), 42, &pid).unwrap().0,
        ] {
            assert!(!is_on_curve(&helper.to_bytes()));
        }
    }

    #[test]
    fn test_program_id_override_changes_result() {
        let (default_addr, _) = derive_registry(&program_id()).unwrap();
        let (fork_addr, _) = derive_registry(&Pubkey([42; 32])).unwrap();
        assert_ne!(default_addr, fork_addr);
    }

    #[test]
    fn test_curve_points_are_recognized() {
        // The Ed25519 base point compresses to 0x58666666...66; a valid
        // point must be rejected as a PDA
        let mut base_point = [0x66u8; 32];
        base_point[0] = 0x58;
        assert!(is_on_curve(&base_point));

        // The identity (y = 1) is also a valid point
        let mut identity = [0u8; 32];
        identity[0] = 1;
        assert!(is_on_curve(&identity));
    }
}
