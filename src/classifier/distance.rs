//! Distance between two descriptors of the same shape.
use crate::pdc::{Descriptor, PeripheralPoint};

/// Cost of one aligned position.
///
/// Present/present costs the L1 difference of the ray lengths, present/absent
/// costs `mismatch_penalty`, absent/absent is free.
#[inline]
pub fn point_cost(
    a: Option<&PeripheralPoint>,
    b: Option<&PeripheralPoint>,
    mismatch_penalty: u64,
) -> u64 {
    match (a, b) {
        (Some(a), Some(b)) => a
            .rays
            .iter()
            .zip(b.rays.iter())
            .map(|(&x, &y)| u64::from(x.abs_diff(y)))
            .sum(),
        (None, None) => 0,
        _ => mismatch_penalty,
    }
}

/// Sum of [`point_cost`] over all aligned positions. Symmetric, and zero for
/// identical descriptors.
///
/// Panics if the descriptors were extracted with different shapes.
pub fn descriptor_distance(a: &Descriptor, b: &Descriptor, mismatch_penalty: u64) -> u64 {
    assert_eq!(
        a.len(),
        b.len(),
        "descriptors of different shapes cannot be compared"
    );
    a.points()
        .iter()
        .zip(b.points())
        .map(|(pa, pb)| point_cost(pa.as_ref(), pb.as_ref(), mismatch_penalty))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::BinaryGrid;
    use crate::pdc::{extract_grid, PdcParams};

    fn descriptor(f: impl FnMut(usize, usize) -> bool) -> Descriptor {
        extract_grid(BinaryGrid::from_fn(16, f), &PdcParams::new(16, 3))
    }

    #[test]
    fn point_cost_cases() {
        let a = PeripheralPoint {
            index: 0,
            rays: [0, 0, 5, 5, 5, 0, 0, 0],
        };
        let b = PeripheralPoint {
            index: 3,
            rays: [0, 0, 2, 2, 5, 0, 3, 0],
        };
        assert_eq!(point_cost(Some(&a), Some(&b), 100), 9);
        assert_eq!(point_cost(Some(&a), None, 100), 100);
        assert_eq!(point_cost(None, Some(&b), 100), 100);
        assert_eq!(point_cost(None, None, 100), 0);
    }

    #[test]
    fn distance_is_zero_on_self_and_symmetric() {
        let ring = descriptor(|r, c| {
            let (dr, dc) = (r as i32 - 8, c as i32 - 8);
            (20..50).contains(&(dr * dr + dc * dc))
        });
        let bar = descriptor(|_, c| (6..10).contains(&c));
        let blank = descriptor(|_, _| false);
        for d in [&ring, &bar, &blank] {
            assert_eq!(descriptor_distance(d, d, 64), 0);
        }
        assert_eq!(
            descriptor_distance(&ring, &bar, 64),
            descriptor_distance(&bar, &ring, 64)
        );
        assert!(descriptor_distance(&ring, &bar, 64) > 0);
        assert_eq!(
            descriptor_distance(&bar, &blank, 64),
            bar.present_count() as u64 * 64
        );
    }
}
