//! Bulk pixel operations
//!
//! A single color is broadcast across a 256-bit register and stored eight
//! pixels at a time; the pixels that do not fill a whole register are
//! written one by one. AVX2 is used when the running CPU has it, otherwise
//! the same eight-lane chunking is done with plain slice copies.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Pixels written per vector store
pub const LANES: usize = 8;

/// Fill `dst` with `value`
///
///     use softraster::fill;
///
///     let mut px = vec![0u32; 17];
///     fill(&mut px, 0xff181818);
///     assert!(px.iter().all(|&p| p == 0xff181818));
///
pub fn fill(dst: &mut [u32], value: u32) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        if is_x86_feature_detected!("avx2") {
            // SAFETY: avx2 support was just detected.
            unsafe { fill_avx2(dst, value) };
            return;
        }
    }
    fill_lanes(dst, value);
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[target_feature(enable = "avx2")]
unsafe fn fill_avx2(dst: &mut [u32], value: u32) {
    let wide = _mm256_set1_epi32(value as i32);
    let mut chunks = dst.chunks_exact_mut(LANES);
    for chunk in &mut chunks {
        // Unaligned store of exactly LANES pixels inside `chunk`
        _mm256_storeu_si256(chunk.as_mut_ptr() as *mut __m256i, wide);
    }
    for px in chunks.into_remainder() {
        *px = value;
    }
}

fn fill_lanes(dst: &mut [u32], value: u32) {
    let wide = [value; LANES];
    let mut chunks = dst.chunks_exact_mut(LANES);
    for chunk in &mut chunks {
        chunk.copy_from_slice(&wide);
    }
    for px in chunks.into_remainder() {
        *px = value;
    }
}

/// One pixel at a time; the reference for [`fill`]
pub fn fill_scalar(dst: &mut [u32], value: u32) {
    for px in dst.iter_mut() {
        *px = value;
    }
}

/// Swap rows top to bottom in place
///
/// Only the first `width` pixels of each row move; padding past `width`
/// stays where it is.
pub fn flip_rows(pixels: &mut [u32], width: usize, height: usize, stride: usize) {
    for row in 0..height / 2 {
        let top = row * stride;
        let bottom = (height - row - 1) * stride;
        let (head, tail) = pixels.split_at_mut(bottom);
        head[top..top + width].swap_with_slice(&mut tail[..width]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remainder_lengths() {
        for &n in &[0usize, 1, 7, 8, 9, 15, 16, 17, 63] {
            let mut a = vec![1u32; n];
            let mut b = vec![1u32; n];
            fill(&mut a, 0xdead_beef);
            fill_scalar(&mut b, 0xdead_beef);
            assert_eq!(a, b, "n = {}", n);
        }
    }

    #[test]
    fn portable_path_matches() {
        let mut a = vec![0u32; 21];
        fill_lanes(&mut a, 5);
        assert!(a.iter().all(|&p| p == 5));
    }

    #[test]
    fn fill_leaves_neighbours() {
        let mut px = vec![0u32; 20];
        fill(&mut px[3..14], 9);
        assert_eq!(&px[..3], &[0, 0, 0]);
        assert!(px[3..14].iter().all(|&p| p == 9));
        assert!(px[14..].iter().all(|&p| p == 0));
    }

    #[test]
    fn flip_odd_height_keeps_middle() {
        // 2 wide, stride 3, 3 rows
        let mut px = vec![1, 1, 0, 2, 2, 0, 3, 3, 0];
        flip_rows(&mut px, 2, 3, 3);
        assert_eq!(px, vec![3, 3, 0, 2, 2, 0, 1, 1, 0]);
    }
}
