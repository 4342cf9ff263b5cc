use super::{K160, ROUNDS};

#[inline(always)]
pub fn ch(b: u32, c: u32, d: u32) -> u32 {
    (b & c) ^ ((!b) & d)
}

#[inline(always)]
pub fn parity(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

#[inline(always)]
pub fn maj(b: u32, c: u32, d: u32) -> u32 {
    (b & c) ^ (b & d) ^ (c & d)
}

/// Round function for the 20-round stage `stage` (0..4).
#[inline(always)]
fn stage_fn(stage: usize, b: u32, c: u32, d: u32) -> u32 {
    match stage {
        0 => ch(b, c, d),
        2 => maj(b, c, d),
        _ => parity(b, c, d),
    }
}

/// Expands schedule word `i` (for `i >= 16`) in a rolling 16-word window.
#[inline(always)]
fn expand(w: &mut [u32; 16], i: usize) -> u32 {
    if i >= 16 {
        let mixed = w[(i - 3) & 15] ^ w[(i - 8) & 15] ^ w[(i - 14) & 15] ^ w[(i - 16) & 15];
        w[i & 15] = mixed.rotate_left(1);
    }

    w[i & 15]
}

pub fn all_rounds(state: &mut [u32; 5], mut w: [u32; 16]) {
    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for i in 0..ROUNDS {
        let stage = i / 20;
        let wi = expand(&mut w, i);

        let t = a
            .rotate_left(5)
            .wrapping_add(stage_fn(stage, b, c, d))
            .wrapping_add(e)
            .wrapping_add(wi)
            .wrapping_add(K160[stage]);

        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = t;
    }

    for (s, v) in state.iter_mut().zip([a, b, c, d, e]) {
        *s = s.wrapping_add(v);
    }
}
