use crate::Tick;

/// Signed distance from `a` to `b` on the wrapping tick circle.
/// `wrapping_diff(65535, 0)` is `1`.
pub fn wrapping_diff(a: Tick, b: Tick) -> i16 {
    b.wrapping_sub(a) as i16
}

/// Whether `s1` comes after `s2` once wrap-around is accounted for
pub fn sequence_greater_than(s1: Tick, s2: Tick) -> bool {
    wrapping_diff(s2, s1) > 0
}

pub fn sequence_less_than(s1: Tick, s2: Tick) -> bool {
    sequence_greater_than(s2, s1)
}
