/// Edge weight type. Unsigned, so negative weights cannot be represented.
pub type Weight = u32;
/// Path length type. Wide enough to hold the sum of `u32::MAX` edges of maximal weight.
pub type Distance = u64;
