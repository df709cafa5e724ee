//! Mathematical constants

/// 0.5 ln(2π)
pub const HALF_LN_2PI: f64 = 0.918_938_533_204_672_7;
/// 0.5 ln(π)
pub const HALF_LN_PI: f64 = 0.572_364_942_924_700_1;
