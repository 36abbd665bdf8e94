pub const DECIMALS: u32 = 8;
