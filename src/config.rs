// config.rs — Compile-time configuration constants.
//
// A flat module of defaults the CLI layer can override at runtime via
// flags, kept separate from the algorithms that consume them.

// Default window size in bytes, used when `-w` is not given.
pub const WINDOW_SIZE_DEFAULT: usize = 1 << 20;

// Karp-Rabin fingerprint base (`B`).
pub const FP_BASE: u64 = 256;

// Power-sampling stride for the fingerprint view (`K`). Every
// K-th power of FP_BASE is memoised; intermediate powers cost at most K-1
// extra multiplications.
pub const FP_SAMPLE_STRIDE: usize = 8;

// Mersenne prime modulus, 2^61 - 1.
pub const FP_MODULUS: u64 = (1u64 << 61) - 1;

// Default bucket-width exponent for the marked-position dictionary (`b` in
// the dictionary; production bucket width is 2^b).
pub const DICTIONARY_BUCKET_BITS: u32 = 12;
