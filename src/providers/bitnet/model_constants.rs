//! BitNet Model Constants
//!
//! Model ids served by a BitNet inference server, so callers do not have to
//! hardcode strings.

/// BitNet b1.58 2B - Official Microsoft model
///
/// 2B parameters, trained on 4T tokens.
/// Context window: 4,096 tokens
pub const BITNET_B1_58_2B: &str = "bitnet-b1.58-2b";

/// BitNet b1.58 Large - 0.7B parameters, fastest of the family
///
/// Context window: 2,048 tokens
pub const BITNET_B1_58_LARGE: &str = "bitnet-b1.58-large";

/// BitNet b1.58 3B - 3.3B parameters
///
/// Context window: 4,096 tokens
pub const BITNET_B1_58_3B: &str = "bitnet-b1.58-3b";

/// Llama3 8B with weights quantized to 1.58 bits
///
/// Context window: 8,192 tokens
pub const LLAMA3_8B_1_58BIT: &str = "llama3-8b-1.58bit";

/// All catalog models, in catalog order
pub const ALL: &[&str] = &[
    BITNET_B1_58_2B,
    BITNET_B1_58_LARGE,
    BITNET_B1_58_3B,
    LLAMA3_8B_1_58BIT,
];
