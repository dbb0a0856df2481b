//! Low-level codec primitives: lattice quantization, bit interleaving and
//! the base-N text form.

pub mod base;
pub mod interleave;
pub mod lattice;

pub use base::{ALPHABET, Encoding, decode_bits, encode_bits};
pub use interleave::{deinterleave, interleave, split_bits};
pub use lattice::{Axis, dequantize, quantize};
