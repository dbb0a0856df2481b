//! Bit interleaving of the two lattice integers.
//!
//! Latitude occupies the even bit positions and longitude the odd ones, so
//! the most significant bit of the combined hash is a longitude bit. Read
//! from the top, the hash alternates longitude, latitude, longitude, ...
//! which is the standard geohash bit order.

/// Spread a 32-bit value over the even bits of a 64-bit value.
#[inline]
pub const fn spread(value: u32) -> u64 {
    let mut r = value as u64;
    r = (r | (r << 16)) & 0x0000_ffff_0000_ffff;
    r = (r | (r << 8)) & 0x00ff_00ff_00ff_00ff;
    r = (r | (r << 4)) & 0x0f0f_0f0f_0f0f_0f0f;
    r = (r | (r << 2)) & 0x3333_3333_3333_3333;
    r = (r | (r << 1)) & 0x5555_5555_5555_5555;
    r
}

/// Collect the even bits of a 64-bit value into a packed 32-bit value.
#[inline]
pub const fn squash(value: u64) -> u32 {
    let mut r = value & 0x5555_5555_5555_5555;
    r = (r | (r >> 1)) & 0x3333_3333_3333_3333;
    r = (r | (r >> 2)) & 0x0f0f_0f0f_0f0f_0f0f;
    r = (r | (r >> 4)) & 0x00ff_00ff_00ff_00ff;
    r = (r | (r >> 8)) & 0x0000_ffff_0000_ffff;
    r = (r | (r >> 16)) & 0x0000_0000_ffff_ffff;
    r as u32
}

#[inline]
pub const fn interleave(lat: u32, lng: u32) -> u64 {
    spread(lat) | (spread(lng) << 1)
}

/// Inverse of [`interleave`], returns `(lat, lng)`.
#[inline]
pub const fn deinterleave(hash: u64) -> (u32, u32) {
    (squash(hash), squash(hash >> 1))
}

/// Split a total bit count between the axes as `(lat_bits, lng_bits)`.
///
/// Longitude is read first, so it receives the extra bit when the total
/// is odd.
#[inline]
pub const fn split_bits(total: u32) -> (u32, u32) {
    let lat_bits = total / 2;
    (lat_bits, total - lat_bits)
}
