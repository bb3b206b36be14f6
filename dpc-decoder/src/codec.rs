use byteorder::{ByteOrder as _, NativeEndian};

/// Reinterprets one pixel's R,G,B,A bytes, in channel order, as the raw
/// bit pattern of an IEEE-754 single. The encoder packed floats with the
/// platform's native byte order, so no swapping and no validation here:
/// NaN and Inf patterns pass through and are filtered downstream.
pub fn unpack_channels(channels: [u8; 4]) -> f32 {
    NativeEndian::read_f32(&channels)
}

/// Exact inverse of [`unpack_channels`].
pub fn pack_channels(value: f32) -> [u8; 4] {
    let mut channels = [0u8; 4];
    NativeEndian::write_f32(&mut channels, value);
    channels
}
