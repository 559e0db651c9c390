/// Initialization parameters for the graphics context.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or driver requirement exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextInit {
    /// Minimum bits for the red channel of the negotiated framebuffer.
    pub red_bits: u8,

    /// Minimum bits for the green channel.
    pub green_bits: u8,

    /// Minimum bits for the blue channel.
    pub blue_bits: u8,

    /// Only accept hardware-accelerated configurations.
    pub hardware_accelerated: bool,

    /// OpenGL ES version the context must support, as `(major, minor)`.
    ///
    /// Must match the `#version` line of the compiled-in shaders.
    pub gles_version: (u8, u8),
}

impl Default for ContextInit {
    fn default() -> Self {
        Self {
            red_bits: 8,
            green_bits: 8,
            blue_bits: 8,
            hardware_accelerated: true,
            gles_version: (3, 2),
        }
    }
}
