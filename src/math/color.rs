/// Four-channel floating point color, laid out exactly as an RGBA32F texel
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Pixel {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Pixel {
    /// Opaque black
    pub const BLACK: Pixel = Pixel::rgb(0.0, 0.0, 0.0);

    /// Size of one pixel in bytes
    pub const BYTES: usize = std::mem::size_of::<Pixel>();

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Half-precision channels for devices without filterable 32-bit float textures
    pub fn to_f16(self) -> [half::f16; 4] {
        self.to_array().map(half::f16::from_f32)
    }
}

impl Default for Pixel {
    fn default() -> Self {
        Self::BLACK
    }
}
