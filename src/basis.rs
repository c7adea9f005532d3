/// `Rgba` は 8 ビット 4 チャンネルの RGBA カラーを表す.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rgba {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

impl std::fmt::Debug for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl Rgba {
    /// 完全に透明なピクセル.
    pub(crate) const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// 不透明な白のピクセル.
    pub(crate) const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    pub(crate) fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// `Icon` は生成するアイコンのピクセルバッファを表す. `data` は行ごとのピクセル列.
#[derive(Debug)]
pub(crate) struct Icon {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) data: Vec<Vec<Rgba>>,
}
