use crate::basis::{Icon, Rgba};

/// トレイアイコンの一辺のピクセル数.
pub(crate) const EDGE: u32 = 16;

/// 座標 `(x, y)` が T 字グリフに含まれるかどうかを判定する.
///
/// 上部の横棒は y = 3, 4 かつ 2 <= x <= 13, 縦棒は x = 7, 8 かつ 4 <= y <= 13 の矩形.
pub(crate) fn covers(x: u32, y: u32) -> bool {
    let bar = matches!(y, 3 | 4) && (2..=13).contains(&x);
    let stem = matches!(x, 7 | 8) && (4..=13).contains(&y);
    bar || stem
}

/// グリフを不透明な白, 背景を完全な透明としてピクセルバッファへ展開する.
pub(crate) fn rasterize() -> Icon {
    let data = (0..EDGE)
        .map(|y| {
            (0..EDGE)
                .map(|x| {
                    if covers(x, y) {
                        Rgba::WHITE
                    } else {
                        Rgba::TRANSPARENT
                    }
                })
                .collect()
        })
        .collect();
    Icon {
        width: EDGE,
        height: EDGE,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_matches_both_strokes() {
        for y in 0..EDGE {
            for x in 0..EDGE {
                let in_bar = (y == 3 || y == 4) && 2 <= x && x <= 13;
                let in_stem = (x == 7 || x == 8) && 4 <= y && y <= 13;
                assert_eq!(covers(x, y), in_bar || in_stem, "at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn rasterized_pixels_are_white_or_transparent() {
        let icon = rasterize();
        assert_eq!(icon.data.len(), EDGE as usize);
        for row in &icon.data {
            assert_eq!(row.len(), EDGE as usize);
            for &px in row {
                assert!(px == Rgba::WHITE || px == Rgba::TRANSPARENT);
            }
        }
    }

    #[test]
    fn opaque_pixel_count() {
        // 12x2 の横棒と 2x10 の縦棒が (7, 4) と (8, 4) で重なる
        let icon = rasterize();
        let opaque = icon
            .data
            .iter()
            .flatten()
            .filter(|&&px| px == Rgba::WHITE)
            .count();
        assert_eq!(opaque, 12 * 2 + 2 * 10 - 2);
    }
}
