use {
    crate::basis::Icon,
    anyhow::Result,
    flate2::{write::ZlibEncoder, Compression, Crc},
    std::io::Write,
};


// http://www.libpng.org/pub/png/spec/1.2/PNG-Structure.html
const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// `icon` を最小構成の PNG バイト列 (シグネチャ + IHDR + IDAT + IEND) へ直列化する.
pub(crate) fn to_png(icon: &Icon) -> Result<Vec<u8>> {
    let mut out = SIGNATURE.to_vec();

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&icon.width.to_be_bytes());
    ihdr.extend_from_slice(&icon.height.to_be_bytes());
    // bit depth 8, color type 6 (RGBA), compression 0, filter 0, interlace 0
    ihdr.extend_from_slice(&[8, 6, 0, 0, 0]);

    put_chunk(&mut out, b"IHDR", &ihdr);
    put_chunk(&mut out, b"IDAT", &deflate(&scanlines(icon))?);
    put_chunk(&mut out, b"IEND", &[]);
    Ok(out)
}

/// 各行の先頭にフィルタタイプ 0 のバイトを付けて生のピクセル列に展開する.
fn scanlines(icon: &Icon) -> Vec<u8> {
    let mut raw = Vec::with_capacity((icon.width as usize * 4 + 1) * icon.height as usize);
    for row in &icon.data {
        raw.push(0);
        for &px in row {
            raw.extend_from_slice(&px.channels());
        }
    }
    raw
}

fn deflate(raw: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(raw)?;
    Ok(encoder.finish()?)
}

/// チャンクを長さ, タグ, ペイロード, タグとペイロードの CRC-32 の順で書き足す.
fn put_chunk(out: &mut Vec<u8>, tag: &[u8; 4], payload: &[u8]) {
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(payload);

    let mut crc = Crc::new();
    crc.update(tag);
    crc.update(payload);
    out.extend_from_slice(&crc.sum().to_be_bytes());
}
