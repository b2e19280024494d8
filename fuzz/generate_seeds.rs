#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp(width: i32, height: i32, bits: u16, compression: u32) -> Vec<u8> {
    let stride = ((width.unsigned_abs() as usize * bits as usize).div_ceil(32)) * 4;
    let size = 54 + stride * height.unsigned_abs() as usize;
    let mut bmp = vec![0u8; size];
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&(size as u32).to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&bits.to_le_bytes());
    bmp[30..34].copy_from_slice(&compression.to_le_bytes());
    for (i, b) in bmp[54..].iter_mut().enumerate() {
        *b = (i * 37) as u8;
    }
    bmp
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_convert";
    fs::create_dir_all(dir).unwrap();

    fs::write(format!("{dir}/bgr_3x2.bmp"), bmp(3, 2, 24, 0)).unwrap();
    fs::write(format!("{dir}/bgra_2x2.bmp"), bmp(2, 2, 32, 0)).unwrap();
    fs::write(format!("{dir}/bgr_topdown_1x3.bmp"), bmp(1, -3, 24, 0)).unwrap();
    fs::write(format!("{dir}/bitfields_2x1.bmp"), bmp(2, 1, 32, 3)).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut cut = bmp(4, 4, 24, 0);
    cut.truncate(60);
    fs::write(format!("{dir}/truncated_rows.bmp"), cut).unwrap();

    println!("Generated seed corpus in {dir}/");
}
