#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header parsing and conversion must never panic, whatever the input
    let Ok(meta) = bmp565::parse_header(data) else {
        return;
    };
    let _ = bmp565::parse_header_with(data, bmp565::BmpPermissiveness::Strict);

    // No limits: the truncation check alone bounds the allocation by the input
    let direct = bmp565::convert_to_rgb565(data, &meta, meta.width, meta.height);
    let unlimited = bmp565::ConvertRequest::new(data).convert(enough::Unstoppable);
    assert_eq!(direct.is_ok(), unlimited.is_ok());

    let limits = bmp565::Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    let Ok(image) = bmp565::ConvertRequest::new(data)
        .with_limits(&limits)
        .convert(enough::Unstoppable)
    else {
        return;
    };

    assert_eq!(
        image.pixels().len(),
        meta.width as usize * meta.height as usize * 2
    );
    let direct = direct.expect("request succeeded, direct path must too");
    assert_eq!(image.pixels(), &direct[..]);
});
