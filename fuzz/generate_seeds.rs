#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // PBM 3x2, plain and raw
    fs::write(format!("{dir}/pbm_plain_3x2.pbm"), b"P1\n3 2\n1 0 1\n0 1 0\n").unwrap();
    fs::write(format!("{dir}/pbm_raw_10x2.pbm"), b"P4\n10 2\n\xff\xc0\x00\x40").unwrap();

    // PGM 3x2, plain with comments and raw
    let pgm_plain = b"P2\n# seed\n3 2\n255\n0 64 128\n# row\n192 255 100\n";
    fs::write(format!("{dir}/pgm_plain_3x2.pgm"), pgm_plain).unwrap();
    let pgm = b"P5\n3 2\n255\n\x00\x40\x80\xc0\xff\x64";
    fs::write(format!("{dir}/pgm_3x2.pgm"), pgm).unwrap();

    // PPM 2x2, plain (tokens wrap across lines) and raw
    let ppm_plain = b"P3\n2 2\n100\n100 0 0\n0 100\n0 0 0 100 50 50 50\n";
    fs::write(format!("{dir}/ppm_plain_2x2.ppm"), ppm_plain).unwrap();
    let ppm = b"P6\n2 2\n255\n\xff\x00\x00\x00\xff\x00\x00\x00\xff\x80\x80\x80";
    fs::write(format!("{dir}/ppm_2x2.ppm"), ppm).unwrap();

    // CRLF header
    fs::write(format!("{dir}/pgm_crlf.pgm"), b"P5\r\n1 1\r\n255\r\n\x0d").unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_p6.bin"), b"P6").unwrap();
    fs::write(format!("{dir}/p1_short_row.bin"), b"P1\n3 1\n1 0\n").unwrap();
    fs::write(format!("{dir}/p2_wide_sample.bin"), b"P2\n1 1\n255\n300\n").unwrap();
    fs::write(format!("{dir}/p6_maxval_16bit.bin"), b"P6\n1 1\n65535\n\0\0\0\0\0\0").unwrap();

    println!("Generated seed corpus in {dir}/");
}
