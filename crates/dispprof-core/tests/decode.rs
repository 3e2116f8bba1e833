//! End-to-end decode tests over synthetic in-memory profiles

use dispprof_core::colorimetry::D50;
use dispprof_core::{ColorProfile, ProfileError, TagSignature, ToneCurve};

/// sRGB primaries at their native D65 white, as matrix columns
const SRGB_RED: [f64; 3] = [0.4124564, 0.2126729, 0.0193339];
const SRGB_GREEN: [f64; 3] = [0.3575761, 0.7151522, 0.1191920];
const SRGB_BLUE: [f64; 3] = [0.1804375, 0.0721750, 0.9503041];

/// Assemble a profile from tag bodies: header, directory at 0x84, data
fn build_profile(tags: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
    let table_end = 0x84 + 12 * tags.len();
    let mut data = vec![0u8; table_end];

    data[0x0C..0x10].copy_from_slice(b"mntr");
    data[0x10..0x18].copy_from_slice(b"RGB XYZ ");
    data[0x24..0x28].copy_from_slice(b"acsp");
    data[0x80..0x84].copy_from_slice(&(tags.len() as u32).to_be_bytes());

    let mut offset = table_end;
    for (i, (sig, body)) in tags.iter().enumerate() {
        let entry = 0x84 + 12 * i;
        data[entry..entry + 4].copy_from_slice(*sig);
        data[entry + 4..entry + 8].copy_from_slice(&(offset as u32).to_be_bytes());
        data[entry + 8..entry + 12].copy_from_slice(&(body.len() as u32).to_be_bytes());
        offset += body.len();
    }
    for (_, body) in tags {
        data.extend_from_slice(body);
    }
    data
}

fn xyz_tag(v: [f64; 3]) -> Vec<u8> {
    let mut d = Vec::new();
    d.extend_from_slice(b"XYZ ");
    d.extend_from_slice(&[0u8; 4]);
    for c in v {
        let raw = (c * 65536.0).round() as i32;
        d.extend_from_slice(&raw.to_be_bytes());
    }
    d
}

fn gamma_tag(gamma: f64) -> Vec<u8> {
    let mut d = Vec::new();
    d.extend_from_slice(b"curv");
    d.extend_from_slice(&[0u8; 4]);
    d.extend_from_slice(&1u32.to_be_bytes());
    d.extend_from_slice(&((gamma * 256.0).round() as u16).to_be_bytes());
    d
}

fn vcgt_tag(entry_size: u16, entries: &[u8]) -> Vec<u8> {
    let mut d = Vec::new();
    d.extend_from_slice(b"vcgt");
    d.extend_from_slice(&[0u8; 4]);
    d.extend_from_slice(&0u32.to_be_bytes()); // table type
    d.extend_from_slice(&3u16.to_be_bytes());
    let count = entries.len() as u16 / entry_size;
    d.extend_from_slice(&count.to_be_bytes());
    d.extend_from_slice(&entry_size.to_be_bytes());
    for _ in 0..3 {
        d.extend_from_slice(entries);
    }
    d
}

/// mft2 body for a 2-point grid generated from the sRGB primaries with
/// identity pre/post tables
fn a2b1_tag(entries: usize) -> Vec<u8> {
    let mut d = Vec::new();
    d.extend_from_slice(b"mft2");
    d.extend_from_slice(&[0u8; 4]);
    d.push(3);
    d.push(3);
    d.push(2); // grid points
    d.push(0);
    for _ in 0..9 {
        d.extend_from_slice(&0u32.to_be_bytes());
    }
    d.extend_from_slice(&(entries as u16).to_be_bytes());
    d.extend_from_slice(&(entries as u16).to_be_bytes());

    let ramp: Vec<u16> = (0..entries)
        .map(|j| (j * 65535 / (entries - 1)) as u16)
        .collect();
    for _ in 0..3 {
        for &v in &ramp {
            d.extend_from_slice(&v.to_be_bytes());
        }
    }

    for red in 0..2 {
        for green in 0..2 {
            for blue in 0..2 {
                for k in 0..3 {
                    let v = red as f64 * SRGB_RED[k]
                        + green as f64 * SRGB_GREEN[k]
                        + blue as f64 * SRGB_BLUE[k];
                    d.extend_from_slice(&((v * 32768.0).round() as u16).to_be_bytes());
                }
            }
        }
    }

    for _ in 0..3 {
        for &v in &ramp {
            d.extend_from_slice(&v.to_be_bytes());
        }
    }
    d
}

fn srgb_matrix_trc_tags() -> Vec<(&'static [u8; 4], Vec<u8>)> {
    vec![
        (b"rXYZ", xyz_tag(SRGB_RED)),
        (b"gXYZ", xyz_tag(SRGB_GREEN)),
        (b"bXYZ", xyz_tag(SRGB_BLUE)),
        (b"rTRC", gamma_tag(1.0)),
        (b"gTRC", gamma_tag(1.0)),
        (b"bTRC", gamma_tag(1.0)),
    ]
}

#[test]
fn matrix_trc_profile_maps_white_to_d50() {
    let data = build_profile(&srgb_matrix_trc_tags());
    let profile = ColorProfile::decode(&data).unwrap();

    let white = profile.matrix.multiply_vec([1.0, 1.0, 1.0]);
    for i in 0..3 {
        assert!(
            (white[i] - D50[i]).abs() < 1e-9,
            "white[{i}] = {}",
            white[i]
        );
    }
}

#[test]
fn unit_gamma_curves_are_identity() {
    let data = build_profile(&srgb_matrix_trc_tags());
    let profile = ColorProfile::decode(&data).unwrap();

    for trc in &profile.trcs {
        for i in 0..=100 {
            let x = i as f64 / 100.0;
            assert!((trc.sample(x) - x).abs() < 1e-12);
        }
    }
    assert!(profile.vcgt.is_none());
}

#[test]
fn decoding_is_deterministic() {
    let data = build_profile(&srgb_matrix_trc_tags());
    let a = ColorProfile::decode(&data).unwrap();
    let b = ColorProfile::decode(&data).unwrap();
    // Bit-identical matrices and curve tables
    assert_eq!(a, b);
}

#[test]
fn altered_magic_fails() {
    let mut data = build_profile(&srgb_matrix_trc_tags());
    data[0x24] = b'X';
    assert_eq!(
        ColorProfile::decode(&data).unwrap_err(),
        ProfileError::NotAnIccProfile
    );
}

#[test]
fn trc_with_wrong_type_fails() {
    let mut tags = srgb_matrix_trc_tags();
    let mut bad = gamma_tag(2.2);
    bad[0..4].copy_from_slice(b"para");
    tags[4] = (b"gTRC", bad);

    let data = build_profile(&tags);
    assert_eq!(
        ColorProfile::decode(&data).unwrap_err(),
        ProfileError::NotCurveType(TagSignature::GREEN_TRC)
    );
}

#[test]
fn five_of_six_required_tags_fails() {
    let mut tags = srgb_matrix_trc_tags();
    tags.truncate(5);
    // A trailing unrecognized tag keeps the scan going to the end
    tags.push((b"desc", vec![0u8; 8]));

    let data = build_profile(&tags);
    assert_eq!(
        ColorProfile::decode(&data).unwrap_err(),
        ProfileError::MissingRequiredTags
    );
}

#[test]
fn gray_trc_is_not_a_required_tag() {
    let mut tags = srgb_matrix_trc_tags();
    tags.push((b"kTRC", gamma_tag(1.8)));

    let data = build_profile(&tags);
    // Decodes fine: kTRC is ignored, the six r/g/b tags are all present
    let profile = ColorProfile::decode(&data).unwrap();
    assert!(matches!(profile.trcs[0], ToneCurve::Gamma(_)));
}

#[test]
fn tag_out_of_bounds_fails() {
    let mut data = build_profile(&srgb_matrix_trc_tags());
    // Inflate the recorded size of the last tag past the file end
    let entry = 0x84 + 12 * 5;
    data[entry + 8..entry + 12].copy_from_slice(&0xFFFF_FFFFu32.to_be_bytes());

    assert!(matches!(
        ColorProfile::decode(&data).unwrap_err(),
        ProfileError::TagOutOfBounds { .. }
    ));
}

#[test]
fn lut_profile_maps_white_to_d50() {
    let data = build_profile(&[(b"A2B1", a2b1_tag(32))]);
    let profile = ColorProfile::decode(&data).unwrap();

    let white = profile.matrix.multiply_vec([1.0, 1.0, 1.0]);
    for i in 0..3 {
        assert!(
            (white[i] - D50[i]).abs() < 1e-9,
            "white[{i}] = {}",
            white[i]
        );
    }
}

#[test]
fn lut_tone_curves_end_at_one_and_stay_nonnegative() {
    let data = build_profile(&[(b"A2B1", a2b1_tag(32))]);
    let profile = ColorProfile::decode(&data).unwrap();

    for trc in &profile.trcs {
        let ToneCurve::Samples(samples) = trc else {
            panic!("LUT path must produce sampled curves");
        };
        assert_eq!(*samples.last().unwrap(), 1.0);
        assert!(samples.iter().all(|&s| s >= 0.0));
    }
}

#[test]
fn lut_mode_is_sticky_for_later_tags() {
    // TRC and XYZ tags after A2B1 must not disturb the reduced model
    let with_extras = build_profile(&[
        (b"A2B1", a2b1_tag(32)),
        (b"rXYZ", xyz_tag([0.5, 0.5, 0.5])),
        (b"rTRC", gamma_tag(2.2)),
    ]);
    let plain = build_profile(&[(b"A2B1", a2b1_tag(32))]);

    let a = ColorProfile::decode(&with_extras).unwrap();
    let b = ColorProfile::decode(&plain).unwrap();
    assert_eq!(a, b);
}

#[test]
fn lut_profile_without_required_tags_decodes() {
    // A pure LUT profile has none of the six matrix/TRC tags
    let data = build_profile(&[(b"A2B1", a2b1_tag(16))]);
    assert!(ColorProfile::decode(&data).is_ok());
}

#[test]
fn vcgt_8bit_entries_are_widened() {
    let mut tags = srgb_matrix_trc_tags();
    tags.push((b"vcgt", vcgt_tag(1, &[0, 128, 255])));

    let data = build_profile(&tags);
    let profile = ColorProfile::decode(&data).unwrap();

    let vcgt = profile.vcgt.expect("vcgt decoded");
    for curve in &vcgt {
        let ToneCurve::Lut { table, .. } = curve else {
            panic!("expected lut curve");
        };
        assert_eq!(table, &[0, 32896, 65535]);
    }
}

#[test]
fn vcgt_entry_size_4_fails() {
    let mut tags = srgb_matrix_trc_tags();
    let mut body = Vec::new();
    body.extend_from_slice(b"vcgt");
    body.extend_from_slice(&[0u8; 4]);
    body.extend_from_slice(&0u32.to_be_bytes());
    body.extend_from_slice(&3u16.to_be_bytes());
    body.extend_from_slice(&2u16.to_be_bytes());
    body.extend_from_slice(&4u16.to_be_bytes()); // entry size
    body.extend_from_slice(&[0u8; 24]);
    tags.push((b"vcgt", body));

    let data = build_profile(&tags);
    assert_eq!(
        ColorProfile::decode(&data).unwrap_err(),
        ProfileError::UnsupportedEntrySize(4)
    );
}

#[test]
fn truncated_profile_fails_cleanly() {
    let data = build_profile(&srgb_matrix_trc_tags());
    // Cut into the tag data region; directory entries now point past the end
    let cut = &data[..0x84 + 12 * 6 + 4];
    assert!(matches!(
        ColorProfile::decode(cut).unwrap_err(),
        ProfileError::TagOutOfBounds { .. }
    ));
}
