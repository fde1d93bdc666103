// In benches/codec_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use visual_codec::artifact::metadata::{Metadata, METADATA_FORMAT_VERSION};
use visual_codec::config::CodecConfig;
use visual_codec::kernels::grouping;
use visual_codec::pipeline::orchestrator::{decode_payload, encode_payload, EncodedPayload};
use visual_codec::utils::bytes_to_bits;

// --- Mock Data Generation ---

/// Generates a vector of highly compressible, run-heavy data.
fn generate_low_entropy_bytes(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let pattern = [0x00u8, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00];
    while data.len() < size {
        data.extend_from_slice(&pattern);
    }
    data.truncate(size);
    data
}

/// Generates a vector of less compressible, more random-looking data.
fn generate_high_entropy_bytes(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let pattern: Vec<u8> = (0..=255u8).map(|b| b.wrapping_mul(167).wrapping_add(13)).collect();
    while data.len() < size {
        data.extend_from_slice(&pattern);
    }
    data.truncate(size);
    data
}

fn metadata_for(encoded: &EncodedPayload, config: &CodecConfig) -> Metadata {
    Metadata {
        format_version: METADATA_FORMAT_VERSION,
        source_name: "bench.bin".to_string(),
        exp_factor: config.exp_factor,
        chunk_bits: config.chunk_bits,
        zero_pad: encoded.pads.zeros,
        one_pad: encoded.pads.ones,
        frame_pad: 0,
        grouped_bits: encoded.grouped_bits,
        payload_len: encoded.payload_len,
    }
}

// --- Benchmark Suite ---

const BENCH_DATA_SIZE: usize = 65_536; // 64 KB

fn bench_codec(c: &mut Criterion) {
    let low_entropy_data = generate_low_entropy_bytes(BENCH_DATA_SIZE);
    let high_entropy_data = generate_high_entropy_bytes(BENCH_DATA_SIZE);

    let low_bits = bytes_to_bits(&low_entropy_data);
    let high_bits = bytes_to_bits(&high_entropy_data);

    let config = CodecConfig::default();
    let encoded_low = encode_payload(&low_entropy_data, &config).unwrap();
    let encoded_high = encode_payload(&high_entropy_data, &config).unwrap();
    let metadata_low = metadata_for(&encoded_low, &config);
    let metadata_high = metadata_for(&encoded_high, &config);

    let mut group = c.benchmark_group("Codec Core");
    group.throughput(criterion::Throughput::Bytes(BENCH_DATA_SIZE as u64));

    group.bench_function("Group Kernel (Low Entropy)", |b| {
        b.iter(|| black_box(grouping::group(black_box(&low_bits), 8)))
    });
    group.bench_function("Group Kernel (High Entropy)", |b| {
        b.iter(|| black_box(grouping::group(black_box(&high_bits), 8)))
    });

    group.bench_function("Encode Pipeline (Low Entropy)", |b| {
        b.iter(|| black_box(encode_payload(black_box(&low_entropy_data), &config)))
    });
    group.bench_function("Encode Pipeline (High Entropy)", |b| {
        b.iter(|| black_box(encode_payload(black_box(&high_entropy_data), &config)))
    });

    group.bench_function("Decode Pipeline (Low Entropy)", |b| {
        b.iter(|| {
            black_box(decode_payload(
                black_box(&encoded_low.pixels),
                &encoded_low.key,
                &metadata_low,
            ))
        })
    });
    group.bench_function("Decode Pipeline (High Entropy)", |b| {
        b.iter(|| {
            black_box(decode_payload(
                black_box(&encoded_high.pixels),
                &encoded_high.key,
                &metadata_high,
            ))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
