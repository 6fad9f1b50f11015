//! Parse and format benchmarks: addresses per second
//!
//! Compares addrkit against `std::net::SocketAddr` for the notations both
//! accept, and measures the notations only addrkit accepts (bare IPv6 with a
//! default port, base-prefixed ports).

use addrkit::{parse_address, SockAddr};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::net::SocketAddr;

/// Inputs understood by both parsers.
const COMMON_INPUTS: &[(&str, &str)] = &[
    ("ipv4_port", "192.168.100.200:5075"),
    ("ipv6_port", "[fe80::1234:5678:9abc:def0]:5075"),
    ("mapped_port", "[::ffff:10.0.0.1]:65535"),
];

/// Inputs only addrkit understands.
const EXTENDED_INPUTS: &[(&str, &str)] = &[
    ("ipv4_bare", "10.0.0.1"),
    ("ipv6_bare", "2001:db8::8a2e:370:7334"),
    ("ipv4_hex_port", "10.0.0.1:0x13d3"),
];

fn addrkit_parse(c: &mut Criterion) {
    addrkit::dev_tracing::init_tracing();
    let mut group = c.benchmark_group("parse/addrkit");
    group.throughput(Throughput::Elements(1));

    for &(name, input) in COMMON_INPUTS.iter().chain(EXTENDED_INPUTS) {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| parse_address(black_box(input), 5075).unwrap());
        });
    }
    group.finish();
}

fn std_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse/std");
    group.throughput(Throughput::Elements(1));

    for &(name, input) in COMMON_INPUTS {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| black_box(input).parse::<SocketAddr>().unwrap());
        });
    }
    group.finish();
}

fn addrkit_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format/addrkit");
    group.throughput(Throughput::Elements(1));

    for &(name, input) in COMMON_INPUTS.iter().chain(EXTENDED_INPUTS) {
        let addr: SockAddr = parse_address(input, 5075).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &addr, |b, addr| {
            b.iter(|| black_box(addr).to_string());
        });
    }
    group.finish();
}

fn addrkit_predicates(c: &mut Criterion) {
    let addrs: Vec<SockAddr> = COMMON_INPUTS
        .iter()
        .chain(EXTENDED_INPUTS)
        .map(|&(_, input)| parse_address(input, 0).unwrap())
        .collect();

    c.bench_function("predicates/addrkit", |b| {
        b.iter(|| {
            addrs
                .iter()
                .filter(|a| a.is_any() || a.is_loopback() || a.is_multicast())
                .count()
        });
    });
}

criterion_group!(benches, addrkit_parse, std_parse, addrkit_format, addrkit_predicates);
criterion_main!(benches);
