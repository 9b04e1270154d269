use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tilejson::{ExtendedTileJson, decode, encode};

const OSM: &str = include_str!("../../testdata/osm.json");

fn large_document() -> String {
	let layers: Vec<String> = (0..200)
		.map(|i| {
			format!(
				r#"{{"id":"layer_{i}","fields":{{"name":"the name","kind":"the kind"}},"minzoom":{},"maxzoom":14}}"#,
				i % 10
			)
		})
		.collect();
	format!(
		r#"{{"tilejson":"3.0.0","tiles":["https://a/{{z}}/{{x}}/{{y}}.pbf"],"minzoom":0,"maxzoom":14,"vector_layers":[{}],"custom":{{"list":[1,2.5,null,"x"]}}}}"#,
		layers.join(",")
	)
}

fn benchmark_decode(c: &mut Criterion) {
	let large = large_document();

	c.bench_function("decode_osm", |b| {
		b.iter(|| decode(black_box(OSM.as_bytes())).unwrap());
	});
	c.bench_function("decode_200_layers", |b| {
		b.iter(|| decode(black_box(large.as_bytes())).unwrap());
	});
}

fn benchmark_encode(c: &mut Criterion) {
	let tilejson: ExtendedTileJson = decode(OSM.as_bytes()).unwrap();

	c.bench_function("encode_osm", |b| {
		b.iter(|| encode(black_box(&tilejson)));
	});
}

criterion_group!(
	name = benches;
	config = Criterion::default().significance_level(0.1).sample_size(50);
	targets = benchmark_decode, benchmark_encode
);
criterion_main!(benches);
