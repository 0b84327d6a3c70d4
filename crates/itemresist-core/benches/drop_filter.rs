//! Drop filter throughput over a large explosion

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use itemresist_core::{
    AffectedEntity, BlastContext, ClassificationSets, DropFilter, EntityId, Item, ItemDrop,
    ItemStack, MaterialId, Materials,
};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use std::hint::black_box;

fn affected_entities(count: usize, materials: &Materials) -> Vec<AffectedEntity> {
    let palette: Vec<MaterialId> = materials.iter().map(|def| def.id).collect();

    (0..count)
        .map(|i| {
            let id = EntityId(i as u64);
            match i % 8 {
                0 => AffectedEntity::Other { id },
                1 => AffectedEntity::ItemDrop(ItemDrop::new(
                    id,
                    ItemStack::new(Item::Other("stick".to_string()), 1),
                )),
                _ => AffectedEntity::ItemDrop(ItemDrop::new(
                    id,
                    ItemStack::block(palette[i % palette.len()], 1),
                )),
            }
        })
        .collect()
}

fn bench_retain_survivors(c: &mut Criterion) {
    let materials = Materials::new();
    let sets = ClassificationSets::new([MaterialId::BEDROCK], [MaterialId::OBSIDIAN]);
    let filter = DropFilter::new(&sets, &materials);
    let mut group = c.benchmark_group("retain_survivors");

    for count in [64, 1024, 16384] {
        let entities = affected_entities(count, &materials);
        group.bench_with_input(BenchmarkId::from_parameter(count), &entities, |b, entities| {
            let mut rng = Xoshiro256StarStar::seed_from_u64(42);
            b.iter(|| {
                let mut drops = entities.clone();
                let mut ctx = BlastContext::new(4.0, &mut rng);
                black_box(filter.retain_survivors(&mut drops, &mut ctx))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_retain_survivors);
criterion_main!(benches);
