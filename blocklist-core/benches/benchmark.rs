use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

use blocklist_core::{BlockList, MemoryBlock};

use blocklist_test::Blocks;

//  Number of blocks in the list under measurement.
const LEN: usize = 1_024;

//  Insertion at either end.
//
//  Both ends are expected to be O(1), independently of the length of the list.
fn insert_ends(c: &mut Criterion) {
    let pool = Blocks::distinct(LEN);
    let block = MemoryBlock::new(0, 0);

    c.bench_function("insert_first", |b| b.iter_batched_ref(
        || pool.iter().collect::<BlockList<'_, _>>(),
        |list| list.insert_first(black_box(&block)),
        BatchSize::SmallInput,
    ));

    c.bench_function("insert_last", |b| b.iter_batched_ref(
        || pool.iter().collect::<BlockList<'_, _>>(),
        |list| list.insert_last(black_box(&block)),
        BatchSize::SmallInput,
    ));
}

//  Insertion and removal in the middle, O(index).
fn middle(c: &mut Criterion) {
    let pool = Blocks::distinct(LEN);
    let block = MemoryBlock::new(0, 0);

    c.bench_function("insert_at middle", |b| b.iter_batched_ref(
        || pool.iter().collect::<BlockList<'_, _>>(),
        |list| list.insert_at(black_box(LEN / 2), &block),
        BatchSize::SmallInput,
    ));

    c.bench_function("remove_at middle", |b| b.iter_batched_ref(
        || pool.iter().collect::<BlockList<'_, _>>(),
        |list| list.remove_at(black_box(LEN / 2)).map(|_| ()),
        BatchSize::SmallInput,
    ));
}

//  Identity search, worst case: the block is absent and the whole list is scanned.
fn search(c: &mut Criterion) {
    let pool = Blocks::distinct(LEN);
    let absent = MemoryBlock::new(0, 0);

    let list: BlockList<'_, _> = pool.iter().collect();

    c.bench_function("index_of absent", |b| b.iter(|| list.index_of(black_box(&absent))));

    c.bench_function("cursor traversal", |b| b.iter(|| black_box(&list).cursor().count()));
}

criterion_group!(benches, insert_ends, middle, search);
criterion_main!(benches);
