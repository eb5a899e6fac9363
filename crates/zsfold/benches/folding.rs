use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;

use zs_energy::EnergyTable;
use zs_energy::RnaSequence;
use zsfold::Folder;

pub fn mfe_folding(c: &mut Criterion) {
    let mut group = c.benchmark_group("MFE");

    let table = EnergyTable::default();
    let folder = Folder::new(&table);

    let hairpin = RnaSequence::try_from("GGGGAAAACCCC").unwrap();
    let two_arms = RnaSequence::try_from("GCGGAUUUAGCUCAGUUGGGAGAGCGCCAGACUGAAGAUCUGG").unwrap();

    group.bench_function("Fold a 12 nt hairpin.", |b| {
        b.iter(|| folder.fold(&hairpin).unwrap());
    });

    group.sample_size(20);
    group.bench_function("Fold 43 nt of a tRNA.", |b| {
        b.iter(|| folder.fold(&two_arms).unwrap());
    });
}

criterion_group!(benches, mfe_folding);
criterion_main!(benches);
