use pretty_assertions::assert_eq;
use rangers::{
    AccumulateExt, ConcatExt, Cursor, FilterExt, IterExt, JoinExt, Ranger, TakeExt,
    TransformExt, UniqueExt, accumulate, all, filter, ranger_join, take, transform, unique, zip,
};

/// Drain a ranger while pausing after every `chunk` delivered elements,
/// resuming until exhaustion.
fn drain_chunked<R: Ranger>(mut rgr: R, chunk: usize) -> Vec<rangers::ItemOf<R>> {
    let mut out = Vec::new();
    loop {
        let mut left = chunk;
        let exhausted = rgr.drive(&mut |p: R::Cursor| {
            out.push(p.read());
            left -= 1;
            left != 0
        });
        if exhausted {
            return out;
        }
    }
}

#[test]
fn accumulate_over_transform_filter_all() {
    let data = vec![0, 1, 2, 3, 4, 5];
    let rgr = transform(|x: &i32| 3 * x, filter(|x: &i32| x % 2 == 0, all(&data)));
    assert_eq!(accumulate(rgr, 0), 18);
}

#[test]
fn concat_exhaustion_is_k_way() {
    let a = vec![1, 2];
    let b: Vec<i32> = Vec::new();
    let c = vec![3];
    let out: Vec<i32> = all(&a)
        .concat(all(&b))
        .concat(all(&c))
        .input_iter()
        .map(|p| *p)
        .collect();
    assert_eq!(out, vec![1, 2, 3]);
}

#[test]
fn zip_over_uneven_lengths_yields_shorter_count() {
    let a = vec![1, 2, 3, 4, 5];
    let b = vec![6, 7, 8];
    let out: Vec<(i32, i32)> = zip(all(&a), all(&b))
        .input_iter()
        .map(|(x, y)| (*x, *y))
        .collect();
    assert_eq!(out, vec![(1, 6), (2, 7), (3, 8)]);
}

#[test]
fn unique_suppresses_adjacent_duplicates_only() {
    let data = vec![1, 1, 2, 1];
    let out: Vec<i32> = unique(all(&data)).input_iter().map(|p| *p).collect();
    assert_eq!(out, vec![1, 2, 1]);
}

#[test]
fn join_with_per_inner_unique_flattens() {
    let data = vec![vec![1, 1, 2], vec![], vec![3]];
    let out: Vec<i32> = transform(|seq: &Vec<i32>| unique(all(seq)), all(&data))
        .join()
        .input_iter()
        .map(|p| *p)
        .collect();
    assert_eq!(out, vec![1, 2, 3]);
}

#[test]
fn take_yields_exactly_min_across_resumes() {
    let data = vec![1, 2, 3, 4, 5];
    for n in 0..8 {
        let mut rgr = take(n, all(&data));
        let mut total = 0;
        while rgr.next_cursor().is_some() {
            total += 1;
        }
        assert_eq!(total, n.min(data.len()));
    }
}

#[test]
fn composed_pipeline_matches_eager_iterator_chain() {
    let groups = vec![vec![0, 0, 1, 2], vec![2, 2, 3], vec![], vec![4, 4, 4, 5]];

    let mut flattened: Vec<i32> = groups.iter().flatten().copied().collect();
    flattened.dedup();
    let eager: i32 = flattened.iter().filter(|x| **x % 2 == 0).map(|x| 3 * x).sum();

    let rgr = ranger_join(all(&groups))
        .unique()
        .filter(|x: &i32| x % 2 == 0)
        .transform(|x: &i32| 3 * x);
    assert_eq!(rgr.accumulate(0), eager);
}

#[test]
fn chunked_resumption_equals_uninterrupted_traversal() {
    let groups = vec![vec![1, 1, 2], vec![3, 3], vec![], vec![4]];
    let full: Vec<i32> = ranger_join(all(&groups))
        .unique()
        .input_iter()
        .map(|p| *p)
        .collect();
    for chunk in 1..6 {
        let paused: Vec<i32> = drain_chunked(ranger_join(all(&groups)).unique(), chunk)
            .into_iter()
            .map(|p| *p)
            .collect();
        assert_eq!(paused, full, "chunk size {chunk}");
    }
}

#[test]
fn owned_source_pipeline_is_equivalent() {
    let sum = all(vec![0, 1, 2, 3, 4, 5])
        .filter(|x: i32| x % 2 == 0)
        .transform(|x: i32| 3 * x)
        .accumulate(0);
    assert_eq!(sum, 18);
}

#[test]
fn take_composes_with_concat_across_the_seam() {
    let a = vec![1, 2];
    let b = vec![3, 4, 5];
    let out: Vec<i32> = all(&a)
        .concat(all(&b))
        .take(3)
        .input_iter()
        .map(|p| *p)
        .collect();
    assert_eq!(out, vec![1, 2, 3]);
}
