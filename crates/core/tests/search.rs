use hunter_core::image::Image;
use hunter_core::index::ByteIndex;
use hunter_core::search::{find_occurrences, naive_scan, ValueCache};

fn both_searches(bytes: &[u8], needle: &[u8]) -> (Vec<u32>, Vec<u32>) {
    let image = Image::new(bytes).expect("image");
    let index = ByteIndex::build(&image);
    (find_occurrences(&image, &index, needle), naive_scan(&image, needle))
}

/// The index-based search is an optimization, not a semantic change: it
/// must return exactly what a full-buffer scan returns.
#[test]
fn index_search_agrees_with_naive_scan() {
    let mut bytes: Vec<u8> = (0..200u32).map(|i| (i * 13 % 256) as u8).collect();
    bytes.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
    bytes.extend(vec![0x00; 50]);
    bytes.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);

    for needle in [
        &[0xdeu8, 0xad, 0xbe, 0xef][..],
        &[0x00, 0x00, 0x00, 0x00][..],
        &[0x0d, 0x1a][..],
        &[0xde][..],
        &[0x77, 0x77, 0x77, 0x77][..], // absent
    ] {
        let (indexed, naive) = both_searches(&bytes, needle);
        assert_eq!(indexed, naive, "needle {needle:02x?}");
    }
}

/// Overlapping matches are all reported.
#[test]
fn overlapping_occurrences_are_all_found() {
    let bytes = [0xabu8, 0xab, 0xab, 0xab, 0xab];
    let (indexed, naive) = both_searches(&bytes, &[0xab, 0xab]);
    assert_eq!(indexed, vec![0, 1, 2, 3]);
    assert_eq!(indexed, naive);
}

/// A match ending exactly at the image end is reported; a candidate whose
/// tail would run past the end is not.
#[test]
fn tail_boundary_is_respected() {
    let bytes = [0x01u8, 0x02, 0x01, 0x02];
    let (indexed, naive) = both_searches(&bytes, &[0x01, 0x02]);
    assert_eq!(indexed, vec![0, 2]);
    assert_eq!(indexed, naive);

    // First byte matches at the last offset, but the needle needs two bytes.
    let bytes = [0x05u8, 0x06, 0x05];
    let (indexed, naive) = both_searches(&bytes, &[0x05, 0x07]);
    assert_eq!(indexed, Vec::<u32>::new());
    assert_eq!(indexed, naive);
}

#[test]
fn single_byte_needles_work() {
    let bytes = [9u8, 1, 9, 9, 2];
    let (indexed, naive) = both_searches(&bytes, &[9]);
    assert_eq!(indexed, vec![0, 2, 3]);
    assert_eq!(indexed, naive);
}

#[test]
fn empty_needle_matches_nothing() {
    let (indexed, naive) = both_searches(&[1u8, 2, 3], &[]);
    assert!(indexed.is_empty());
    assert!(naive.is_empty());
}

#[test]
fn value_cache_returns_first_occurrence_only() {
    let bytes = [0x11u8, 0x22, 0x33, 0x11, 0x22, 0x33];
    let image = Image::new(&bytes).expect("image");
    let index = ByteIndex::build(&image);
    let mut cache = ValueCache::new();

    let needle = [0x11u8, 0x22];
    assert_eq!(cache.first_occurrence(&image, &index, &needle), Some(0));
    // Second query is served from the cache; one entry, same answer.
    assert_eq!(cache.first_occurrence(&image, &index, &needle), Some(0));
    assert_eq!(cache.len(), 1);
}

#[test]
fn value_cache_remembers_misses() {
    let bytes = [0x01u8, 0x02, 0x03];
    let image = Image::new(&bytes).expect("image");
    let index = ByteIndex::build(&image);
    let mut cache = ValueCache::new();

    let absent = [0xaau8, 0xbb];
    assert_eq!(cache.first_occurrence(&image, &index, &absent), None);
    assert_eq!(cache.first_occurrence(&image, &index, &absent), None);
    assert_eq!(cache.len(), 1);
}

/// Once the entry cap is reached new values are not cached, but lookups
/// still return correct results.
#[test]
fn value_cache_is_bounded() {
    let bytes = [0x01u8, 0x02, 0x03, 0x04];
    let image = Image::new(&bytes).expect("image");
    let index = ByteIndex::build(&image);
    let mut cache = ValueCache::with_max_entries(1);

    assert_eq!(cache.first_occurrence(&image, &index, &[0x01, 0x02]), Some(0));
    assert_eq!(cache.first_occurrence(&image, &index, &[0x03, 0x04]), Some(2));
    assert_eq!(cache.first_occurrence(&image, &index, &[0x03, 0x04]), Some(2));
    assert_eq!(cache.len(), 1);
}
